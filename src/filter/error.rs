use thiserror::Error;

/// Configuration errors raised at filter-set construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("target mask {bits:#010x} has bits undefined for the {family} family")]
    UnknownTargets { family: &'static str, bits: u32 },
}
