use bitflags::bitflags;
use bitflags::Flags;

/// Mask type usable by the dispatch engine
///
/// Implemented by the five per-family target enumerations. `FAMILY` names
/// the family in configuration errors.
pub trait TargetMask: Flags<Bits = u32> + Copy + std::fmt::Debug + PartialEq + 'static {
    const FAMILY: &'static str;
}

bitflags! {
    /// Interceptable connection operations
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConnectionTargets: u32 {
        const OPEN = 1 << 0;
        const CLOSE = 1 << 1;
        const CHANGE_DATABASE = 1 << 2;
        const BEGIN_TRANSACTION = 1 << 3;
        const CREATE_COMMAND = 1 << 4;
        const DISPOSE = 1 << 5;
    }
}

bitflags! {
    /// Interceptable transaction operations
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TransactionTargets: u32 {
        const COMMIT = 1 << 0;
        const ROLLBACK = 1 << 1;
        const DISPOSE = 1 << 2;
    }
}

bitflags! {
    /// Interceptable command operations
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CommandTargets: u32 {
        const CANCEL = 1 << 0;
        const CREATE_PARAMETER = 1 << 1;
        const DISPOSE = 1 << 2;
        const EXECUTE_NON_QUERY = 1 << 3;
        const EXECUTE_READER = 1 << 4;
        const EXECUTE_SCALAR = 1 << 5;
        const PREPARE = 1 << 6;
    }
}

bitflags! {
    /// Interceptable parameter collection operations
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParameterTargets: u32 {
        const ADD = 1 << 0;
        const INSERT = 1 << 1;
        const REMOVE = 1 << 2;
        const REMOVE_AT = 1 << 3;
        const CLEAR = 1 << 4;
    }
}

bitflags! {
    /// Interceptable reader operations
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReaderTargets: u32 {
        const READ = 1 << 0;
        const NEXT_RESULT = 1 << 1;
        const GET_VALUE = 1 << 2;
        const CLOSE = 1 << 3;
        const DISPOSE = 1 << 4;
    }
}

impl TargetMask for ConnectionTargets {
    const FAMILY: &'static str = "connection";
}

impl TargetMask for TransactionTargets {
    const FAMILY: &'static str = "transaction";
}

impl TargetMask for CommandTargets {
    const FAMILY: &'static str = "command";
}

impl TargetMask for ParameterTargets {
    const FAMILY: &'static str = "parameters";
}

impl TargetMask for ReaderTargets {
    const FAMILY: &'static str = "reader";
}
