// Stock filters shipped with the crate. These are ordinary filters with no
// special engine support; they double as reference implementations for
// filter authors.

pub mod logging;
pub mod stats;

pub use logging::*;
pub use stats::*;
