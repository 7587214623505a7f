// Primitive contracts implemented by database drivers, plus the scripted
// in-memory driver used for testing filter behavior without a real database

pub mod memory;
pub mod traits;

// Re-export core types
pub use memory::*;
pub use traits::*;
