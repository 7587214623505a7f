// Decorating wrappers. Each implements the primitive contract it wraps and
// routes every flagged operation through the shared filter stack; factory
// results come back pre-wrapped with the same stack, so interception is
// transitive through the object graph.

pub mod command;
pub mod connection;
pub mod reader;
pub mod transaction;

// Re-export core types
pub use command::FilteredCommand;
pub use connection::FilteredConnection;
pub use reader::FilteredReader;
pub use transaction::FilteredTransaction;
