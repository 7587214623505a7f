use crate::error::DbResult;
use crate::types::{DbParameter, DbValue};

/// A connection to a database
///
/// This is the surface drivers implement and decorating wrappers re-expose.
/// The engine treats implementations as opaque: it requires no more than
/// these operations and never inspects driver state.
pub trait DbConnection: Send {
    /// Open the connection
    fn open(&mut self) -> DbResult<()>;

    /// Close the connection
    fn close(&mut self) -> DbResult<()>;

    /// Switch the connection to another database
    fn change_database(&mut self, database: &str) -> DbResult<()>;

    /// Begin a transaction
    fn begin_transaction(&mut self) -> DbResult<Box<dyn DbTransaction>>;

    /// Create a command bound to this connection
    fn create_command(&mut self, text: &str) -> DbResult<Box<dyn DbCommand>>;

    /// Release the connection and any driver resources it holds
    fn dispose(&mut self) -> DbResult<()>;

    /// Check if the connection is currently open
    fn is_open(&self) -> bool;
}

/// A database transaction
pub trait DbTransaction: Send {
    /// Commit the transaction
    fn commit(&mut self) -> DbResult<()>;

    /// Rollback the transaction
    fn rollback(&mut self) -> DbResult<()>;

    /// Release the transaction without committing
    fn dispose(&mut self) -> DbResult<()>;
}

/// A command (statement) bound to a connection
pub trait DbCommand: Send {
    /// The command text (SQL)
    fn text(&self) -> &str;

    /// The command's parameter collection
    fn parameters(&self) -> &dyn DbParameterCollection;

    /// The command's parameter collection, mutable
    fn parameters_mut(&mut self) -> &mut dyn DbParameterCollection;

    /// Cancel a running execution
    fn cancel(&mut self) -> DbResult<()>;

    /// Create a parameter suitable for this command's driver
    fn create_parameter(&mut self, name: &str, value: DbValue) -> DbResult<DbParameter>;

    /// Prepare (compile) the command on the server
    fn prepare(&mut self) -> DbResult<()>;

    /// Execute and return the number of affected rows
    fn execute_non_query(&mut self) -> DbResult<u64>;

    /// Execute and return the first column of the first row, if any
    fn execute_scalar(&mut self) -> DbResult<Option<DbValue>>;

    /// Execute and return a row reader
    fn execute_reader(&mut self) -> DbResult<Box<dyn DbReader>>;

    /// Release the command
    fn dispose(&mut self) -> DbResult<()>;
}

/// The ordered parameter collection of a command
pub trait DbParameterCollection: Send {
    /// Number of parameters
    fn len(&self) -> usize;

    /// Check if the collection is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a parameter by position
    fn get(&self, index: usize) -> Option<&DbParameter>;

    /// Find the position of a named parameter
    fn index_of(&self, name: &str) -> Option<usize>;

    /// Append a parameter, returning its position
    fn add(&mut self, parameter: DbParameter) -> DbResult<usize>;

    /// Insert a parameter at a position
    fn insert(&mut self, index: usize, parameter: DbParameter) -> DbResult<()>;

    /// Remove a parameter by name, returning whether it was present
    fn remove(&mut self, name: &str) -> DbResult<bool>;

    /// Remove the parameter at a position
    fn remove_at(&mut self, index: usize) -> DbResult<()>;

    /// Remove all parameters
    fn clear(&mut self) -> DbResult<()>;
}

/// A forward-only reader over one or more result sets
///
/// The cursor starts before the first row; `read` advances it and reports
/// whether a row is available.
pub trait DbReader: Send {
    /// Number of columns in the current result set
    fn field_count(&self) -> usize;

    /// Advance to the next row
    fn read(&mut self) -> DbResult<bool>;

    /// Advance to the next result set
    fn next_result(&mut self) -> DbResult<bool>;

    /// Get a column value from the current row
    fn get_value(&mut self, ordinal: usize) -> DbResult<DbValue>;

    /// Close the reader
    fn close(&mut self) -> DbResult<()>;

    /// Release the reader
    fn dispose(&mut self) -> DbResult<()>;
}
