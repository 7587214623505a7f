// In-memory scripted driver. Commands resolve their result sets and
// affected-row counts from a script table keyed by command text; every
// primitive operation is journaled so tests can assert ordering and
// pass-through equivalence.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::driver::traits::{
    DbCommand, DbConnection, DbParameterCollection, DbReader, DbTransaction,
};
use crate::error::{DbError, DbResult};
use crate::types::{DbParameter, DbValue};

/// Shared, ordered log of primitive operations
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    /// Snapshot of all entries in order
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

/// Scripted behavior for one command text
#[derive(Debug, Clone, Default)]
struct Script {
    result_sets: Vec<Vec<Vec<DbValue>>>,
    rows_affected: u64,
}

type ScriptTable = Arc<Mutex<HashMap<String, Script>>>;

/// Scripted in-memory connection
pub struct MemoryConnection {
    open: bool,
    disposed: bool,
    database: String,
    scripts: ScriptTable,
    journal: Journal,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self {
            open: false,
            disposed: false,
            database: "main".to_string(),
            scripts: Arc::new(Mutex::new(HashMap::new())),
            journal: Journal::new(),
        }
    }

    /// Script a single result set for a command text
    pub fn with_rows(self, text: impl Into<String>, rows: Vec<Vec<DbValue>>) -> Self {
        self.with_result_sets(text, vec![rows])
    }

    /// Script multiple result sets for a command text
    pub fn with_result_sets(self, text: impl Into<String>, sets: Vec<Vec<Vec<DbValue>>>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .entry(text.into())
            .or_default()
            .result_sets = sets;
        self
    }

    /// Script an affected-row count for a command text
    pub fn with_rows_affected(self, text: impl Into<String>, rows: u64) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .entry(text.into())
            .or_default()
            .rows_affected = rows;
        self
    }

    /// Handle to the connection's operation journal
    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }

    /// Name of the currently selected database
    pub fn database(&self) -> &str {
        &self.database
    }

    fn ensure_usable(&self) -> DbResult<()> {
        if self.disposed {
            return Err(DbError::invalid_operation("connection is disposed"));
        }
        Ok(())
    }

    fn ensure_open(&self) -> DbResult<()> {
        self.ensure_usable()?;
        if !self.open {
            return Err(DbError::invalid_operation("connection is not open"));
        }
        Ok(())
    }
}

impl Default for MemoryConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl DbConnection for MemoryConnection {
    fn open(&mut self) -> DbResult<()> {
        self.ensure_usable()?;
        self.open = true;
        self.journal.record("connection.open");
        Ok(())
    }

    fn close(&mut self) -> DbResult<()> {
        self.ensure_usable()?;
        self.open = false;
        self.journal.record("connection.close");
        Ok(())
    }

    fn change_database(&mut self, database: &str) -> DbResult<()> {
        self.ensure_open()?;
        self.database = database.to_string();
        self.journal
            .record(format!("connection.change_database:{database}"));
        Ok(())
    }

    fn begin_transaction(&mut self) -> DbResult<Box<dyn DbTransaction>> {
        self.ensure_open()?;
        self.journal.record("connection.begin_transaction");
        Ok(Box::new(MemoryTransaction {
            finished: false,
            journal: self.journal.clone(),
        }))
    }

    fn create_command(&mut self, text: &str) -> DbResult<Box<dyn DbCommand>> {
        self.ensure_open()?;
        self.journal.record(format!("connection.create_command:{text}"));
        Ok(Box::new(MemoryCommand {
            text: text.to_string(),
            params: MemoryParameterCollection {
                params: Vec::new(),
                journal: self.journal.clone(),
            },
            scripts: self.scripts.clone(),
            journal: self.journal.clone(),
        }))
    }

    fn dispose(&mut self) -> DbResult<()> {
        self.open = false;
        self.disposed = true;
        self.journal.record("connection.dispose");
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Scripted in-memory transaction
pub struct MemoryTransaction {
    finished: bool,
    journal: Journal,
}

impl MemoryTransaction {
    fn ensure_active(&self) -> DbResult<()> {
        if self.finished {
            return Err(DbError::invalid_operation("transaction already finished"));
        }
        Ok(())
    }
}

impl DbTransaction for MemoryTransaction {
    fn commit(&mut self) -> DbResult<()> {
        self.ensure_active()?;
        self.finished = true;
        self.journal.record("transaction.commit");
        Ok(())
    }

    fn rollback(&mut self) -> DbResult<()> {
        self.ensure_active()?;
        self.finished = true;
        self.journal.record("transaction.rollback");
        Ok(())
    }

    fn dispose(&mut self) -> DbResult<()> {
        self.finished = true;
        self.journal.record("transaction.dispose");
        Ok(())
    }
}

/// Scripted in-memory command
pub struct MemoryCommand {
    text: String,
    params: MemoryParameterCollection,
    scripts: ScriptTable,
    journal: Journal,
}

impl MemoryCommand {
    fn script(&self) -> Script {
        self.scripts
            .lock()
            .unwrap()
            .get(&self.text)
            .cloned()
            .unwrap_or_default()
    }
}

impl DbCommand for MemoryCommand {
    fn text(&self) -> &str {
        &self.text
    }

    fn parameters(&self) -> &dyn DbParameterCollection {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut dyn DbParameterCollection {
        &mut self.params
    }

    fn cancel(&mut self) -> DbResult<()> {
        self.journal.record("command.cancel");
        Ok(())
    }

    fn create_parameter(&mut self, name: &str, value: DbValue) -> DbResult<DbParameter> {
        self.journal.record(format!("command.create_parameter:{name}"));
        Ok(DbParameter::new(name, value))
    }

    fn prepare(&mut self) -> DbResult<()> {
        self.journal.record(format!("command.prepare:{}", self.text));
        Ok(())
    }

    fn execute_non_query(&mut self) -> DbResult<u64> {
        self.journal
            .record(format!("command.execute_non_query:{}", self.text));
        Ok(self.script().rows_affected)
    }

    fn execute_scalar(&mut self) -> DbResult<Option<DbValue>> {
        self.journal
            .record(format!("command.execute_scalar:{}", self.text));
        let script = self.script();
        Ok(script
            .result_sets
            .first()
            .and_then(|rows| rows.first())
            .and_then(|row| row.first())
            .cloned())
    }

    fn execute_reader(&mut self) -> DbResult<Box<dyn DbReader>> {
        self.journal
            .record(format!("command.execute_reader:{}", self.text));
        Ok(Box::new(MemoryReader {
            sets: self.script().result_sets,
            set_index: 0,
            row_index: None,
            closed: false,
            journal: self.journal.clone(),
        }))
    }

    fn dispose(&mut self) -> DbResult<()> {
        self.journal.record("command.dispose");
        Ok(())
    }
}

/// Ordered in-memory parameter collection
pub struct MemoryParameterCollection {
    params: Vec<DbParameter>,
    journal: Journal,
}

impl DbParameterCollection for MemoryParameterCollection {
    fn len(&self) -> usize {
        self.params.len()
    }

    fn get(&self, index: usize) -> Option<&DbParameter> {
        self.params.get(index)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }

    fn add(&mut self, parameter: DbParameter) -> DbResult<usize> {
        self.journal.record(format!("params.add:{}", parameter.name));
        self.params.push(parameter);
        Ok(self.params.len() - 1)
    }

    fn insert(&mut self, index: usize, parameter: DbParameter) -> DbResult<()> {
        if index > self.params.len() {
            return Err(DbError::parameter(format!(
                "insert index {index} out of range for {} parameters",
                self.params.len()
            )));
        }
        self.journal
            .record(format!("params.insert:{}:{}", index, parameter.name));
        self.params.insert(index, parameter);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> DbResult<bool> {
        self.journal.record(format!("params.remove:{name}"));
        match self.params.iter().position(|p| p.name == name) {
            Some(index) => {
                self.params.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_at(&mut self, index: usize) -> DbResult<()> {
        if index >= self.params.len() {
            return Err(DbError::parameter(format!(
                "remove index {index} out of range for {} parameters",
                self.params.len()
            )));
        }
        self.journal.record(format!("params.remove_at:{index}"));
        self.params.remove(index);
        Ok(())
    }

    fn clear(&mut self) -> DbResult<()> {
        self.journal.record("params.clear");
        self.params.clear();
        Ok(())
    }
}

/// Forward-only cursor over scripted result sets
pub struct MemoryReader {
    sets: Vec<Vec<Vec<DbValue>>>,
    set_index: usize,
    row_index: Option<usize>,
    closed: bool,
    journal: Journal,
}

impl MemoryReader {
    fn ensure_readable(&self) -> DbResult<()> {
        if self.closed {
            return Err(DbError::invalid_operation("reader is closed"));
        }
        Ok(())
    }

    fn current_set(&self) -> &[Vec<DbValue>] {
        self.sets.get(self.set_index).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl DbReader for MemoryReader {
    fn field_count(&self) -> usize {
        self.current_set().first().map(Vec::len).unwrap_or(0)
    }

    fn read(&mut self) -> DbResult<bool> {
        self.ensure_readable()?;
        self.journal.record("reader.read");
        let next = self.row_index.map(|i| i + 1).unwrap_or(0);
        if next < self.current_set().len() {
            self.row_index = Some(next);
            Ok(true)
        } else {
            self.row_index = Some(self.current_set().len());
            Ok(false)
        }
    }

    fn next_result(&mut self) -> DbResult<bool> {
        self.ensure_readable()?;
        self.journal.record("reader.next_result");
        if self.set_index + 1 < self.sets.len() {
            self.set_index += 1;
            self.row_index = None;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn get_value(&mut self, ordinal: usize) -> DbResult<DbValue> {
        self.ensure_readable()?;
        self.journal.record(format!("reader.get_value:{ordinal}"));
        let row = self
            .row_index
            .and_then(|i| self.current_set().get(i))
            .ok_or_else(|| DbError::invalid_operation("reader has no current row"))?;
        row.get(ordinal)
            .cloned()
            .ok_or_else(|| DbError::invalid_operation(format!("ordinal {ordinal} out of range")))
    }

    fn close(&mut self) -> DbResult<()> {
        self.closed = true;
        self.journal.record("reader.close");
        Ok(())
    }

    fn dispose(&mut self) -> DbResult<()> {
        self.closed = true;
        self.journal.record("reader.dispose");
        Ok(())
    }
}
