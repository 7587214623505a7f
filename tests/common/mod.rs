// Shared test harness: recording filters that journal their entry/exit
// around each hook, plus scripted connection builders.

#![allow(dead_code)]

use std::sync::Arc;

use dbtap::driver::memory::{Journal, MemoryConnection};
use dbtap::driver::traits::{
    DbCommand, DbConnection, DbParameterCollection, DbReader, DbTransaction,
};
use dbtap::error::DbResult;
use dbtap::filter::targets::{
    CommandTargets, ConnectionTargets, ParameterTargets, ReaderTargets, TransactionTargets,
};
use dbtap::filter::traits::{
    CommandChain, CommandFilter, ConnectionChain, ConnectionFilter, ParameterChain,
    ParameterFilter, ReaderChain, ReaderFilter, TransactionChain, TransactionFilter,
};
use dbtap::types::{DbParameter, DbValue};

/// Connection filter journaling entry/exit around every hook it targets
pub struct RecordingConnectionFilter {
    pub label: &'static str,
    pub mask: ConnectionTargets,
    pub journal: Journal,
}

impl RecordingConnectionFilter {
    pub fn new(label: &'static str, mask: ConnectionTargets, journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            label,
            mask,
            journal,
        })
    }

    fn enter(&self, op: &str) {
        self.journal.record(format!("{}:enter:{op}", self.label));
    }

    fn exit(&self, op: &str) {
        self.journal.record(format!("{}:exit:{op}", self.label));
    }
}

impl ConnectionFilter for RecordingConnectionFilter {
    fn targets(&self) -> ConnectionTargets {
        self.mask
    }

    fn open(&self, conn: &mut (dyn DbConnection + 'static), next: ConnectionChain<'_, (), ()>) -> DbResult<()> {
        self.enter("open");
        let result = next.run(conn, ());
        self.exit("open");
        result
    }

    fn close(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        next: ConnectionChain<'_, (), ()>,
    ) -> DbResult<()> {
        self.enter("close");
        let result = next.run(conn, ());
        self.exit("close");
        result
    }

    fn change_database<'a>(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        database: &'a str,
        next: ConnectionChain<'_, &'a str, ()>,
    ) -> DbResult<()> {
        self.enter("change_database");
        let result = next.run(conn, database);
        self.exit("change_database");
        result
    }

    fn begin_transaction(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        next: ConnectionChain<'_, (), Box<dyn DbTransaction>>,
    ) -> DbResult<Box<dyn DbTransaction>> {
        self.enter("begin_transaction");
        let result = next.run(conn, ());
        self.exit("begin_transaction");
        result
    }

    fn create_command<'a>(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        text: &'a str,
        next: ConnectionChain<'_, &'a str, Box<dyn DbCommand>>,
    ) -> DbResult<Box<dyn DbCommand>> {
        self.enter("create_command");
        let result = next.run(conn, text);
        self.exit("create_command");
        result
    }

    fn dispose(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        next: ConnectionChain<'_, (), ()>,
    ) -> DbResult<()> {
        self.enter("dispose");
        let result = next.run(conn, ());
        self.exit("dispose");
        result
    }
}

/// Transaction filter journaling entry/exit around every hook it targets
pub struct RecordingTransactionFilter {
    pub label: &'static str,
    pub mask: TransactionTargets,
    pub journal: Journal,
}

impl RecordingTransactionFilter {
    pub fn new(label: &'static str, mask: TransactionTargets, journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            label,
            mask,
            journal,
        })
    }
}

impl TransactionFilter for RecordingTransactionFilter {
    fn targets(&self) -> TransactionTargets {
        self.mask
    }

    fn commit(
        &self,
        tx: &mut (dyn DbTransaction + 'static),
        next: TransactionChain<'_, (), ()>,
    ) -> DbResult<()> {
        self.journal.record(format!("{}:enter:commit", self.label));
        let result = next.run(tx, ());
        self.journal.record(format!("{}:exit:commit", self.label));
        result
    }

    fn rollback(
        &self,
        tx: &mut (dyn DbTransaction + 'static),
        next: TransactionChain<'_, (), ()>,
    ) -> DbResult<()> {
        self.journal.record(format!("{}:enter:rollback", self.label));
        let result = next.run(tx, ());
        self.journal.record(format!("{}:exit:rollback", self.label));
        result
    }

    fn dispose(
        &self,
        tx: &mut (dyn DbTransaction + 'static),
        next: TransactionChain<'_, (), ()>,
    ) -> DbResult<()> {
        self.journal.record(format!("{}:enter:dispose", self.label));
        let result = next.run(tx, ());
        self.journal.record(format!("{}:exit:dispose", self.label));
        result
    }
}

/// Command filter journaling entry/exit around every hook it targets
pub struct RecordingCommandFilter {
    pub label: &'static str,
    pub mask: CommandTargets,
    pub journal: Journal,
}

impl RecordingCommandFilter {
    pub fn new(label: &'static str, mask: CommandTargets, journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            label,
            mask,
            journal,
        })
    }

    fn enter(&self, op: &str) {
        self.journal.record(format!("{}:enter:{op}", self.label));
    }

    fn exit(&self, op: &str) {
        self.journal.record(format!("{}:exit:{op}", self.label));
    }
}

impl CommandFilter for RecordingCommandFilter {
    fn targets(&self) -> CommandTargets {
        self.mask
    }

    fn cancel(&self, cmd: &mut (dyn DbCommand + 'static), next: CommandChain<'_, (), ()>) -> DbResult<()> {
        self.enter("cancel");
        let result = next.run(cmd, ());
        self.exit("cancel");
        result
    }

    fn create_parameter<'a>(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        name: &'a str,
        value: DbValue,
        next: CommandChain<'_, (&'a str, DbValue), DbParameter>,
    ) -> DbResult<DbParameter> {
        self.enter("create_parameter");
        let result = next.run(cmd, (name, value));
        self.exit("create_parameter");
        result
    }

    fn prepare(&self, cmd: &mut (dyn DbCommand + 'static), next: CommandChain<'_, (), ()>) -> DbResult<()> {
        self.enter("prepare");
        let result = next.run(cmd, ());
        self.exit("prepare");
        result
    }

    fn execute_non_query(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), u64>,
    ) -> DbResult<u64> {
        self.enter("execute_non_query");
        let result = next.run(cmd, ());
        self.exit("execute_non_query");
        result
    }

    fn execute_scalar(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), Option<DbValue>>,
    ) -> DbResult<Option<DbValue>> {
        self.enter("execute_scalar");
        let result = next.run(cmd, ());
        self.exit("execute_scalar");
        result
    }

    fn execute_reader(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), Box<dyn DbReader>>,
    ) -> DbResult<Box<dyn DbReader>> {
        self.enter("execute_reader");
        let result = next.run(cmd, ());
        self.exit("execute_reader");
        result
    }

    fn dispose(&self, cmd: &mut (dyn DbCommand + 'static), next: CommandChain<'_, (), ()>) -> DbResult<()> {
        self.enter("dispose");
        let result = next.run(cmd, ());
        self.exit("dispose");
        result
    }
}

/// Parameter filter journaling entry/exit around every hook it targets
pub struct RecordingParameterFilter {
    pub label: &'static str,
    pub mask: ParameterTargets,
    pub journal: Journal,
}

impl RecordingParameterFilter {
    pub fn new(label: &'static str, mask: ParameterTargets, journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            label,
            mask,
            journal,
        })
    }

    fn enter(&self, op: &str) {
        self.journal.record(format!("{}:enter:{op}", self.label));
    }

    fn exit(&self, op: &str) {
        self.journal.record(format!("{}:exit:{op}", self.label));
    }
}

impl ParameterFilter for RecordingParameterFilter {
    fn targets(&self) -> ParameterTargets {
        self.mask
    }

    fn add<'o>(
        &self,
        params: &mut (dyn DbParameterCollection + 'o),
        parameter: DbParameter,
        next: ParameterChain<'_, 'o, DbParameter, usize>,
    ) -> DbResult<usize> {
        self.enter("add");
        let result = next.run(params, parameter);
        self.exit("add");
        result
    }

    fn insert<'o>(
        &self,
        params: &mut (dyn DbParameterCollection + 'o),
        index: usize,
        parameter: DbParameter,
        next: ParameterChain<'_, 'o, (usize, DbParameter), ()>,
    ) -> DbResult<()> {
        self.enter("insert");
        let result = next.run(params, (index, parameter));
        self.exit("insert");
        result
    }

    fn remove<'o, 'a>(
        &self,
        params: &mut (dyn DbParameterCollection + 'o),
        name: &'a str,
        next: ParameterChain<'_, 'o, &'a str, bool>,
    ) -> DbResult<bool> {
        self.enter("remove");
        let result = next.run(params, name);
        self.exit("remove");
        result
    }

    fn remove_at<'o>(
        &self,
        params: &mut (dyn DbParameterCollection + 'o),
        index: usize,
        next: ParameterChain<'_, 'o, usize, ()>,
    ) -> DbResult<()> {
        self.enter("remove_at");
        let result = next.run(params, index);
        self.exit("remove_at");
        result
    }

    fn clear<'o>(
        &self,
        params: &mut (dyn DbParameterCollection + 'o),
        next: ParameterChain<'_, 'o, (), ()>,
    ) -> DbResult<()> {
        self.enter("clear");
        let result = next.run(params, ());
        self.exit("clear");
        result
    }
}

/// Reader filter journaling entry/exit around every hook it targets
pub struct RecordingReaderFilter {
    pub label: &'static str,
    pub mask: ReaderTargets,
    pub journal: Journal,
}

impl RecordingReaderFilter {
    pub fn new(label: &'static str, mask: ReaderTargets, journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            label,
            mask,
            journal,
        })
    }

    fn enter(&self, op: &str) {
        self.journal.record(format!("{}:enter:{op}", self.label));
    }

    fn exit(&self, op: &str) {
        self.journal.record(format!("{}:exit:{op}", self.label));
    }
}

impl ReaderFilter for RecordingReaderFilter {
    fn targets(&self) -> ReaderTargets {
        self.mask
    }

    fn read(&self, reader: &mut (dyn DbReader + 'static), next: ReaderChain<'_, (), bool>) -> DbResult<bool> {
        self.enter("read");
        let result = next.run(reader, ());
        self.exit("read");
        result
    }

    fn next_result(
        &self,
        reader: &mut (dyn DbReader + 'static),
        next: ReaderChain<'_, (), bool>,
    ) -> DbResult<bool> {
        self.enter("next_result");
        let result = next.run(reader, ());
        self.exit("next_result");
        result
    }

    fn get_value(
        &self,
        reader: &mut (dyn DbReader + 'static),
        ordinal: usize,
        next: ReaderChain<'_, usize, DbValue>,
    ) -> DbResult<DbValue> {
        self.enter("get_value");
        let result = next.run(reader, ordinal);
        self.exit("get_value");
        result
    }

    fn close(&self, reader: &mut (dyn DbReader + 'static), next: ReaderChain<'_, (), ()>) -> DbResult<()> {
        self.enter("close");
        let result = next.run(reader, ());
        self.exit("close");
        result
    }

    fn dispose(&self, reader: &mut (dyn DbReader + 'static), next: ReaderChain<'_, (), ()>) -> DbResult<()> {
        self.enter("dispose");
        let result = next.run(reader, ());
        self.exit("dispose");
        result
    }
}

/// Command filter that answers `execute_non_query` itself, never invoking
/// the rest of the chain
pub struct ShortCircuitFilter {
    pub label: &'static str,
    pub rows: u64,
    pub journal: Journal,
}

impl CommandFilter for ShortCircuitFilter {
    fn targets(&self) -> CommandTargets {
        CommandTargets::EXECUTE_NON_QUERY
    }

    fn execute_non_query(
        &self,
        _cmd: &mut (dyn DbCommand + 'static),
        _next: CommandChain<'_, (), u64>,
    ) -> DbResult<u64> {
        self.journal
            .record(format!("{}:short_circuit:execute_non_query", self.label));
        Ok(self.rows)
    }
}

/// Command filter that invokes its continuation twice
pub struct RetryFilter {
    pub journal: Journal,
}

impl CommandFilter for RetryFilter {
    fn targets(&self) -> CommandTargets {
        CommandTargets::EXECUTE_NON_QUERY
    }

    fn execute_non_query(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), u64>,
    ) -> DbResult<u64> {
        self.journal.record("retry:first_attempt");
        let _ = next.run(cmd, ())?;
        self.journal.record("retry:second_attempt");
        next.run(cmd, ())
    }
}

/// Connection filter that rewrites the database name before forwarding
pub struct RedirectDatabaseFilter {
    pub target: &'static str,
}

impl ConnectionFilter for RedirectDatabaseFilter {
    fn targets(&self) -> ConnectionTargets {
        ConnectionTargets::CHANGE_DATABASE
    }

    fn change_database<'a>(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        _database: &'a str,
        next: ConnectionChain<'_, &'a str, ()>,
    ) -> DbResult<()> {
        next.run(conn, self.target)
    }
}

/// A scripted connection with a couple of canned result sets
pub fn scripted_connection() -> (MemoryConnection, Journal) {
    let conn = MemoryConnection::new()
        .with_rows(
            "SELECT name FROM users",
            vec![vec![DbValue::from("alice")], vec![DbValue::from("bob")]],
        )
        .with_rows("SELECT 1", vec![vec![DbValue::Int(1)]])
        .with_rows_affected("DELETE FROM users", 2);
    let journal = conn.journal();
    (conn, journal)
}
