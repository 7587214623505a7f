use crate::driver::traits::{
    DbCommand, DbConnection, DbParameterCollection, DbReader, DbTransaction,
};
use crate::error::DbResult;
use crate::filter::chain::Next;
use crate::filter::targets::{
    CommandTargets, ConnectionTargets, ParameterTargets, ReaderTargets, TransactionTargets,
};
use crate::types::{DbParameter, DbValue};

/// Continuation type for connection operations
pub type ConnectionChain<'a, A, R> = Next<'a, dyn ConnectionFilter, dyn DbConnection, A, R>;
/// Continuation type for transaction operations
pub type TransactionChain<'a, A, R> = Next<'a, dyn TransactionFilter, dyn DbTransaction, A, R>;
/// Continuation type for command operations
pub type CommandChain<'a, A, R> = Next<'a, dyn CommandFilter, dyn DbCommand, A, R>;
/// Continuation type for parameter collection operations
pub type ParameterChain<'a, 'o, A, R> =
    Next<'a, dyn ParameterFilter, dyn DbParameterCollection + 'o, A, R>;
/// Continuation type for reader operations
pub type ReaderChain<'a, A, R> = Next<'a, dyn ReaderFilter, dyn DbReader, A, R>;

/// Hook logic for connection operations
///
/// Every method defaults to a straight pass-through, so a concrete filter
/// overrides only the operations named in its `targets()` mask. Overriding
/// a method whose flag is absent from the mask is allowed but has no
/// effect: the engine never routes that operation through this filter.
///
/// A filter normally forwards via `next.run(..)` - wrap the call in your
/// own pre/post logic, or skip it entirely to short-circuit the chain. The
/// continuation is `Copy` and may be invoked more than once. Errors from
/// downstream propagate unchanged; use a guard or explicit match if exit
/// logic must run on failure too.
pub trait ConnectionFilter: Send + Sync {
    /// The operations this filter wants to intercept
    ///
    /// Queried once at filter-set construction; must be stable for the
    /// lifetime of the filter.
    fn targets(&self) -> ConnectionTargets {
        ConnectionTargets::empty()
    }

    fn open(&self, conn: &mut (dyn DbConnection + 'static), next: ConnectionChain<'_, (), ()>) -> DbResult<()> {
        next.run(conn, ())
    }

    fn close(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        next: ConnectionChain<'_, (), ()>,
    ) -> DbResult<()> {
        next.run(conn, ())
    }

    fn change_database<'a>(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        database: &'a str,
        next: ConnectionChain<'_, &'a str, ()>,
    ) -> DbResult<()> {
        next.run(conn, database)
    }

    fn begin_transaction(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        next: ConnectionChain<'_, (), Box<dyn DbTransaction>>,
    ) -> DbResult<Box<dyn DbTransaction>> {
        next.run(conn, ())
    }

    fn create_command<'a>(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        text: &'a str,
        next: ConnectionChain<'_, &'a str, Box<dyn DbCommand>>,
    ) -> DbResult<Box<dyn DbCommand>> {
        next.run(conn, text)
    }

    fn dispose(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        next: ConnectionChain<'_, (), ()>,
    ) -> DbResult<()> {
        next.run(conn, ())
    }
}

/// Hook logic for transaction operations
pub trait TransactionFilter: Send + Sync {
    /// The operations this filter wants to intercept
    fn targets(&self) -> TransactionTargets {
        TransactionTargets::empty()
    }

    fn commit(
        &self,
        tx: &mut (dyn DbTransaction + 'static),
        next: TransactionChain<'_, (), ()>,
    ) -> DbResult<()> {
        next.run(tx, ())
    }

    fn rollback(
        &self,
        tx: &mut (dyn DbTransaction + 'static),
        next: TransactionChain<'_, (), ()>,
    ) -> DbResult<()> {
        next.run(tx, ())
    }

    fn dispose(
        &self,
        tx: &mut (dyn DbTransaction + 'static),
        next: TransactionChain<'_, (), ()>,
    ) -> DbResult<()> {
        next.run(tx, ())
    }
}

/// Hook logic for command operations
pub trait CommandFilter: Send + Sync {
    /// The operations this filter wants to intercept
    fn targets(&self) -> CommandTargets {
        CommandTargets::empty()
    }

    fn cancel(&self, cmd: &mut (dyn DbCommand + 'static), next: CommandChain<'_, (), ()>) -> DbResult<()> {
        next.run(cmd, ())
    }

    fn create_parameter<'a>(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        name: &'a str,
        value: DbValue,
        next: CommandChain<'_, (&'a str, DbValue), DbParameter>,
    ) -> DbResult<DbParameter> {
        next.run(cmd, (name, value))
    }

    fn prepare(&self, cmd: &mut (dyn DbCommand + 'static), next: CommandChain<'_, (), ()>) -> DbResult<()> {
        next.run(cmd, ())
    }

    fn execute_non_query(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), u64>,
    ) -> DbResult<u64> {
        next.run(cmd, ())
    }

    fn execute_scalar(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), Option<DbValue>>,
    ) -> DbResult<Option<DbValue>> {
        next.run(cmd, ())
    }

    fn execute_reader(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), Box<dyn DbReader>>,
    ) -> DbResult<Box<dyn DbReader>> {
        next.run(cmd, ())
    }

    fn dispose(&self, cmd: &mut (dyn DbCommand + 'static), next: CommandChain<'_, (), ()>) -> DbResult<()> {
        next.run(cmd, ())
    }
}

/// Hook logic for parameter collection operations
pub trait ParameterFilter: Send + Sync {
    /// The operations this filter wants to intercept
    fn targets(&self) -> ParameterTargets {
        ParameterTargets::empty()
    }

    fn add<'o>(
        &self,
        params: &mut (dyn DbParameterCollection + 'o),
        parameter: DbParameter,
        next: ParameterChain<'_, 'o, DbParameter, usize>,
    ) -> DbResult<usize> {
        next.run(params, parameter)
    }

    fn insert<'o>(
        &self,
        params: &mut (dyn DbParameterCollection + 'o),
        index: usize,
        parameter: DbParameter,
        next: ParameterChain<'_, 'o, (usize, DbParameter), ()>,
    ) -> DbResult<()> {
        next.run(params, (index, parameter))
    }

    fn remove<'o, 'a>(
        &self,
        params: &mut (dyn DbParameterCollection + 'o),
        name: &'a str,
        next: ParameterChain<'_, 'o, &'a str, bool>,
    ) -> DbResult<bool> {
        next.run(params, name)
    }

    fn remove_at<'o>(
        &self,
        params: &mut (dyn DbParameterCollection + 'o),
        index: usize,
        next: ParameterChain<'_, 'o, usize, ()>,
    ) -> DbResult<()> {
        next.run(params, index)
    }

    fn clear<'o>(
        &self,
        params: &mut (dyn DbParameterCollection + 'o),
        next: ParameterChain<'_, 'o, (), ()>,
    ) -> DbResult<()> {
        next.run(params, ())
    }
}

/// Hook logic for reader operations
pub trait ReaderFilter: Send + Sync {
    /// The operations this filter wants to intercept
    fn targets(&self) -> ReaderTargets {
        ReaderTargets::empty()
    }

    fn read(&self, reader: &mut (dyn DbReader + 'static), next: ReaderChain<'_, (), bool>) -> DbResult<bool> {
        next.run(reader, ())
    }

    fn next_result(
        &self,
        reader: &mut (dyn DbReader + 'static),
        next: ReaderChain<'_, (), bool>,
    ) -> DbResult<bool> {
        next.run(reader, ())
    }

    fn get_value(
        &self,
        reader: &mut (dyn DbReader + 'static),
        ordinal: usize,
        next: ReaderChain<'_, usize, DbValue>,
    ) -> DbResult<DbValue> {
        next.run(reader, ordinal)
    }

    fn close(&self, reader: &mut (dyn DbReader + 'static), next: ReaderChain<'_, (), ()>) -> DbResult<()> {
        next.run(reader, ())
    }

    fn dispose(&self, reader: &mut (dyn DbReader + 'static), next: ReaderChain<'_, (), ()>) -> DbResult<()> {
        next.run(reader, ())
    }
}
