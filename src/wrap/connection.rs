use std::sync::Arc;

use crate::driver::traits::{DbCommand, DbConnection, DbTransaction};
use crate::error::DbResult;
use crate::filter::stack::FilterStack;
use crate::filter::targets::ConnectionTargets;
use crate::wrap::command::FilteredCommand;
use crate::wrap::transaction::FilteredTransaction;

/// Drop-in connection substitute routing operations through filter chains
///
/// Wrap a driver connection once; transactions and commands obtained from
/// the wrapper are themselves wrapped with the same filter stack.
pub struct FilteredConnection {
    inner: Box<dyn DbConnection>,
    filters: Arc<FilterStack>,
}

impl FilteredConnection {
    pub fn new(inner: Box<dyn DbConnection>, filters: Arc<FilterStack>) -> Self {
        Self { inner, filters }
    }

    /// Wrap with a stack used by this connection alone
    pub fn with_stack(inner: Box<dyn DbConnection>, stack: FilterStack) -> Self {
        Self::new(inner, Arc::new(stack))
    }

    /// The shared filter stack
    pub fn filters(&self) -> &Arc<FilterStack> {
        &self.filters
    }
}

impl DbConnection for FilteredConnection {
    fn open(&mut self) -> DbResult<()> {
        self.filters.connection().dispatch(
            ConnectionTargets::OPEN,
            self.inner.as_mut(),
            (),
            |f, conn, (), next| f.open(conn, next),
            |conn, ()| conn.open(),
        )
    }

    fn close(&mut self) -> DbResult<()> {
        self.filters.connection().dispatch(
            ConnectionTargets::CLOSE,
            self.inner.as_mut(),
            (),
            |f, conn, (), next| f.close(conn, next),
            |conn, ()| conn.close(),
        )
    }

    fn change_database(&mut self, database: &str) -> DbResult<()> {
        self.filters.connection().dispatch(
            ConnectionTargets::CHANGE_DATABASE,
            self.inner.as_mut(),
            database,
            |f, conn, database, next| f.change_database(conn, database, next),
            |conn, database| conn.change_database(database),
        )
    }

    fn begin_transaction(&mut self) -> DbResult<Box<dyn DbTransaction>> {
        let tx = self.filters.connection().dispatch(
            ConnectionTargets::BEGIN_TRANSACTION,
            self.inner.as_mut(),
            (),
            |f, conn, (), next| f.begin_transaction(conn, next),
            |conn, ()| conn.begin_transaction(),
        )?;
        Ok(Box::new(FilteredTransaction::new(
            tx,
            Arc::clone(&self.filters),
        )))
    }

    fn create_command(&mut self, text: &str) -> DbResult<Box<dyn DbCommand>> {
        let cmd = self.filters.connection().dispatch(
            ConnectionTargets::CREATE_COMMAND,
            self.inner.as_mut(),
            text,
            |f, conn, text, next| f.create_command(conn, text, next),
            |conn, text| conn.create_command(text),
        )?;
        Ok(Box::new(FilteredCommand::new(
            cmd,
            Arc::clone(&self.filters),
        )))
    }

    fn dispose(&mut self) -> DbResult<()> {
        self.filters.connection().dispatch(
            ConnectionTargets::DISPOSE,
            self.inner.as_mut(),
            (),
            |f, conn, (), next| f.dispose(conn, next),
            |conn, ()| conn.dispose(),
        )
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }
}
