use std::sync::Arc;

use crate::driver::traits::DbTransaction;
use crate::error::DbResult;
use crate::filter::stack::FilterStack;
use crate::filter::targets::TransactionTargets;

/// Drop-in transaction substitute routing operations through filter chains
pub struct FilteredTransaction {
    inner: Box<dyn DbTransaction>,
    filters: Arc<FilterStack>,
}

impl FilteredTransaction {
    pub fn new(inner: Box<dyn DbTransaction>, filters: Arc<FilterStack>) -> Self {
        Self { inner, filters }
    }
}

impl DbTransaction for FilteredTransaction {
    fn commit(&mut self) -> DbResult<()> {
        self.filters.transaction().dispatch(
            TransactionTargets::COMMIT,
            self.inner.as_mut(),
            (),
            |f, tx, (), next| f.commit(tx, next),
            |tx, ()| tx.commit(),
        )
    }

    fn rollback(&mut self) -> DbResult<()> {
        self.filters.transaction().dispatch(
            TransactionTargets::ROLLBACK,
            self.inner.as_mut(),
            (),
            |f, tx, (), next| f.rollback(tx, next),
            |tx, ()| tx.rollback(),
        )
    }

    fn dispose(&mut self) -> DbResult<()> {
        self.filters.transaction().dispatch(
            TransactionTargets::DISPOSE,
            self.inner.as_mut(),
            (),
            |f, tx, (), next| f.dispose(tx, next),
            |tx, ()| tx.dispose(),
        )
    }
}
