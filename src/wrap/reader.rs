use std::sync::Arc;

use crate::driver::traits::DbReader;
use crate::error::DbResult;
use crate::filter::stack::FilterStack;
use crate::filter::targets::ReaderTargets;
use crate::types::DbValue;

/// Drop-in reader substitute routing operations through filter chains
pub struct FilteredReader {
    inner: Box<dyn DbReader>,
    filters: Arc<FilterStack>,
}

impl FilteredReader {
    pub fn new(inner: Box<dyn DbReader>, filters: Arc<FilterStack>) -> Self {
        Self { inner, filters }
    }
}

impl DbReader for FilteredReader {
    fn field_count(&self) -> usize {
        self.inner.field_count()
    }

    fn read(&mut self) -> DbResult<bool> {
        self.filters.reader().dispatch(
            ReaderTargets::READ,
            self.inner.as_mut(),
            (),
            |f, reader, (), next| f.read(reader, next),
            |reader, ()| reader.read(),
        )
    }

    fn next_result(&mut self) -> DbResult<bool> {
        self.filters.reader().dispatch(
            ReaderTargets::NEXT_RESULT,
            self.inner.as_mut(),
            (),
            |f, reader, (), next| f.next_result(reader, next),
            |reader, ()| reader.next_result(),
        )
    }

    fn get_value(&mut self, ordinal: usize) -> DbResult<DbValue> {
        self.filters.reader().dispatch(
            ReaderTargets::GET_VALUE,
            self.inner.as_mut(),
            ordinal,
            |f, reader, ordinal, next| f.get_value(reader, ordinal, next),
            |reader, ordinal| reader.get_value(ordinal),
        )
    }

    fn close(&mut self) -> DbResult<()> {
        self.filters.reader().dispatch(
            ReaderTargets::CLOSE,
            self.inner.as_mut(),
            (),
            |f, reader, (), next| f.close(reader, next),
            |reader, ()| reader.close(),
        )
    }

    fn dispose(&mut self) -> DbResult<()> {
        self.filters.reader().dispatch(
            ReaderTargets::DISPOSE,
            self.inner.as_mut(),
            (),
            |f, reader, (), next| f.dispose(reader, next),
            |reader, ()| reader.dispose(),
        )
    }
}
