use std::sync::Arc;

use crate::driver::traits::{DbCommand, DbParameterCollection, DbReader};
use crate::error::DbResult;
use crate::filter::stack::FilterStack;
use crate::filter::targets::{CommandTargets, ParameterTargets};
use crate::types::{DbParameter, DbValue};
use crate::wrap::reader::FilteredReader;

/// Drop-in command substitute routing operations through filter chains
///
/// Also implements `DbParameterCollection`: the wrapper IS the filtered
/// view of the inner command's parameter collection, so parameter
/// interception stays reachable through the `DbCommand` trait object.
pub struct FilteredCommand {
    inner: Box<dyn DbCommand>,
    filters: Arc<FilterStack>,
}

impl FilteredCommand {
    pub fn new(inner: Box<dyn DbCommand>, filters: Arc<FilterStack>) -> Self {
        Self { inner, filters }
    }
}

impl DbCommand for FilteredCommand {
    fn text(&self) -> &str {
        self.inner.text()
    }

    fn parameters(&self) -> &dyn DbParameterCollection {
        self
    }

    fn parameters_mut(&mut self) -> &mut dyn DbParameterCollection {
        self
    }

    fn cancel(&mut self) -> DbResult<()> {
        self.filters.command().dispatch(
            CommandTargets::CANCEL,
            self.inner.as_mut(),
            (),
            |f, cmd, (), next| f.cancel(cmd, next),
            |cmd, ()| cmd.cancel(),
        )
    }

    fn create_parameter(&mut self, name: &str, value: DbValue) -> DbResult<DbParameter> {
        self.filters.command().dispatch(
            CommandTargets::CREATE_PARAMETER,
            self.inner.as_mut(),
            (name, value),
            |f, cmd, (name, value), next| f.create_parameter(cmd, name, value, next),
            |cmd, (name, value)| cmd.create_parameter(name, value),
        )
    }

    fn prepare(&mut self) -> DbResult<()> {
        self.filters.command().dispatch(
            CommandTargets::PREPARE,
            self.inner.as_mut(),
            (),
            |f, cmd, (), next| f.prepare(cmd, next),
            |cmd, ()| cmd.prepare(),
        )
    }

    fn execute_non_query(&mut self) -> DbResult<u64> {
        self.filters.command().dispatch(
            CommandTargets::EXECUTE_NON_QUERY,
            self.inner.as_mut(),
            (),
            |f, cmd, (), next| f.execute_non_query(cmd, next),
            |cmd, ()| cmd.execute_non_query(),
        )
    }

    fn execute_scalar(&mut self) -> DbResult<Option<DbValue>> {
        self.filters.command().dispatch(
            CommandTargets::EXECUTE_SCALAR,
            self.inner.as_mut(),
            (),
            |f, cmd, (), next| f.execute_scalar(cmd, next),
            |cmd, ()| cmd.execute_scalar(),
        )
    }

    fn execute_reader(&mut self) -> DbResult<Box<dyn DbReader>> {
        let reader = self.filters.command().dispatch(
            CommandTargets::EXECUTE_READER,
            self.inner.as_mut(),
            (),
            |f, cmd, (), next| f.execute_reader(cmd, next),
            |cmd, ()| cmd.execute_reader(),
        )?;
        Ok(Box::new(FilteredReader::new(
            reader,
            Arc::clone(&self.filters),
        )))
    }

    fn dispose(&mut self) -> DbResult<()> {
        self.filters.command().dispatch(
            CommandTargets::DISPOSE,
            self.inner.as_mut(),
            (),
            |f, cmd, (), next| f.dispose(cmd, next),
            |cmd, ()| cmd.dispose(),
        )
    }
}

impl DbParameterCollection for FilteredCommand {
    fn len(&self) -> usize {
        self.inner.parameters().len()
    }

    fn get(&self, index: usize) -> Option<&DbParameter> {
        self.inner.parameters().get(index)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.inner.parameters().index_of(name)
    }

    fn add(&mut self, parameter: DbParameter) -> DbResult<usize> {
        self.filters.parameters().dispatch(
            ParameterTargets::ADD,
            self.inner.parameters_mut(),
            parameter,
            |f, params, parameter, next| f.add(params, parameter, next),
            |params, parameter| params.add(parameter),
        )
    }

    fn insert(&mut self, index: usize, parameter: DbParameter) -> DbResult<()> {
        self.filters.parameters().dispatch(
            ParameterTargets::INSERT,
            self.inner.parameters_mut(),
            (index, parameter),
            |f, params, (index, parameter), next| f.insert(params, index, parameter, next),
            |params, (index, parameter)| params.insert(index, parameter),
        )
    }

    fn remove(&mut self, name: &str) -> DbResult<bool> {
        self.filters.parameters().dispatch(
            ParameterTargets::REMOVE,
            self.inner.parameters_mut(),
            name,
            |f, params, name, next| f.remove(params, name, next),
            |params, name| params.remove(name),
        )
    }

    fn remove_at(&mut self, index: usize) -> DbResult<()> {
        self.filters.parameters().dispatch(
            ParameterTargets::REMOVE_AT,
            self.inner.parameters_mut(),
            index,
            |f, params, index, next| f.remove_at(params, index, next),
            |params, index| params.remove_at(index),
        )
    }

    fn clear(&mut self) -> DbResult<()> {
        self.filters.parameters().dispatch(
            ParameterTargets::CLEAR,
            self.inner.parameters_mut(),
            (),
            |f, params, (), next| f.clear(params, next),
            |params, ()| params.clear(),
        )
    }
}
