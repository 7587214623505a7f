use std::sync::Arc;

use crate::filter::error::FilterError;
use crate::filter::set::FilterSet;
use crate::filter::targets::{
    CommandTargets, ConnectionTargets, ParameterTargets, ReaderTargets, TransactionTargets,
};
use crate::filter::traits::{
    CommandFilter, ConnectionFilter, ParameterFilter, ReaderFilter, TransactionFilter,
};

/// The five per-family filter sets wrapped around one logical connection
///
/// Built once and shared behind `Arc` across every wrapper derived from the
/// connection, so commands, readers, transactions and parameter collections
/// all dispatch through the same configuration.
pub struct FilterStack {
    connection: FilterSet<dyn ConnectionFilter, ConnectionTargets>,
    transaction: FilterSet<dyn TransactionFilter, TransactionTargets>,
    command: FilterSet<dyn CommandFilter, CommandTargets>,
    parameters: FilterSet<dyn ParameterFilter, ParameterTargets>,
    reader: FilterSet<dyn ReaderFilter, ReaderTargets>,
}

impl FilterStack {
    /// Build a stack from the five ordered filter sequences
    ///
    /// Empty sequences are legal and collapse the corresponding family to a
    /// direct pass-through.
    pub fn new(
        connection: Vec<Arc<dyn ConnectionFilter>>,
        transaction: Vec<Arc<dyn TransactionFilter>>,
        command: Vec<Arc<dyn CommandFilter>>,
        parameters: Vec<Arc<dyn ParameterFilter>>,
        reader: Vec<Arc<dyn ReaderFilter>>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            connection: FilterSet::new(connection, |f| f.targets())?,
            transaction: FilterSet::new(transaction, |f| f.targets())?,
            command: FilterSet::new(command, |f| f.targets())?,
            parameters: FilterSet::new(parameters, |f| f.targets())?,
            reader: FilterSet::new(reader, |f| f.targets())?,
        })
    }

    /// A stack with no filters in any family
    pub fn empty() -> Self {
        Self {
            connection: FilterSet::empty(),
            transaction: FilterSet::empty(),
            command: FilterSet::empty(),
            parameters: FilterSet::empty(),
            reader: FilterSet::empty(),
        }
    }

    pub fn builder() -> FilterStackBuilder {
        FilterStackBuilder::default()
    }

    pub fn connection(&self) -> &FilterSet<dyn ConnectionFilter, ConnectionTargets> {
        &self.connection
    }

    pub fn transaction(&self) -> &FilterSet<dyn TransactionFilter, TransactionTargets> {
        &self.transaction
    }

    pub fn command(&self) -> &FilterSet<dyn CommandFilter, CommandTargets> {
        &self.command
    }

    pub fn parameters(&self) -> &FilterSet<dyn ParameterFilter, ParameterTargets> {
        &self.parameters
    }

    pub fn reader(&self) -> &FilterSet<dyn ReaderFilter, ReaderTargets> {
        &self.reader
    }
}

impl Default for FilterStack {
    fn default() -> Self {
        Self::empty()
    }
}

/// Collects per-family filters in caller-supplied order
#[derive(Default)]
pub struct FilterStackBuilder {
    connection: Vec<Arc<dyn ConnectionFilter>>,
    transaction: Vec<Arc<dyn TransactionFilter>>,
    command: Vec<Arc<dyn CommandFilter>>,
    parameters: Vec<Arc<dyn ParameterFilter>>,
    reader: Vec<Arc<dyn ReaderFilter>>,
}

impl FilterStackBuilder {
    pub fn connection(mut self, filter: Arc<dyn ConnectionFilter>) -> Self {
        self.connection.push(filter);
        self
    }

    pub fn transaction(mut self, filter: Arc<dyn TransactionFilter>) -> Self {
        self.transaction.push(filter);
        self
    }

    pub fn command(mut self, filter: Arc<dyn CommandFilter>) -> Self {
        self.command.push(filter);
        self
    }

    pub fn parameters(mut self, filter: Arc<dyn ParameterFilter>) -> Self {
        self.parameters.push(filter);
        self
    }

    pub fn reader(mut self, filter: Arc<dyn ReaderFilter>) -> Self {
        self.reader.push(filter);
        self
    }

    pub fn build(self) -> Result<FilterStack, FilterError> {
        FilterStack::new(
            self.connection,
            self.transaction,
            self.command,
            self.parameters,
            self.reader,
        )
    }
}
