use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::Serialize;

use crate::driver::traits::{DbCommand, DbReader};
use crate::error::DbResult;
use crate::filter::targets::{CommandTargets, ReaderTargets};
use crate::filter::traits::{CommandChain, CommandFilter, ReaderChain, ReaderFilter};
use crate::types::DbValue;

/// Point-in-time view of command execution counters
#[derive(Debug, Clone, Serialize)]
pub struct CommandStatsSnapshot {
    pub executions: u64,
    pub failures: u64,
    pub elapsed_micros: u64,
}

/// Counts executions, failures and cumulative elapsed time across the three
/// execute operations
///
/// Counters are atomic; the filter itself stays shareable across wrappers.
#[derive(Default)]
pub struct CommandStats {
    executions: AtomicU64,
    failures: AtomicU64,
    elapsed_micros: AtomicU64,
}

impl CommandStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn executions(&self) -> u64 {
        self.executions.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> CommandStatsSnapshot {
        CommandStatsSnapshot {
            executions: self.executions(),
            failures: self.failures(),
            elapsed_micros: self.elapsed_micros.load(Ordering::Relaxed),
        }
    }

    fn record<R>(&self, started: Instant, result: &DbResult<R>) {
        self.executions.fetch_add(1, Ordering::Relaxed);
        if result.is_err() {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
        self.elapsed_micros
            .fetch_add(started.elapsed().as_micros() as u64, Ordering::Relaxed);
    }
}

impl CommandFilter for CommandStats {
    fn targets(&self) -> CommandTargets {
        CommandTargets::EXECUTE_NON_QUERY
            | CommandTargets::EXECUTE_SCALAR
            | CommandTargets::EXECUTE_READER
    }

    fn execute_non_query(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), u64>,
    ) -> DbResult<u64> {
        let started = Instant::now();
        let result = next.run(cmd, ());
        self.record(started, &result);
        result
    }

    fn execute_scalar(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), Option<DbValue>>,
    ) -> DbResult<Option<DbValue>> {
        let started = Instant::now();
        let result = next.run(cmd, ());
        self.record(started, &result);
        result
    }

    fn execute_reader(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), Box<dyn DbReader>>,
    ) -> DbResult<Box<dyn DbReader>> {
        let started = Instant::now();
        let result = next.run(cmd, ());
        self.record(started, &result);
        result
    }
}

/// Counts successful row advances on readers
#[derive(Default)]
pub struct RowCounter {
    rows: AtomicU64,
}

impl RowCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> u64 {
        self.rows.load(Ordering::Relaxed)
    }
}

impl ReaderFilter for RowCounter {
    fn targets(&self) -> ReaderTargets {
        ReaderTargets::READ
    }

    fn read(&self, reader: &mut (dyn DbReader + 'static), next: ReaderChain<'_, (), bool>) -> DbResult<bool> {
        let result = next.run(reader, ());
        if matches!(result, Ok(true)) {
            self.rows.fetch_add(1, Ordering::Relaxed);
        }
        result
    }
}
