use std::time::Instant;

use crate::driver::traits::{DbCommand, DbConnection, DbReader, DbTransaction};
use crate::error::DbResult;
use crate::filter::targets::{CommandTargets, ConnectionTargets};
use crate::filter::traits::{CommandChain, CommandFilter, ConnectionChain, ConnectionFilter};
use crate::types::DbValue;

/// Structured logging for connection lifecycle operations
#[derive(Default)]
pub struct ConnectionLogger;

impl ConnectionFilter for ConnectionLogger {
    fn targets(&self) -> ConnectionTargets {
        ConnectionTargets::all()
    }

    fn open(&self, conn: &mut (dyn DbConnection + 'static), next: ConnectionChain<'_, (), ()>) -> DbResult<()> {
        let started = Instant::now();
        let result = next.run(conn, ());
        match &result {
            Ok(_) => tracing::info!(elapsed = ?started.elapsed(), "connection opened"),
            Err(error) => {
                tracing::warn!(elapsed = ?started.elapsed(), %error, "connection open failed")
            }
        }
        result
    }

    fn close(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        next: ConnectionChain<'_, (), ()>,
    ) -> DbResult<()> {
        let result = next.run(conn, ());
        if let Err(error) = &result {
            tracing::warn!(%error, "connection close failed");
        } else {
            tracing::info!("connection closed");
        }
        result
    }

    fn change_database<'a>(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        database: &'a str,
        next: ConnectionChain<'_, &'a str, ()>,
    ) -> DbResult<()> {
        tracing::debug!(database, "changing database");
        next.run(conn, database)
    }

    fn begin_transaction(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        next: ConnectionChain<'_, (), Box<dyn DbTransaction>>,
    ) -> DbResult<Box<dyn DbTransaction>> {
        tracing::debug!("beginning transaction");
        next.run(conn, ())
    }

    fn create_command<'a>(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        text: &'a str,
        next: ConnectionChain<'_, &'a str, Box<dyn DbCommand>>,
    ) -> DbResult<Box<dyn DbCommand>> {
        tracing::debug!(text, "creating command");
        next.run(conn, text)
    }

    fn dispose(
        &self,
        conn: &mut (dyn DbConnection + 'static),
        next: ConnectionChain<'_, (), ()>,
    ) -> DbResult<()> {
        tracing::debug!("disposing connection");
        next.run(conn, ())
    }
}

/// Structured logging for command executions, with elapsed time
#[derive(Default)]
pub struct CommandLogger;

impl CommandFilter for CommandLogger {
    fn targets(&self) -> CommandTargets {
        CommandTargets::EXECUTE_NON_QUERY
            | CommandTargets::EXECUTE_SCALAR
            | CommandTargets::EXECUTE_READER
            | CommandTargets::PREPARE
    }

    fn prepare(&self, cmd: &mut (dyn DbCommand + 'static), next: CommandChain<'_, (), ()>) -> DbResult<()> {
        tracing::debug!(text = cmd.text(), "preparing command");
        next.run(cmd, ())
    }

    fn execute_non_query(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), u64>,
    ) -> DbResult<u64> {
        let text = cmd.text().to_string();
        let started = Instant::now();
        let result = next.run(cmd, ());
        match &result {
            Ok(rows) => {
                tracing::info!(text = %text, rows, elapsed = ?started.elapsed(), "non-query executed")
            }
            Err(error) => {
                tracing::warn!(text = %text, %error, elapsed = ?started.elapsed(), "non-query failed")
            }
        }
        result
    }

    fn execute_scalar(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), Option<DbValue>>,
    ) -> DbResult<Option<DbValue>> {
        let text = cmd.text().to_string();
        let started = Instant::now();
        let result = next.run(cmd, ());
        match &result {
            Ok(value) => tracing::info!(
                text = %text,
                found = value.is_some(),
                elapsed = ?started.elapsed(),
                "scalar executed"
            ),
            Err(error) => {
                tracing::warn!(text = %text, %error, elapsed = ?started.elapsed(), "scalar failed")
            }
        }
        result
    }

    fn execute_reader(
        &self,
        cmd: &mut (dyn DbCommand + 'static),
        next: CommandChain<'_, (), Box<dyn DbReader>>,
    ) -> DbResult<Box<dyn DbReader>> {
        let text = cmd.text().to_string();
        let started = Instant::now();
        let result = next.run(cmd, ());
        match &result {
            Ok(_) => tracing::info!(text = %text, elapsed = ?started.elapsed(), "reader opened"),
            Err(error) => {
                tracing::warn!(text = %text, %error, elapsed = ?started.elapsed(), "reader failed")
            }
        }
        result
    }
}
