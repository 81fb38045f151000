use std::io::Read;

use csv::Trim;
use thiserror::Error;

use crate::{
    account::Movement,
    command::{AccountCommandError, MovementCommand},
};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Invalid movement at line {line}: {source}")]
    Malformed { line: u64, source: csv::Error },
    #[error("Invalid movement at line {line}: {source}")]
    Amount {
        line: u64,
        source: AccountCommandError,
    },
}

impl HistoryError {
    pub fn line(&self) -> u64 {
        match self {
            Self::Malformed { line, .. } | Self::Amount { line, .. } => *line,
        }
    }
}

/// Reads every movement from `source`, in file order.
/// Stops at the first malformed row or non-positive amount.
pub fn read_movements<R>(source: R) -> Result<Vec<Movement>, HistoryError>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(source);
    let headers = reader
        .headers()
        .map_err(|source| HistoryError::Malformed { line: 1, source })?
        .clone();

    let mut movements = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| {
            let line = source.position().map_or(0, |pos| pos.line());
            HistoryError::Malformed { line, source }
        })?;
        let line = record.position().map_or(0, |pos| pos.line());
        let movement: Movement = record
            .deserialize(Some(&headers))
            .map_err(|source| HistoryError::Malformed { line, source })?;
        MovementCommand::parse_command(movement.kind(), movement.amount())
            .map_err(|source| HistoryError::Amount { line, source })?;
        movements.push(movement);
    }
    Ok(movements)
}
