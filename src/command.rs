use rust_decimal::{Decimal, prelude::Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

/// Validated request to move money in or out of the account.
/// The amount is always strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct MovementCommand {
    kind: MovementKind,
    amount: Decimal,
}

#[derive(Debug, Error)]
pub enum AccountCommandError {
    #[error("{amount}: amount must be positive for {kind:?}")]
    NegativeAmount { kind: MovementKind, amount: Decimal },
}

impl MovementCommand {
    pub fn parse_command(kind: MovementKind, amount: Decimal) -> Result<Self, AccountCommandError> {
        if amount <= Decimal::zero() {
            return Err(AccountCommandError::NegativeAmount { kind, amount });
        }
        Ok(Self { kind, amount })
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
