use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{AccountError, Movement},
    command::{AccountCommandError, MovementKind},
};

pub mod in_memory_processor;

#[derive(Debug, Error)]
pub enum MovementError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

pub trait MovementProcessor {
    fn process_movement(
        &mut self,
        kind: MovementKind,
        amount: Decimal,
    ) -> Result<Movement, MovementError>;
}
