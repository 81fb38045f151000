use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    account::{Account, Movement},
    clock::{Clock, SystemClock},
    command::{MovementCommand, MovementKind},
};

use super::{MovementError, MovementProcessor};

/// Runs movements against a single in-memory account, dated by `C`.
#[derive(Debug)]
pub struct InMemoryMovementProcessor<C = SystemClock> {
    pub account: Account,
    clock: C,
}

impl InMemoryMovementProcessor<SystemClock> {
    pub fn new(account: Account) -> Self {
        Self::with_clock(account, SystemClock)
    }
}

impl<C: Clock> InMemoryMovementProcessor<C> {
    pub fn with_clock(account: Account, clock: C) -> Self {
        Self { account, clock }
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Movement, MovementError> {
        self.process_movement(MovementKind::Deposit, amount)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Movement, MovementError> {
        self.process_movement(MovementKind::Withdrawal, amount)
    }
}

impl<C: Clock> MovementProcessor for InMemoryMovementProcessor<C> {
    fn process_movement(
        &mut self,
        kind: MovementKind,
        amount: Decimal,
    ) -> Result<Movement, MovementError> {
        let today = self.clock.today();
        let result = MovementCommand::parse_command(kind, amount)
            .map_err(MovementError::from)
            .and_then(|cmd| {
                self.account
                    .handle_movement(cmd, today)
                    .map_err(MovementError::from)
            });
        match result {
            Ok(movement) => {
                self.account.apply(movement.clone());
                debug!(?kind, %amount, %today, balance = %self.account.balance(), "movement applied");
                Ok(movement)
            }
            Err(err) => {
                warn!(?kind, %amount, %today, "movement rejected: {err}");
                Err(err)
            }
        }
    }
}
