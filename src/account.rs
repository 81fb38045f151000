use chrono::NaiveDate;
use rust_decimal::{Decimal, prelude::Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::{MovementCommand, MovementKind};

/// A recorded deposit or withdrawal. This is also the event produced by
/// [`Account::handle_movement`] and consumed by [`Account::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    date: NaiveDate,
    kind: MovementKind,
    amount: Decimal,
}

impl Movement {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == MovementKind::Deposit
    }
}

/// Which deposits count towards `max_daily_deposits`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositCountScope {
    /// Every deposit ever recorded on the account. Kept as the default until
    /// the product settles whether the deposit limit is really per day.
    #[default]
    AllTime,
    /// Only deposits dated today.
    PerDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccountLimits {
    pub max_daily_deposits: usize,
    pub max_daily_withdrawal: Decimal,
    pub deposit_count_scope: DepositCountScope,
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self {
            max_daily_deposits: 3,
            max_daily_withdrawal: Decimal::from(1000),
            deposit_count_scope: DepositCountScope::AllTime,
        }
    }
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Deposit limit of {limit} reached ({scope:?})")]
    ExceedsDailyDepositCount {
        limit: usize,
        scope: DepositCountScope,
    },
    #[error("Cannot withdraw {requested}, balance is {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Cannot withdraw more than {limit} per day, remaining today: {remaining}")]
    ExceedsDailyWithdrawalLimit { limit: Decimal, remaining: Decimal },
    #[error("Depositing {amount} would overflow balance {balance}")]
    BalanceOverflow { amount: Decimal, balance: Decimal },
}

#[derive(Debug, Default)]
pub struct Account {
    balance: Decimal,
    movements: Vec<Movement>,
    limits: AccountLimits,
}

impl Account {
    pub fn new(initial_balance: Decimal) -> Self {
        Self::with_limits(initial_balance, AccountLimits::default())
    }

    pub fn with_limits(initial_balance: Decimal, limits: AccountLimits) -> Self {
        Self {
            balance: initial_balance,
            movements: Vec::new(),
            limits,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Overrides the balance. No rule is checked here.
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Replaces the movement history, e.g. with one read by
    /// [`crate::history::read_movements`]. The balance is left as is.
    pub fn set_movements(&mut self, movements: Vec<Movement>) {
        self.movements = movements;
    }

    pub fn limits(&self) -> &AccountLimits {
        &self.limits
    }

    pub fn deposit_count(&self) -> usize {
        self.movements.iter().filter(|m| m.is_deposit()).count()
    }

    pub fn deposits_on(&self, date: NaiveDate) -> usize {
        self.movements
            .iter()
            .filter(|m| m.is_deposit() && m.date == date)
            .count()
    }

    pub fn total_withdrawn_on(&self, date: NaiveDate) -> Decimal {
        self.movements
            .iter()
            .filter(|m| !m.is_deposit() && m.date == date)
            .fold(Decimal::zero(), |total, m| total.saturating_add(m.amount))
    }

    /// Records a movement produced by [`handle_movement`](Self::handle_movement)
    /// against the current state; the balance arithmetic was checked there.
    pub fn apply(&mut self, movement: Movement) {
        match movement.kind {
            MovementKind::Deposit => self.balance += movement.amount,
            MovementKind::Withdrawal => self.balance -= movement.amount,
        }
        self.movements.push(movement);
    }

    /// Checks the command against the account rules and returns the
    /// movement to [`apply`](Self::apply). State is not touched.
    pub fn handle_movement(
        &self,
        command: MovementCommand,
        today: NaiveDate,
    ) -> Result<Movement, AccountError> {
        let amount = command.amount();
        match command.kind() {
            MovementKind::Deposit => {
                let deposits = match self.limits.deposit_count_scope {
                    DepositCountScope::AllTime => self.deposit_count(),
                    DepositCountScope::PerDay => self.deposits_on(today),
                };
                if deposits >= self.limits.max_daily_deposits {
                    return Err(AccountError::ExceedsDailyDepositCount {
                        limit: self.limits.max_daily_deposits,
                        scope: self.limits.deposit_count_scope,
                    });
                }
                if self.balance.checked_add(amount).is_none() {
                    return Err(AccountError::BalanceOverflow {
                        amount,
                        balance: self.balance,
                    });
                }
            }
            MovementKind::Withdrawal => {
                // underflow means the balance is short anyway
                let sufficient = self
                    .balance
                    .checked_sub(amount)
                    .is_some_and(|left| left >= Decimal::zero());
                if !sufficient {
                    return Err(AccountError::InsufficientBalance {
                        requested: amount,
                        available: self.balance,
                    });
                }
                let remaining = self
                    .limits
                    .max_daily_withdrawal
                    .saturating_sub(self.total_withdrawn_on(today));
                if amount > remaining {
                    return Err(AccountError::ExceedsDailyWithdrawalLimit {
                        limit: self.limits.max_daily_withdrawal,
                        remaining,
                    });
                }
            }
        }
        Ok(Movement {
            date: today,
            kind: command.kind(),
            amount,
        })
    }
}
