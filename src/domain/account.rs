use super::transaction::{Notification, TransactionType};
use super::user::User;
use crate::config::Limits;
use crate::error::{AccountError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use uuid::Uuid;

/// An exact monetary value.
///
/// Wraps `rust_decimal::Decimal` so balances never suffer floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// A strictly positive monetary amount moved by a single transaction leg.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(AccountError::InvalidAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// A savings account.
///
/// Accounts are created and stored elsewhere; operations load one, validate a
/// leg against it, apply the leg and hand it back to the store.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    pub id: Uuid,
    pub owner: User,
    /// Funds currently held.
    pub balance: Balance,
    /// Lifetime total debited from the account.
    pub withdrawn: Balance,
    /// Total credited since the pay-in window started.
    pub paid_in: Balance,
}

impl Account {
    pub fn new(id: Uuid, owner: User) -> Self {
        Self {
            id,
            owner,
            balance: Balance::ZERO,
            withdrawn: Balance::ZERO,
            paid_in: Balance::ZERO,
        }
    }

    /// Checks whether a leg of `amount` may be applied to this account.
    ///
    /// Never mutates the account. On success returns the alert the leg brings
    /// due, if any; the caller is responsible for delivering it.
    pub fn validate(
        &self,
        amount: Amount,
        kind: TransactionType,
        limits: &Limits,
    ) -> Result<Option<Notification>> {
        let overflow = || AccountError::BalanceOverflow {
            account_id: self.id,
        };
        match kind {
            TransactionType::Withdrawal => {
                let projected = self
                    .balance
                    .value()
                    .checked_sub(amount.value())
                    .filter(|projected| *projected >= Decimal::ZERO)
                    .ok_or(AccountError::InsufficientFunds {
                        account_id: self.id,
                    })?;
                self.withdrawn
                    .value()
                    .checked_add(amount.value())
                    .ok_or_else(overflow)?;
                if projected < limits.low_funds_threshold {
                    return Ok(Some(Notification::FundsLow {
                        email: self.owner.email.clone(),
                    }));
                }
                Ok(None)
            }
            TransactionType::PayIn => {
                // Overflowing the running total is always past the limit.
                let projected = self
                    .paid_in
                    .value()
                    .checked_add(amount.value())
                    .filter(|projected| *projected <= limits.pay_in_limit)
                    .ok_or(AccountError::PayInLimitExceeded {
                        account_id: self.id,
                    })?;
                self.balance
                    .value()
                    .checked_add(amount.value())
                    .ok_or_else(overflow)?;
                let headroom = limits.pay_in_limit.checked_sub(projected);
                if headroom.is_some_and(|headroom| headroom < limits.approaching_limit_threshold) {
                    return Ok(Some(Notification::ApproachingPayInLimit {
                        email: self.owner.email.clone(),
                    }));
                }
                Ok(None)
            }
        }
    }

    /// Applies a leg unconditionally. Call only after [`Account::validate`] succeeded,
    /// which rules out overflow.
    pub fn apply(&mut self, amount: Amount, kind: TransactionType) {
        match kind {
            TransactionType::Withdrawal => {
                self.balance -= amount.into();
                self.withdrawn += amount.into();
            }
            TransactionType::PayIn => {
                self.balance += amount.into();
                self.paid_in += amount.into();
            }
        }
    }
}
