//! CSV boundary used by the command-line driver.

pub mod account_reader;
pub mod account_writer;
pub mod operation_reader;

use crate::domain::account::{Account, Balance};
use crate::domain::user::User;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat CSV representation of an [`Account`]: `id,email,balance,withdrawn,paid_in`.
///
/// Amounts are parsed from their text form so no digits are lost.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AccountRecord {
    pub id: Uuid,
    pub email: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub withdrawn: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub paid_in: Decimal,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            owner: User::new(record.email),
            balance: Balance::new(record.balance),
            withdrawn: Balance::new(record.withdrawn),
            paid_in: Balance::new(record.paid_in),
        }
    }
}

impl From<Account> for AccountRecord {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.owner.email,
            balance: account.balance.value().normalize(),
            withdrawn: account.withdrawn.value().normalize(),
            paid_in: account.paid_in.value().normalize(),
        }
    }
}
