//! Application layer: the withdraw and transfer use cases.
//!
//! Each operation loads accounts through an `AccountStore`, validates every leg
//! before mutating anything, delivers any alert a leg raised and persists the
//! result. Accounts are loaded fresh on every call; serialising concurrent
//! calls against the same account is left to the caller or the store.

pub mod transfer;
pub mod withdraw;

use crate::config::Limits;
use crate::domain::account::{Account, Amount};
use crate::domain::ports::{AccountStore, NotificationPort};
use crate::domain::transaction::{Notification, TransactionType};
use crate::error::{AccountError, Result};
use uuid::Uuid;

async fn fetch_account(store: &dyn AccountStore, account_id: Uuid) -> Result<Account> {
    tracing::debug!(%account_id, "Fetching account");
    store
        .get(account_id)
        .await?
        .ok_or(AccountError::AccountNotFound(account_id))
}

/// Validates one leg and, when it passes, delivers the alert it raised before returning.
async fn validate_leg(
    account: &Account,
    amount: Amount,
    kind: TransactionType,
    limits: &Limits,
    notifier: &dyn NotificationPort,
) -> Result<()> {
    if let Some(notification) = account.validate(amount, kind, limits)? {
        dispatch(notifier, notification).await;
    }
    Ok(())
}

/// Notifier failures are logged and dropped; they never fail an operation.
async fn dispatch(notifier: &dyn NotificationPort, notification: Notification) {
    let result = match &notification {
        Notification::FundsLow { email } => notifier.notify_funds_low(email).await,
        Notification::ApproachingPayInLimit { email } => {
            notifier.notify_approaching_pay_in_limit(email).await
        }
    };
    if let Err(error) = result {
        tracing::warn!(%error, ?notification, "Failed to deliver notification");
    }
}
