use super::{fetch_account, validate_leg};
use crate::config::Limits;
use crate::domain::account::Amount;
use crate::domain::ports::{AccountStore, AccountStoreBox, NotificationPortBox};
use crate::domain::transaction::TransactionType;
use crate::error::Result;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Debits a single account.
pub struct WithdrawOperation {
    account_store: AccountStoreBox,
    notifier: NotificationPortBox,
    limits: Limits,
}

impl WithdrawOperation {
    /// Creates a withdraw operation using the default [`Limits`].
    pub fn new(account_store: AccountStoreBox, notifier: NotificationPortBox) -> Self {
        Self {
            account_store,
            notifier,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Withdraws `amount` from the account.
    ///
    /// The account is only persisted when validation succeeds. A low-funds
    /// alert, if due, is delivered before the account is mutated.
    pub async fn execute(&self, account_id: Uuid, amount: Decimal) -> Result<()> {
        let amount = Amount::new(amount)?;
        let mut account = fetch_account(self.account_store.as_ref(), account_id).await?;

        validate_leg(
            &account,
            amount,
            TransactionType::Withdrawal,
            &self.limits,
            self.notifier.as_ref(),
        )
        .await?;
        account.apply(amount, TransactionType::Withdrawal);

        self.account_store.update(account).await?;
        tracing::info!(%account_id, amount = %amount.value(), "Withdrawal completed");
        Ok(())
    }
}
