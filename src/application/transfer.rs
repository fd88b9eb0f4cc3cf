use super::{fetch_account, validate_leg};
use crate::config::Limits;
use crate::domain::account::Amount;
use crate::domain::ports::{AccountStore, AccountStoreBox, NotificationPortBox};
use crate::domain::transaction::TransactionType;
use crate::error::{AccountError, Result};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Moves money between two accounts as one logical operation.
///
/// Both legs are validated before either is applied, so a rejected transfer
/// never reaches the store half-applied. There is no compensation if the
/// second `update` fails after the first succeeded; that error is returned
/// as-is.
pub struct TransferOperation {
    account_store: AccountStoreBox,
    notifier: NotificationPortBox,
    limits: Limits,
}

impl TransferOperation {
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

    /// Transfers `amount` from `from_account_id` to `to_account_id`.
    ///
    /// Legs are checked in order: withdrawal on the source, then pay-in on
    /// the destination. A failing source leg stops the transfer before the
    /// destination is evaluated.
    pub async fn execute(
        &self,
        from_account_id: Uuid,
        to_account_id: Uuid,
        amount: Decimal,
    ) -> Result<()> {
        let amount = Amount::new(amount)?;
        if from_account_id == to_account_id {
            return Err(AccountError::SameAccountTransfer(from_account_id));
        }

        let store = self.account_store.as_ref();
        let mut from = fetch_account(store, from_account_id).await?;
        let mut to = fetch_account(store, to_account_id).await?;

        let notifier = self.notifier.as_ref();
        validate_leg(&from, amount, TransactionType::Withdrawal, &self.limits, notifier).await?;
        validate_leg(&to, amount, TransactionType::PayIn, &self.limits, notifier).await?;

        from.apply(amount, TransactionType::Withdrawal);
        to.apply(amount, TransactionType::PayIn);

        store.update(from).await?;
        if let Err(error) = store.update(to).await {
            tracing::error!(
                %from_account_id,
                %to_account_id,
                %error,
                "Source account persisted but destination update failed"
            );
            return Err(error);
        }

        tracing::info!(
            %from_account_id,
            %to_account_id,
            amount = %amount.value(),
            "Transfer completed"
        );
        Ok(())
    }
}
