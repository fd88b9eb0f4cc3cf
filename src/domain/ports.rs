use super::account::Account;
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get(&self, account_id: Uuid) -> Result<Option<Account>>;
    /// Persists the account, inserting it if the store has not seen it before.
    async fn update(&self, account: Account) -> Result<()>;
    async fn all_accounts(&self) -> Result<Vec<Account>>;
}

/// Delivers account alerts. Callers treat delivery as fire-and-forget.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn notify_funds_low(&self, email: &str) -> Result<()>;
    async fn notify_approaching_pay_in_limit(&self, email: &str) -> Result<()>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type NotificationPortBox = Box<dyn NotificationPort>;
