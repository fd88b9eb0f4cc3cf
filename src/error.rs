use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Insufficient funds to make transfer from account {account_id}")]
    InsufficientFunds { account_id: Uuid },
    #[error("Account pay in limit reached for account {account_id}")]
    PayInLimitExceeded { account_id: Uuid },
    #[error("Amount would overflow the totals of account {account_id}")]
    BalanceOverflow { account_id: Uuid },
    #[error("Account {0} not found")]
    AccountNotFound(Uuid),
    #[error("Cannot transfer from account {0} to itself")]
    SameAccountTransfer(Uuid),
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(Decimal),
    #[error("Malformed operation: {0}")]
    MalformedOperation(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Notification failed: {0}")]
    NotificationFailed(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("Storage error: {0}")]
    Storage(#[from] rocksdb::Error),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, AccountError>;
