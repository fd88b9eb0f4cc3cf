use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::error::{AccountError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// Column Family holding serialized accounts, keyed by the account UUID bytes.
pub const CF_ACCOUNTS: &str = "accounts";

/// A persistent account store backed by RocksDB.
///
/// `Clone` shares the underlying `Arc<DB>`, so one opened database can back
/// several operations.
#[derive(Clone)]
pub struct RocksDBAccountStore {
    db: Arc<DB>,
}

fn internal(message: String) -> AccountError {
    AccountError::InternalError(Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        message,
    )))
}

impl RocksDBAccountStore {
    /// Opens or creates a RocksDB instance at `path`, creating the accounts
    /// column family when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_accounts = ColumnFamilyDescriptor::new(CF_ACCOUNTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_accounts])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn accounts_cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_ACCOUNTS).ok_or_else(|| {
            AccountError::InternalError(Box::new(std::io::Error::other(
                "Accounts column family not found",
            )))
        })
    }
}

#[async_trait]
impl AccountStore for RocksDBAccountStore {
    async fn get(&self, account_id: Uuid) -> Result<Option<Account>> {
        let cf = self.accounts_cf()?;
        match self.db.get_cf(cf, account_id.as_bytes())? {
            Some(bytes) => {
                let account = serde_json::from_slice(&bytes)
                    .map_err(|e| internal(format!("Deserialization error: {}", e)))?;
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, account: Account) -> Result<()> {
        let cf = self.accounts_cf()?;
        let value = serde_json::to_vec(&account)
            .map_err(|e| internal(format!("Serialization error: {}", e)))?;
        self.db.put_cf(cf, account.id.as_bytes(), value)?;
        Ok(())
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        let cf = self.accounts_cf()?;
        let mut accounts = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            let account: Account = serde_json::from_slice(&value)
                .map_err(|e| internal(format!("Failed to deserialize account: {}", e)))?;
            accounts.push(account);
        }
        Ok(accounts)
    }
}
