use super::AccountRecord;
use crate::domain::account::Account;
use crate::error::Result;
use std::io::Write;

/// Writes account state as CSV, one row per account, ordered by id.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts(&mut self, mut accounts: Vec<Account>) -> Result<()> {
        accounts.sort_by_key(|account| account.id);
        for account in accounts {
            self.writer.serialize(AccountRecord::from(account))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
