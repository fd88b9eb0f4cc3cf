use super::AccountRecord;
use crate::domain::account::Account;
use crate::error::{AccountError, Result};
use std::io::Read;

/// Reads the initial account set from a CSV source.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one [`Account`] per row.
    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map(|record: AccountRecord| Account::from(record))
                .map_err(AccountError::from)
        })
    }
}
