use crate::error::{AccountError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use uuid::Uuid;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum OperationType {
    Withdraw,
    Transfer,
}

#[derive(Debug, Deserialize)]
struct OperationRecord {
    r#type: OperationType,
    from: Uuid,
    to: Option<Uuid>,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
}

/// A request to run one of the account operations.
///
/// Amounts are carried unchecked; the operations themselves reject
/// non-positive values.
#[derive(Debug, PartialEq, Clone)]
pub enum Operation {
    Withdraw {
        account_id: Uuid,
        amount: Decimal,
    },
    Transfer {
        from_account_id: Uuid,
        to_account_id: Uuid,
        amount: Decimal,
    },
}

impl OperationRecord {
    fn into_operation(self) -> Result<Operation> {
        match (self.r#type, self.to) {
            (OperationType::Withdraw, None) => Ok(Operation::Withdraw {
                account_id: self.from,
                amount: self.amount,
            }),
            (OperationType::Withdraw, Some(to)) => Err(AccountError::MalformedOperation(
                format!("withdrawal from {} must not name a destination ({})", self.from, to),
            )),
            (OperationType::Transfer, Some(to)) => Ok(Operation::Transfer {
                from_account_id: self.from,
                to_account_id: to,
                amount: self.amount,
            }),
            (OperationType::Transfer, None) => Err(AccountError::MalformedOperation(format!(
                "transfer from {} has no destination",
                self.from
            ))),
        }
    }
}

/// Streams operations (`type, from, to, amount`) from a CSV source.
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OperationReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses operations.
    pub fn operations(self) -> impl Iterator<Item = Result<Operation>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map_err(AccountError::from)
                .and_then(|record: OperationRecord| record.into_operation())
        })
    }
}
