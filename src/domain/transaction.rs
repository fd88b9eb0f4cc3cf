/// Direction of a single transaction leg against one account.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransactionType {
    Withdrawal,
    PayIn,
}

/// An alert raised while validating a leg.
///
/// Validation only reports which alert is due; delivering it is the job of a
/// [`NotificationPort`](super::ports::NotificationPort).
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Notification {
    FundsLow { email: String },
    ApproachingPayInLimit { email: String },
}

impl Notification {
    pub fn email(&self) -> &str {
        match self {
            Self::FundsLow { email } | Self::ApproachingPayInLimit { email } => email,
        }
    }
}
