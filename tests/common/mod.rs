#![allow(dead_code)]

use async_trait::async_trait;
use moneybox::domain::account::{Account, Balance};
use moneybox::domain::ports::{AccountStore, NotificationPort};
use moneybox::domain::transaction::Notification;
use moneybox::domain::user::User;
use moneybox::error::{AccountError, Result};
use moneybox::infrastructure::in_memory::InMemoryAccountStore;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// One port call, in the order it happened.
#[derive(Debug, PartialEq, Clone)]
pub enum Event {
    Get(Uuid),
    Notify(Notification),
    Update(Uuid),
}

type EventLog = Arc<Mutex<Vec<Event>>>;

/// Account store that records every call and can be told to fail updates.
#[derive(Default, Clone)]
pub struct RecordingAccountStore {
    inner: InMemoryAccountStore,
    events: EventLog,
    gets: Arc<Mutex<Vec<Uuid>>>,
    updates: Arc<Mutex<Vec<Account>>>,
    failing_update: Arc<Mutex<Option<Uuid>>>,
}

impl RecordingAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an account directly, bypassing the call log.
    pub async fn seed(
        &self,
        balance: Decimal,
        withdrawn: Decimal,
        paid_in: Decimal,
    ) -> Account {
        let email = format!("{}@example.com", Uuid::new_v4().simple());
        let mut account = Account::new(Uuid::new_v4(), User::new(email));
        account.balance = Balance::new(balance);
        account.withdrawn = Balance::new(withdrawn);
        account.paid_in = Balance::new(paid_in);
        self.inner.update(account.clone()).await.unwrap();
        account
    }

    pub fn fail_updates_of(&self, account_id: Uuid) {
        *self.failing_update.lock().unwrap() = Some(account_id);
    }

    pub fn gets(&self) -> Vec<Uuid> {
        self.gets.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<Account> {
        self.updates.lock().unwrap().clone()
    }

    /// Store calls, plus the alerts of any notifier attached to this store.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub async fn stored(&self, account_id: Uuid) -> Account {
        self.inner.get(account_id).await.unwrap().unwrap()
    }
}

#[async_trait]
impl AccountStore for RecordingAccountStore {
    async fn get(&self, account_id: Uuid) -> Result<Option<Account>> {
        self.gets.lock().unwrap().push(account_id);
        self.events.lock().unwrap().push(Event::Get(account_id));
        self.inner.get(account_id).await
    }

    async fn update(&self, account: Account) -> Result<()> {
        if *self.failing_update.lock().unwrap() == Some(account.id) {
            return Err(AccountError::Io(std::io::Error::other("disk full")));
        }
        self.updates.lock().unwrap().push(account.clone());
        self.events.lock().unwrap().push(Event::Update(account.id));
        self.inner.update(account).await
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        self.inner.all_accounts().await
    }
}

/// Notifier that keeps every alert it was asked to deliver.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    events: Option<EventLog>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that records the alert and then reports a delivery failure.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Also records alerts into `store`'s event log.
    pub fn attached_to(self, store: &RecordingAccountStore) -> Self {
        Self {
            events: Some(store.events.clone()),
            ..self
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn funds_low_count(&self) -> usize {
        self.sent()
            .iter()
            .filter(|n| matches!(n, Notification::FundsLow { .. }))
            .count()
    }

    pub fn approaching_limit_count(&self) -> usize {
        self.sent()
            .iter()
            .filter(|n| matches!(n, Notification::ApproachingPayInLimit { .. }))
            .count()
    }

    fn record(&self, notification: Notification) -> Result<()> {
        if let Some(events) = &self.events {
            events
                .lock()
                .unwrap()
                .push(Event::Notify(notification.clone()));
        }
        self.sent.lock().unwrap().push(notification);
        if self.failing {
            return Err(AccountError::NotificationFailed("gateway unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationPort for RecordingNotifier {
    async fn notify_funds_low(&self, email: &str) -> Result<()> {
        self.record(Notification::FundsLow {
            email: email.to_string(),
        })
    }

    async fn notify_approaching_pay_in_limit(&self, email: &str) -> Result<()> {
        self.record(Notification::ApproachingPayInLimit {
            email: email.to_string(),
        })
    }
}

pub const ALICE: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";
pub const BOB: &str = "0b9a4b51-5e5f-4d3a-8c39-3c1a2a3e7f10";

/// Writes the two-account fixture used by the CLI tests.
pub fn write_accounts_csv(path: &Path) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "email", "balance", "withdrawn", "paid_in"])?;
    wtr.write_record([ALICE, "alice@example.com", "1000", "800", "200"])?;
    wtr.write_record([BOB, "bob@example.com", "100", "100", "200"])?;

    wtr.flush()?;
    Ok(())
}

/// Writes `rows` one-unit transfers alternating between the two fixture accounts.
pub fn generate_operations_csv(path: &Path, rows: usize) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "from", "to", "amount"])?;
    for i in 0..rows {
        let (from, to) = if i % 2 == 0 { (ALICE, BOB) } else { (BOB, ALICE) };
        wtr.write_record(["transfer", from, to, "1"])?;
    }

    wtr.flush()?;
    Ok(())
}
