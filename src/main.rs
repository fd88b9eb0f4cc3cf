use clap::Parser;
use miette::{IntoDiagnostic, Result};
use moneybox::application::transfer::TransferOperation;
use moneybox::application::withdraw::WithdrawOperation;
use moneybox::config::Limits;
use moneybox::domain::ports::{AccountStore, AccountStoreBox};
use moneybox::infrastructure::in_memory::InMemoryAccountStore;
use moneybox::infrastructure::notifier::TracingNotifier;
#[cfg(feature = "storage-rocksdb")]
use moneybox::infrastructure::rocksdb::RocksDBAccountStore;
use moneybox::interfaces::csv::account_reader::AccountReader;
use moneybox::interfaces::csv::account_writer::AccountWriter;
use moneybox::interfaces::csv::operation_reader::{Operation, OperationReader};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Accounts CSV (id, email, balance, withdrawn, paid_in) used to seed the store
    accounts: PathBuf,

    /// Operations CSV (type, from, to, amount) executed in order
    operations: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// JSON file overriding the default limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pay-in limit, takes precedence over the config file
    #[arg(long)]
    pay_in_limit: Option<Decimal>,
}

struct Stores {
    seed: AccountStoreBox,
    withdraw: AccountStoreBox,
    transfer: AccountStoreBox,
}

impl Stores {
    fn share<S: AccountStore + Clone + 'static>(store: S) -> Self {
        Self {
            seed: Box::new(store.clone()),
            withdraw: Box::new(store.clone()),
            transfer: Box::new(store),
        }
    }
}

fn open_stores(db_path: Option<PathBuf>) -> Result<Stores> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store = RocksDBAccountStore::open(path).into_diagnostic()?;
            Ok(Stores::share(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            tracing::warn!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(Stores::share(InMemoryAccountStore::new()))
        }
        None => Ok(Stores::share(InMemoryAccountStore::new())),
    }
}

fn load_limits(cli: &Cli) -> Result<Limits> {
    let limits = match &cli.config {
        Some(path) => Limits::from_json_file(path).into_diagnostic()?,
        None => Limits::default(),
    };
    let limits = match cli.pay_in_limit {
        Some(pay_in_limit) => limits.with_pay_in_limit(pay_in_limit),
        None => limits,
    };
    limits.validate().into_diagnostic()?;
    Ok(limits)
}

/// Inserts accounts the store does not know yet; stored state wins over the CSV.
async fn seed_accounts(store: &dyn AccountStore, source: File) -> Result<()> {
    for account in AccountReader::new(source).accounts() {
        match account {
            Ok(account) => {
                if store.get(account.id).await.into_diagnostic()?.is_some() {
                    tracing::debug!(account_id = %account.id, "Account already stored, keeping it");
                    continue;
                }
                store.update(account).await.into_diagnostic()?;
            }
            Err(error) => tracing::warn!(%error, "Error reading account"),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let limits = load_limits(&cli)?;
    let stores = open_stores(cli.db_path.clone())?;

    let accounts = File::open(&cli.accounts).into_diagnostic()?;
    seed_accounts(stores.seed.as_ref(), accounts).await?;

    let withdraw = WithdrawOperation::new(stores.withdraw, Box::new(TracingNotifier::new()))
        .with_limits(limits);
    let transfer = TransferOperation::new(stores.transfer, Box::new(TracingNotifier::new()))
        .with_limits(limits);

    let operations = File::open(&cli.operations).into_diagnostic()?;
    for operation in OperationReader::new(operations).operations() {
        let result = match operation {
            Ok(Operation::Withdraw { account_id, amount }) => {
                withdraw.execute(account_id, amount).await
            }
            Ok(Operation::Transfer {
                from_account_id,
                to_account_id,
                amount,
            }) => {
                transfer
                    .execute(from_account_id, to_account_id, amount)
                    .await
            }
            Err(error) => {
                tracing::warn!(%error, "Error reading operation");
                continue;
            }
        };
        if let Err(error) = result {
            tracing::warn!(%error, "Operation rejected");
        }
    }

    let accounts = stores.seed.all_accounts().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(accounts).into_diagnostic()?;

    Ok(())
}
