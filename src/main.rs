use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trolley::application::engine::CartEngine;
use trolley::domain::action::{ActionType, CartAction};
use trolley::domain::ports::{CartStoreBox, CatalogServiceBox, StockServiceBox};
use trolley::error::CartError;
use trolley::infrastructure::in_memory::{InMemoryCartStore, InMemoryCatalog};
use trolley::interfaces::csv::action_reader::ActionReader;
use trolley::interfaces::csv::cart_writer::CartWriter;
use trolley::interfaces::csv::catalog_reader::CatalogReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog seed CSV file (id, title, price, image, stock)
    catalog: PathBuf,

    /// Cart actions CSV file (type, product, amount)
    actions: PathBuf,

    /// Path to persistent cart database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[cfg(feature = "storage-rocksdb")]
fn open_store(db_path: Option<PathBuf>) -> Result<CartStoreBox> {
    match db_path {
        Some(path) => {
            let store =
                trolley::infrastructure::rocksdb::RocksDbCartStore::open(path).into_diagnostic()?;
            Ok(Box::new(store))
        }
        None => Ok(Box::new(InMemoryCartStore::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_store(db_path: Option<PathBuf>) -> Result<CartStoreBox> {
    if db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(Box::new(InMemoryCartStore::new()))
}

async fn apply_action(engine: &CartEngine, action: CartAction) -> trolley::error::Result<()> {
    match action.r#type {
        ActionType::Add => engine.add_product(action.product).await,
        ActionType::Remove => engine.remove_product(action.product).await,
        ActionType::Update => {
            engine
                .update_product_amount(action.product, action.amount.unwrap_or(0))
                .await
        }
    }
}

/// Translates a failure into the message shown to the shopper.
fn notify(error: &CartError) -> String {
    match error {
        CartError::OutOfStock(_) => "Requested quantity is out of stock".to_string(),
        CartError::ProductNotFound(_) => "Product is not in the cart".to_string(),
        CartError::RemoteFetch(_) => "Failed to reach the remote service".to_string(),
        other => format!("Error applying action: {other}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Seed the in-process catalog and stock services.
    let catalog = InMemoryCatalog::new();
    let file = File::open(&cli.catalog).into_diagnostic()?;
    for record in CatalogReader::new(file).records() {
        let (product, stock) = record.into_diagnostic()?.into_parts();
        catalog.seed(product, stock).await;
    }

    let store = open_store(cli.db_path)?;
    let stock: StockServiceBox = Box::new(catalog.clone());
    let catalog_service: CatalogServiceBox = Box::new(catalog);
    let engine = CartEngine::load(stock, catalog_service, store)
        .await
        .into_diagnostic()?;

    // Replay actions; a failed action is reported and does not abort the run.
    let file = File::open(&cli.actions).into_diagnostic()?;
    for action_result in ActionReader::new(file).actions() {
        match action_result {
            Ok(action) => {
                if let Err(e) = apply_action(&engine, action).await {
                    eprintln!("{}", notify(&e));
                }
            }
            Err(e) => {
                eprintln!("Error reading action: {e}");
            }
        }
    }

    // Output the final cart.
    let items = engine.items().await;
    let stdout = io::stdout();
    let mut writer = CartWriter::new(stdout.lock());
    writer.write_cart(&items).into_diagnostic()?;

    Ok(())
}
