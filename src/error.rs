use crate::domain::product::ProductId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CartError>;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("requested amount for product {0} exceeds available stock")]
    OutOfStock(ProductId),
    #[error("product {0} is not in the cart")]
    ProductNotFound(ProductId),
    #[error("remote fetch failed: {0}")]
    RemoteFetch(String),
    #[error("malformed cart snapshot: {0}")]
    MalformedSnapshot(#[source] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("storage error: {0}")]
    RocksDb(#[from] rocksdb::Error),
}
