use super::cart::Cart;
use super::product::{Product, ProductId, StockLevel};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only availability source. The single source of truth for stock;
/// results are never cached across operations.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel>;
}

/// Read-only product display data.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn product(&self, product_id: ProductId) -> Result<Product>;
    /// Full catalog listing, used by presentation callers to populate the
    /// browsable product list.
    async fn products(&self) -> Result<Vec<Product>>;
}

/// Durable slot holding the serialized cart snapshot.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Returns `Ok(None)` when no snapshot exists yet, and
    /// `CartError::MalformedSnapshot` when one exists but cannot be decoded.
    async fn load(&self) -> Result<Option<Cart>>;
    /// Overwrites the slot with the given snapshot wholesale.
    async fn save(&self, cart: &Cart) -> Result<()>;
}

pub type StockServiceBox = Box<dyn StockService>;
pub type CatalogServiceBox = Box<dyn CatalogService>;
pub type CartStoreBox = Box<dyn CartStore>;
