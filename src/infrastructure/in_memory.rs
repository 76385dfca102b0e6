use crate::domain::cart::Cart;
use crate::domain::ports::{CartStore, CatalogService, StockService};
use crate::domain::product::{Product, ProductId, StockLevel};
use crate::error::{CartError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Seedable in-memory stand-in for the remote catalog and stock services.
///
/// Implements both read ports; `Clone` shares the underlying maps, so one
/// instance can be boxed per port while the caller keeps a handle for
/// seeding products and adjusting stock.
#[derive(Default, Clone)]
pub struct InMemoryCatalog {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
    stock: Arc<RwLock<HashMap<ProductId, u32>>>,
}

impl InMemoryCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product together with its available stock.
    pub async fn seed(&self, product: Product, amount: u32) {
        self.stock.write().await.insert(product.id, amount);
        self.products.write().await.insert(product.id, product);
    }

    /// Sets the available stock for a product id.
    pub async fn set_stock(&self, product_id: ProductId, amount: u32) {
        self.stock.write().await.insert(product_id, amount);
    }
}

#[async_trait]
impl StockService for InMemoryCatalog {
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel> {
        let stock = self.stock.read().await;
        match stock.get(&product_id) {
            Some(amount) => Ok(StockLevel {
                id: product_id,
                amount: *amount,
            }),
            None => Err(CartError::RemoteFetch(format!(
                "no stock entry for product {product_id}"
            ))),
        }
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn product(&self, product_id: ProductId) -> Result<Product> {
        let products = self.products.read().await;
        products
            .get(&product_id)
            .cloned()
            .ok_or_else(|| CartError::RemoteFetch(format!("no such product {product_id}")))
    }

    async fn products(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by_key(|product| product.id);
        Ok(all)
    }
}

/// In-memory persistence slot holding the serialized snapshot bytes.
///
/// The slot stores the encoded form rather than the decoded cart, so loading
/// always exercises the real decode path, exactly like the durable backend.
#[derive(Default, Clone)]
pub struct InMemoryCartStore {
    slot: Arc<RwLock<Option<Vec<u8>>>>,
}

impl InMemoryCartStore {
    /// Creates a new store with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose slot is pre-filled with raw bytes, valid or not.
    pub fn with_raw(bytes: &[u8]) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(bytes.to_vec()))),
        }
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn load(&self) -> Result<Option<Cart>> {
        let slot = self.slot.read().await;
        match slot.as_deref() {
            Some(bytes) => {
                let cart = serde_json::from_slice(bytes).map_err(CartError::MalformedSnapshot)?;
                Ok(Some(cart))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, cart: &Cart) -> Result<()> {
        let bytes = serde_json::to_vec(cart).map_err(|e| CartError::Storage(e.to_string()))?;
        *self.slot.write().await = Some(bytes);
        Ok(())
    }
}
