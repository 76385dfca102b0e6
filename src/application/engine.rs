use crate::domain::cart::{Cart, CartItem};
use crate::domain::ports::{CartStoreBox, CatalogServiceBox, StockServiceBox};
use crate::domain::product::ProductId;
use crate::error::{CartError, Result};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

/// The main entry point for cart mutations.
///
/// `CartEngine` owns the in-memory cart and the three collaborator ports.
/// Every mutation validates against the stock service first, then writes the
/// updated snapshot to the store, then publishes it in memory; a failure at
/// any step leaves both views at their pre-call values.
///
/// Mutations hold the cart lock for their full duration, remote calls
/// included, so two racing mutations cannot both read the pre-mutation
/// state.
pub struct CartEngine {
    cart: Mutex<Cart>,
    stock: StockServiceBox,
    catalog: CatalogServiceBox,
    store: CartStoreBox,
}

impl CartEngine {
    /// Restores an engine from the persisted snapshot.
    ///
    /// A missing snapshot yields an empty cart. A snapshot that cannot be
    /// decoded is logged as a warning and replaced with an empty cart rather
    /// than taking the engine down; other storage failures propagate.
    pub async fn load(
        stock: StockServiceBox,
        catalog: CatalogServiceBox,
        store: CartStoreBox,
    ) -> Result<Self> {
        let cart = match store.load().await {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(CartError::MalformedSnapshot(err)) => {
                tracing::warn!(error = %err, "discarding malformed cart snapshot");
                Cart::new()
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            cart: Mutex::new(cart),
            stock,
            catalog,
            store,
        })
    }

    /// Ensures the cart contains at least one unit of `product_id`,
    /// incrementing the existing line item by one when present.
    ///
    /// Fails with `OutOfStock` when the incremented amount exceeds the
    /// currently reported availability, and with `RemoteFetch` when either
    /// service cannot be reached.
    pub async fn add_product(&self, product_id: ProductId) -> Result<()> {
        let mut cart = self.cart.lock().await;

        let current = cart.amount_of(product_id);
        let stock = self.stock.stock_level(product_id).await?;
        let requested = current + 1;
        if requested > stock.amount {
            return Err(CartError::OutOfStock(product_id));
        }

        let mut next = cart.clone();
        if current > 0 {
            next.set_amount(product_id, requested)?;
        } else {
            let product = self.catalog.product(product_id).await?;
            next.insert(CartItem::new(product, 1));
        }

        self.store.save(&next).await?;
        *cart = next;
        tracing::debug!(product_id, amount = requested, "product added to cart");
        Ok(())
    }

    /// Removes the line item for `product_id`, failing with
    /// `ProductNotFound` when it is not in the cart.
    pub async fn remove_product(&self, product_id: ProductId) -> Result<()> {
        let mut cart = self.cart.lock().await;

        let mut next = cart.clone();
        next.remove(product_id)?;

        self.store.save(&next).await?;
        *cart = next;
        tracing::debug!(product_id, "product removed from cart");
        Ok(())
    }

    /// Sets the exact quantity for an existing line item.
    ///
    /// Requests for zero or a negative amount are ignored without error;
    /// dropping below one unit is the caller's decision to express via
    /// [`Self::remove_product`]. This operation never inserts a new line
    /// item.
    pub async fn update_product_amount(&self, product_id: ProductId, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Ok(());
        }

        let mut cart = self.cart.lock().await;

        let stock = self.stock.stock_level(product_id).await?;
        if amount > i64::from(stock.amount) {
            return Err(CartError::OutOfStock(product_id));
        }

        let mut next = cart.clone();
        next.set_amount(product_id, amount as u32)?;

        self.store.save(&next).await?;
        *cart = next;
        tracing::debug!(product_id, amount, "product amount updated");
        Ok(())
    }

    /// A point-in-time copy of the cart's line items, in insertion order.
    pub async fn items(&self) -> Vec<CartItem> {
        self.cart.lock().await.items().to_vec()
    }

    /// Grand total across all line items.
    pub async fn total(&self) -> Decimal {
        self.cart.lock().await.total()
    }
}
