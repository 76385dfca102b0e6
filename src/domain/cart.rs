use crate::domain::product::{Product, ProductId};
use crate::error::{CartError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product's presence in the cart: its display data plus the requested
/// quantity.
///
/// The serialized form is the product's fields with `amount` alongside them,
/// which is the element shape of the persisted snapshot array.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartItem {
    pub fn new(product: Product, amount: u32) -> Self {
        Self { product, amount }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Line total: unit price times requested amount.
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.amount)
    }
}

/// The authoritative collection of cart line items.
///
/// Insertion order is preserved for display; product ids are unique within
/// the collection. Amounts are always at least 1 once a line item exists.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Quantity currently in the cart for `product_id`, 0 when absent.
    pub fn amount_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map(|item| item.amount).unwrap_or(0)
    }

    /// Appends a new line item. Callers must have checked that `product_id`
    /// is not already present.
    pub fn insert(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Sets the quantity of an existing line item.
    pub fn set_amount(&mut self, product_id: ProductId, amount: u32) -> Result<()> {
        match self.items.iter_mut().find(|item| item.id() == product_id) {
            Some(item) => {
                item.amount = amount;
                Ok(())
            }
            None => Err(CartError::ProductNotFound(product_id)),
        }
    }

    /// Removes and returns the line item for `product_id`.
    pub fn remove(&mut self, product_id: ProductId) -> Result<CartItem> {
        match self.items.iter().position(|item| item.id() == product_id) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(CartError::ProductNotFound(product_id)),
        }
    }

    /// Grand total across all line items.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}
