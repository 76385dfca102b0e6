use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product identifier, assigned by the catalog service.
pub type ProductId = u64;

/// Display data for one catalog product, as served by `GET /products/{id}`.
///
/// Read-only from the cart's perspective: fetched on demand, never mutated.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
}

/// Point-in-time availability for one product, as served by `GET /stock/{id}`.
///
/// Never persisted; re-fetched on every validation so a stale read cannot
/// authorize an over-stock amount.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct StockLevel {
    pub id: ProductId,
    pub amount: u32,
}
