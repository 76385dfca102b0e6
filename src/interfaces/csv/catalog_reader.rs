use crate::domain::product::{Product, ProductId};
use crate::error::{CartError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of a catalog seed file: product display data plus its available
/// stock.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CatalogRecord {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
    pub stock: u32,
}

impl CatalogRecord {
    /// Splits the row into the product and its stock amount.
    pub fn into_parts(self) -> (Product, u32) {
        (
            Product {
                id: self.id,
                title: self.title,
                price: self.price,
                image: self.image,
            },
            self.stock,
        )
    }
}

/// Reads catalog seed rows from a CSV source.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn records(self) -> impl Iterator<Item = Result<CatalogRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CartError::from))
    }
}
