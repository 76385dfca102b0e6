use crate::domain::cart::CartItem;
use crate::error::Result;
use std::io::Write;

/// Writes a cart as CSV: a header followed by one row per line item.
pub struct CartWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CartWriter<W> {
    pub fn new(destination: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(destination),
        }
    }

    pub fn write_cart(&mut self, items: &[CartItem]) -> Result<()> {
        self.writer
            .write_record(["id", "title", "price", "amount", "subtotal"])?;
        for item in items {
            self.writer.write_record([
                item.id().to_string(),
                item.product.title.clone(),
                item.product.price.to_string(),
                item.amount.to_string(),
                item.subtotal().to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
