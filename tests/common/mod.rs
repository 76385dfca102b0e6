use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a small catalog seed with three products.
pub fn write_catalog_csv(path: &Path) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "title", "price", "image", "stock"])?;
    wtr.write_record(["1", "Runner Shoes", "139.9", "shoes.jpg", "5"])?;
    wtr.write_record(["2", "Canvas Tote", "59.9", "tote.jpg", "2"])?;
    wtr.write_record(["3", "Wool Socks", "19.5", "socks.jpg", "0"])?;
    wtr.flush()?;
    Ok(())
}

/// Writes an action file containing `adds` consecutive add rows for one product.
pub fn generate_actions_csv(path: &Path, product: u64, adds: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "product", "amount"])?;
    for _ in 0..adds {
        wtr.write_record(["add", &product.to_string(), ""])?;
    }
    wtr.flush()?;
    Ok(())
}
