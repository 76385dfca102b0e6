use crate::domain::action::CartAction;
use crate::error::{CartError, Result};
use std::io::Read;

/// Reads cart actions from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<CartAction>`. It handles whitespace trimming and flexible record
/// lengths automatically.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes actions.
    pub fn actions(self) -> impl Iterator<Item = Result<CartAction>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CartError::from))
    }
}
