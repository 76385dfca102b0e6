use crate::domain::cart::Cart;
use crate::domain::ports::CartStore;
use crate::error::{CartError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for the cart snapshot.
pub const CF_CART: &str = "cart";
/// The single slot key under which the snapshot lives.
const CART_KEY: &[u8] = b"cart";

/// A persistent cart store backed by RocksDB.
///
/// The snapshot occupies a single key; every save overwrites it wholesale,
/// matching the slot semantics of the in-memory store.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbCartStore {
    db: Arc<DB>,
}

impl RocksDbCartStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "cart" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_cart = ColumnFamilyDescriptor::new(CF_CART, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_cart])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db
            .cf_handle(CF_CART)
            .ok_or_else(|| CartError::Storage("cart column family not found".to_string()))
    }
}

#[async_trait]
impl CartStore for RocksDbCartStore {
    async fn load(&self) -> Result<Option<Cart>> {
        let cf = self.cf()?;
        match self.db.get_cf(cf, CART_KEY)? {
            Some(bytes) => {
                let cart =
                    serde_json::from_slice(&bytes).map_err(CartError::MalformedSnapshot)?;
                Ok(Some(cart))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, cart: &Cart) -> Result<()> {
        let cf = self.cf()?;
        let value = serde_json::to_vec(cart).map_err(|e| CartError::Storage(e.to_string()))?;
        self.db.put_cf(cf, CART_KEY, value)?;
        Ok(())
    }
}
