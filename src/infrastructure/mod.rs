pub mod in_memory;

#[cfg(feature = "remote-http")]
pub mod http;

#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
