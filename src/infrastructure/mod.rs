//! Adapters behind the domain ports: stores, the message catalog and seed data.

pub mod catalog;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
pub mod seed;

use crate::domain::credential::PinHasher;
use crate::domain::ports::SubscriberStoreBox;
use crate::domain::subscriber::Subscriber;
use crate::error::Result;
use in_memory::InMemorySubscriberStore;
use std::path::Path;

/// Builds the subscriber store, seeded with `seed`.
///
/// With a `db_path` and the `storage-rocksdb` feature the store is persistent and
/// existing records win over the seed. Without the feature a `db_path` is ignored
/// with a warning.
pub async fn open_subscriber_store(
    db_path: Option<&Path>,
    hasher: PinHasher,
    seed: Vec<Subscriber>,
) -> Result<SubscriberStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store = rocksdb::RocksDbSubscriberStore::open(path, hasher)?;
            let added = store.seed(seed).await?;
            tracing::info!(path = %path.display(), added, "opened persistent subscriber store");
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(path) => {
            tracing::warn!(
                path = %path.display(),
                "persistent storage requested but the 'storage-rocksdb' feature is not enabled; falling back to in-memory storage"
            );
            Ok(Box::new(InMemorySubscriberStore::with_subscribers(hasher, seed)))
        }
        None => Ok(Box::new(InMemorySubscriberStore::with_subscribers(hasher, seed))),
    }
}
