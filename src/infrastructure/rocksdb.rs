use crate::domain::credential::PinHasher;
use crate::domain::ports::SubscriberStore;
use crate::domain::subscriber::Subscriber;
use crate::error::{Result, UssdError};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for subscriber records.
pub const CF_SUBSCRIBERS: &str = "subscribers";

/// A persistent subscriber store backed by RocksDB.
///
/// Records are stored as JSON under their MSISDN. Writers are serialised through
/// a single async mutex so `update` is a proper read-modify-write.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbSubscriberStore {
    db: Arc<DB>,
    writer: Arc<Mutex<()>>,
    hasher: PinHasher,
}

impl RocksDbSubscriberStore {
    /// Opens or creates a RocksDB instance at `path`, ensuring the
    /// `subscribers` column family exists.
    pub fn open<P: AsRef<Path>>(path: P, hasher: PinHasher) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf = ColumnFamilyDescriptor::new(CF_SUBSCRIBERS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf])?;

        Ok(Self {
            db: Arc::new(db),
            writer: Arc::default(),
            hasher,
        })
    }

    /// Inserts every subscriber not already present. Returns how many were added.
    pub async fn seed(&self, subscribers: Vec<Subscriber>) -> Result<usize> {
        let _guard = self.writer.lock().await;
        let mut added = 0;
        for sub in subscribers {
            if self.read(&sub.msisdn)?.is_none() {
                self.write(&sub)?;
                added += 1;
            }
        }
        Ok(added)
    }

    fn cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_SUBSCRIBERS).ok_or_else(|| {
            UssdError::StorageError("Subscribers column family not found".to_string())
        })
    }

    fn read(&self, msisdn: &str) -> Result<Option<Subscriber>> {
        match self.db.get_cf(self.cf()?, msisdn.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn write(&self, subscriber: &Subscriber) -> Result<()> {
        let value = serde_json::to_vec(subscriber)?;
        self.db
            .put_cf(self.cf()?, subscriber.msisdn.as_bytes(), value)?;
        Ok(())
    }
}

#[async_trait]
impl SubscriberStore for RocksDbSubscriberStore {
    async fn get(&self, msisdn: &str) -> Result<Option<Subscriber>> {
        self.read(msisdn)
    }

    async fn insert(&self, subscriber: Subscriber) -> Result<()> {
        let _guard = self.writer.lock().await;
        self.write(&subscriber)
    }

    async fn update(
        &self,
        msisdn: &str,
        apply: &(dyn for<'s> Fn(&'s mut Subscriber) + Send + Sync),
    ) -> Result<Option<Subscriber>> {
        let _guard = self.writer.lock().await;
        let Some(mut sub) = self.read(msisdn)? else {
            return Ok(None);
        };
        apply(&mut sub);
        self.write(&sub)?;
        Ok(Some(sub))
    }

    fn hasher(&self) -> &PinHasher {
        &self.hasher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::Language;
    use tempfile::tempdir;

    fn fast_hasher() -> PinHasher {
        PinHasher::with_cost(8, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDbSubscriberStore::open(dir.path(), fast_hasher())
            .expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_SUBSCRIBERS).is_some());
    }

    #[tokio::test]
    async fn test_seed_does_not_overwrite() {
        let dir = tempdir().unwrap();
        let store = RocksDbSubscriberStore::open(dir.path(), fast_hasher()).unwrap();

        assert_eq!(
            store.seed(vec![Subscriber::new("1", "A")]).await.unwrap(),
            1
        );
        store.set_language("1", Language::Somali).await.unwrap();

        assert_eq!(
            store
                .seed(vec![Subscriber::new("1", "A"), Subscriber::new("2", "B")])
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            store.language("1").await.unwrap(),
            Some(Language::Somali)
        );
    }

    #[tokio::test]
    async fn test_state_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = RocksDbSubscriberStore::open(dir.path(), fast_hasher()).unwrap();
            store.insert(Subscriber::new("1", "A")).await.unwrap();
            store.set_pin("1", "2468").await.unwrap();
            store.lock("1").await.unwrap();
        }

        let store = RocksDbSubscriberStore::open(dir.path(), fast_hasher()).unwrap();
        assert!(store.verify_pin("1", "2468").await.unwrap());
        assert!(store.is_locked("1").await.unwrap());
        assert!(store.get("2").await.unwrap().is_none());
    }
}
