use crate::domain::credential::PinHasher;
use crate::domain::ports::{SessionStore, SubscriberStore};
use crate::domain::session::Session;
use crate::domain::subscriber::Subscriber;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// A thread-safe in-memory store for subscriber records.
///
/// Uses `Arc<RwLock<HashMap<String, Subscriber>>>`; `update` holds the write lock
/// for the whole read-modify-write so concurrent mutations never interleave.
#[derive(Default, Clone)]
pub struct InMemorySubscriberStore {
    subscribers: Arc<RwLock<HashMap<String, Subscriber>>>,
    hasher: PinHasher,
}

impl InMemorySubscriberStore {
    pub fn new(hasher: PinHasher) -> Self {
        Self {
            subscribers: Arc::default(),
            hasher,
        }
    }

    /// Creates a store pre-populated with `subscribers`.
    pub fn with_subscribers(
        hasher: PinHasher,
        subscribers: impl IntoIterator<Item = Subscriber>,
    ) -> Self {
        let map = subscribers
            .into_iter()
            .map(|sub| (sub.msisdn.clone(), sub))
            .collect();
        Self {
            subscribers: Arc::new(RwLock::new(map)),
            hasher,
        }
    }
}

#[async_trait]
impl SubscriberStore for InMemorySubscriberStore {
    async fn get(&self, msisdn: &str) -> Result<Option<Subscriber>> {
        let subscribers = self.subscribers.read().await;
        Ok(subscribers.get(msisdn).cloned())
    }

    async fn insert(&self, subscriber: Subscriber) -> Result<()> {
        let mut subscribers = self.subscribers.write().await;
        subscribers.insert(subscriber.msisdn.clone(), subscriber);
        Ok(())
    }

    async fn update(
        &self,
        msisdn: &str,
        apply: &(dyn for<'s> Fn(&'s mut Subscriber) + Send + Sync),
    ) -> Result<Option<Subscriber>> {
        let mut subscribers = self.subscribers.write().await;
        Ok(subscribers.get_mut(msisdn).map(|sub| {
            apply(sub);
            sub.clone()
        }))
    }

    fn hasher(&self) -> &PinHasher {
        &self.hasher
    }
}

/// A thread-safe in-memory session store with inactivity expiry.
///
/// Timestamps use `tokio::time::Instant`, so tests can drive expiry with a paused clock.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    timeout: Duration,
}

impl InMemorySessionStore {
    pub fn new(timeout: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            timeout,
        }
    }

    fn is_expired(&self, session: &Session, now: Instant) -> bool {
        now.duration_since(session.last_activity) > self.timeout
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, mut session: Session) -> Result<Session> {
        session.last_activity = Instant::now();
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn get(&self, session_id: &str) -> Result<Option<Session>> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let expired = match sessions.get(session_id) {
            None => return Ok(None),
            Some(session) => self.is_expired(session, now),
        };
        if expired {
            sessions.remove(session_id);
            return Ok(None);
        }
        Ok(sessions.get_mut(session_id).map(|session| {
            session.last_activity = now;
            session.clone()
        }))
    }

    async fn clear(&self, session_id: &str) -> Result<bool> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(session_id).is_some())
    }

    async fn sweep(&self) -> Result<usize> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_expired(session, now));
        Ok(before - sessions.len())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.sessions.read().await.len())
    }
}
