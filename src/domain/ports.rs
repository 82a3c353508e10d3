use super::credential::PinHasher;
use super::language::Language;
use super::message::MessageKey;
use super::session::Session;
use super::subscriber::Subscriber;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for subscriber records.
///
/// Implementors supply `get`, `insert` and an atomic `update`; the credential,
/// language and lockout operations are built on top of those and report
/// `false`/`None`/`0` for unknown subscribers.
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    async fn get(&self, msisdn: &str) -> Result<Option<Subscriber>>;

    async fn insert(&self, subscriber: Subscriber) -> Result<()>;

    /// Applies `apply` to the stored record and returns the updated copy,
    /// or `None` when the subscriber does not exist.
    async fn update(
        &self,
        msisdn: &str,
        apply: &(dyn for<'s> Fn(&'s mut Subscriber) + Send + Sync),
    ) -> Result<Option<Subscriber>>;

    fn hasher(&self) -> &PinHasher;

    async fn exists(&self, msisdn: &str) -> Result<bool> {
        Ok(self.get(msisdn).await?.is_some())
    }

    async fn set_pin(&self, msisdn: &str, pin: &str) -> Result<bool> {
        if !self.exists(msisdn).await? {
            return Ok(false);
        }
        let phc = self.hasher().hash(pin)?;
        let updated = self
            .update(msisdn, &|sub| sub.install_pin_hash(phc.clone()))
            .await?;
        Ok(updated.is_some())
    }

    /// False when the subscriber is unknown, has no PIN, or the PIN does not match.
    async fn verify_pin(&self, msisdn: &str, pin: &str) -> Result<bool> {
        match self.get(msisdn).await? {
            Some(Subscriber {
                pin_hash: Some(phc),
                ..
            }) => self.hasher().verify(pin, &phc),
            _ => Ok(false),
        }
    }

    async fn set_language(&self, msisdn: &str, language: Language) -> Result<bool> {
        let updated = self
            .update(msisdn, &|sub| sub.preferred_language = Some(language))
            .await?;
        Ok(updated.is_some())
    }

    async fn language(&self, msisdn: &str) -> Result<Option<Language>> {
        Ok(self
            .get(msisdn)
            .await?
            .and_then(|sub| sub.preferred_language))
    }

    /// Returns the post-increment count, or 0 for an unknown subscriber.
    async fn increment_attempts(&self, msisdn: &str) -> Result<u32> {
        let updated = self
            .update(msisdn, &|sub| {
                sub.record_failed_attempt();
            })
            .await?;
        Ok(updated.map(|sub| sub.failed_attempts).unwrap_or(0))
    }

    async fn reset_attempts(&self, msisdn: &str) -> Result<()> {
        self.update(msisdn, &|sub| sub.reset_attempts()).await?;
        Ok(())
    }

    async fn lock(&self, msisdn: &str) -> Result<()> {
        self.update(msisdn, &|sub| sub.lock()).await?;
        Ok(())
    }

    async fn is_locked(&self, msisdn: &str) -> Result<bool> {
        Ok(self.get(msisdn).await?.is_some_and(|sub| sub.locked))
    }
}

/// Storage for live sessions, expiring entries after an inactivity timeout.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Upserts the session, stamping the current time as its last activity.
    async fn save(&self, session: Session) -> Result<Session>;

    /// Returns the session if it has not expired, refreshing its last activity.
    /// Expired entries are evicted and reported as absent.
    async fn get(&self, session_id: &str) -> Result<Option<Session>>;

    /// Removes the session. Returns whether anything was removed.
    async fn clear(&self, session_id: &str) -> Result<bool>;

    /// Removes every expired session and returns how many were dropped.
    async fn sweep(&self) -> Result<usize>;

    async fn len(&self) -> Result<usize>;
}

/// Keyed, parameterised message lookup.
pub trait Translator: Send + Sync {
    fn lookup(&self, key: MessageKey, language: Language) -> Option<&str>;

    fn default_language(&self) -> Language;

    /// Resolves `key` for `language`, falling back to the default language,
    /// then English, then the key's own name.
    fn text(&self, key: MessageKey, language: Option<Language>) -> String {
        let requested = language.unwrap_or_else(|| self.default_language());
        [requested, self.default_language(), Language::English]
            .into_iter()
            .find_map(|lang| self.lookup(key, lang))
            .map(str::to_owned)
            .unwrap_or_else(|| format!("{:?}", key))
    }

    /// Like `text`, replacing `{name}` placeholders from `params`.
    fn render(
        &self,
        key: MessageKey,
        language: Option<Language>,
        params: &[(&str, &str)],
    ) -> String {
        params
            .iter()
            .fold(self.text(key, language), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }
}

pub type SubscriberStoreBox = Box<dyn SubscriberStore>;
pub type SessionStoreBox = Box<dyn SessionStore>;
pub type TranslatorBox = Box<dyn Translator>;
