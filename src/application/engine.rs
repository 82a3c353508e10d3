use super::handlers::{self, Flow, MenuContext};
use crate::config::MenuSettings;
use crate::domain::message::MessageKey;
use crate::domain::ports::{SessionStoreBox, SubscriberStoreBox, TranslatorBox};
use crate::domain::session::Session;
use crate::error::Result;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// What the gateway sends back to the handset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UssdResponse {
    pub flow: Flow,
    pub body: String,
}

impl UssdResponse {
    pub fn end(body: String) -> Self {
        Self {
            flow: Flow::Terminate,
            body,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.flow == Flow::Terminate
    }
}

/// The menu state machine.
///
/// `UssdEngine` owns the storage backends and the message catalog. Requests for the
/// same session id are serialised through a per-session mutex; different sessions
/// proceed concurrently.
pub struct UssdEngine {
    subscribers: SubscriberStoreBox,
    sessions: SessionStoreBox,
    translator: TranslatorBox,
    settings: MenuSettings,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl UssdEngine {
    pub fn new(
        subscribers: SubscriberStoreBox,
        sessions: SessionStoreBox,
        translator: TranslatorBox,
        settings: MenuSettings,
    ) -> Self {
        Self {
            subscribers,
            sessions,
            translator,
            settings,
            locks: DashMap::new(),
        }
    }

    /// Advances `session_id` by one step with the subscriber's current `input`.
    ///
    /// Never fails: store errors are logged, the session is discarded and the
    /// subscriber sees the generic error message.
    pub async fn process_request(&self, msisdn: &str, input: &str, session_id: &str) -> UssdResponse {
        let lock = self.session_lock(session_id);
        let _guard = lock.lock().await;

        match self.step(msisdn, input, session_id).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(session_id, msisdn, error = %e, "failed to process request");
                if let Err(e) = self.sessions.clear(session_id).await {
                    tracing::error!(session_id, error = %e, "failed to discard session");
                }
                UssdResponse::end(self.translator.text(MessageKey::GenericError, None))
            }
        }
    }

    /// Drops expired sessions along with any per-session locks nobody holds.
    pub async fn sweep_expired(&self) -> Result<usize> {
        let removed = self.sessions.sweep().await?;
        self.locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        Ok(removed)
    }

    pub async fn active_sessions(&self) -> Result<usize> {
        self.sessions.len().await
    }

    async fn step(&self, msisdn: &str, input: &str, session_id: &str) -> Result<UssdResponse> {
        let Some(subscriber) = self.subscribers.get(msisdn).await? else {
            tracing::info!(msisdn, "request from unknown subscriber");
            return Ok(UssdResponse::end(
                self.translator.text(MessageKey::UserNotFound, None),
            ));
        };

        let mut session = match self.sessions.get(session_id).await? {
            Some(session) if session.msisdn == msisdn => session,
            Some(_) => {
                tracing::warn!(session_id, msisdn, "session id reused by another subscriber");
                Session::new(session_id, subscriber)
            }
            None => Session::new(session_id, subscriber),
        };

        let ctx = MenuContext {
            subscribers: &*self.subscribers,
            translator: &*self.translator,
            settings: &self.settings,
        };
        let from = session.state;
        let outcome = handlers::dispatch(&ctx, &mut session, input).await?;
        session.state = outcome.state;

        match outcome.flow {
            Flow::Continue => {
                if outcome.state != from {
                    session.history.record(from, outcome.state);
                    tracing::debug!(session_id, ?from, to = ?outcome.state, "transition");
                }
                self.sessions.save(session).await?;
            }
            Flow::Terminate => {
                tracing::debug!(session_id, ?from, "session ended");
                self.sessions.clear(session_id).await?;
            }
        }

        Ok(UssdResponse {
            flow: outcome.flow,
            body: outcome.message,
        })
    }

    fn session_lock(&self, session_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(session_id.to_string())
            .or_default()
            .clone()
    }
}
