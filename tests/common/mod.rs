#![allow(dead_code)]

use std::time::Duration;
use ussd_menu::application::engine::{UssdEngine, UssdResponse};
use ussd_menu::config::MenuSettings;
use ussd_menu::domain::credential::PinHasher;
use ussd_menu::domain::language::Language;
use ussd_menu::domain::ports::{SubscriberStore, SubscriberStoreBox};
use ussd_menu::infrastructure::catalog::StaticCatalog;
use ussd_menu::infrastructure::in_memory::{InMemorySessionStore, InMemorySubscriberStore};
use ussd_menu::infrastructure::seed::demo_subscribers;

/// Demo subscriber with an active loan and a populated account.
pub const AMINA: &str = "211925415377";
/// Demo subscriber with a completed loan and no transactions.
pub const DENG: &str = "211955123456";

pub const SESSION_TIMEOUT: Duration = Duration::from_secs(300);

/// Argon2 with minimal costs so tests that hash PINs stay fast.
pub fn fast_hasher() -> PinHasher {
    PinHasher::with_cost(8, 1, 1).unwrap()
}

pub fn demo_store() -> InMemorySubscriberStore {
    InMemorySubscriberStore::with_subscribers(fast_hasher(), demo_subscribers().unwrap())
}

/// A demo store where `msisdn` already picked English and set `pin`.
pub async fn onboarded_store(msisdn: &str, pin: &str) -> InMemorySubscriberStore {
    let store = demo_store();
    assert!(store.set_language(msisdn, Language::English).await.unwrap());
    assert!(store.set_pin(msisdn, pin).await.unwrap());
    store
}

pub fn engine(subscribers: InMemorySubscriberStore) -> UssdEngine {
    engine_with(subscribers, MenuSettings::default())
}

pub fn engine_with(subscribers: InMemorySubscriberStore, settings: MenuSettings) -> UssdEngine {
    build(Box::new(subscribers), settings)
}

/// An engine over any subscriber store, with default settings.
pub fn engine_with_store(subscribers: SubscriberStoreBox) -> UssdEngine {
    build(subscribers, MenuSettings::default())
}

fn build(subscribers: SubscriberStoreBox, settings: MenuSettings) -> UssdEngine {
    UssdEngine::new(
        subscribers,
        Box::new(InMemorySessionStore::new(SESSION_TIMEOUT)),
        Box::new(StaticCatalog::default()),
        settings,
    )
}

/// One subscriber talking to the engine over one session id.
pub struct Dialogue<'a> {
    pub engine: &'a UssdEngine,
    pub msisdn: &'a str,
    pub session_id: &'a str,
}

impl<'a> Dialogue<'a> {
    pub fn new(engine: &'a UssdEngine, msisdn: &'a str, session_id: &'a str) -> Self {
        Self {
            engine,
            msisdn,
            session_id,
        }
    }

    pub async fn send(&self, input: &str) -> UssdResponse {
        self.engine
            .process_request(self.msisdn, input, self.session_id)
            .await
    }

    /// Sends each input in turn and returns the last response.
    pub async fn send_all(&self, inputs: &[&str]) -> UssdResponse {
        let mut last = None;
        for input in inputs {
            last = Some(self.send(input).await);
        }
        last.expect("at least one input")
    }
}
