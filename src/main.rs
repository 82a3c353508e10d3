use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::sync::Arc;
use ussd_menu::application::engine::UssdEngine;
use ussd_menu::application::sweeper::spawn_session_sweeper;
use ussd_menu::config::{Cli, ServiceConfig};
use ussd_menu::domain::credential::PinHasher;
use ussd_menu::domain::ports::{SessionStoreBox, TranslatorBox};
use ussd_menu::infrastructure::catalog::StaticCatalog;
use ussd_menu::infrastructure::in_memory::InMemorySessionStore;
use ussd_menu::infrastructure::open_subscriber_store;
use ussd_menu::infrastructure::seed::{demo_subscribers, load_subscribers};
use ussd_menu::interfaces::http;
use ussd_menu::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::try_from(Cli::parse()).into_diagnostic()?;
    init_logging(config.log_json).into_diagnostic()?;

    let seed = match &config.subscribers_file {
        Some(path) => load_subscribers(path),
        None => demo_subscribers(),
    }
    .into_diagnostic()?;
    tracing::info!(subscribers = seed.len(), "loaded subscriber seed");

    let subscribers = open_subscriber_store(config.db_path.as_deref(), PinHasher::default(), seed)
        .await
        .into_diagnostic()?;
    let sessions: SessionStoreBox = Box::new(InMemorySessionStore::new(config.session_timeout));
    let translator: TranslatorBox = Box::new(StaticCatalog::new(config.default_language));

    let engine = Arc::new(UssdEngine::new(
        subscribers,
        sessions,
        translator,
        config.menu.clone(),
    ));
    let sweeper = spawn_session_sweeper(engine.clone(), config.sweep_interval);

    tracing::info!(
        ussd_code = %config.ussd_code,
        language = %config.default_language,
        max_pin_attempts = config.menu.max_pin_attempts,
        session_timeout_ms = config.session_timeout.as_millis() as u64,
        "starting USSD menu service"
    );
    let served = http::serve(config.port, engine).await;
    sweeper.abort();
    served.into_diagnostic()
}
