use super::engine::UssdEngine;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Periodically removes expired sessions until the returned handle is aborted.
pub fn spawn_session_sweeper(engine: Arc<UssdEngine>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match engine.sweep_expired().await {
                Ok(0) => {}
                Ok(removed) => tracing::info!(removed, "cleaned up expired sessions"),
                Err(e) => tracing::error!(error = %e, "session sweep failed"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuSettings;
    use crate::domain::credential::PinHasher;
    use crate::domain::subscriber::Subscriber;
    use crate::infrastructure::catalog::StaticCatalog;
    use crate::infrastructure::in_memory::{InMemorySessionStore, InMemorySubscriberStore};

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_removes_idle_sessions() {
        let subscribers = InMemorySubscriberStore::with_subscribers(
            PinHasher::with_cost(8, 1, 1).unwrap(),
            [Subscriber::new("100", "Amina")],
        );
        let engine = Arc::new(UssdEngine::new(
            Box::new(subscribers),
            Box::new(InMemorySessionStore::new(Duration::from_secs(300))),
            Box::new(StaticCatalog::default()),
            MenuSettings::default(),
        ));

        engine.process_request("100", "", "s1").await;
        assert_eq!(engine.active_sessions().await.unwrap(), 1);

        let handle = spawn_session_sweeper(engine.clone(), Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(200)).await;
        assert_eq!(engine.active_sessions().await.unwrap(), 1);

        tokio::time::sleep(Duration::from_secs(200)).await;
        assert_eq!(engine.active_sessions().await.unwrap(), 0);

        handle.abort();
    }
}
