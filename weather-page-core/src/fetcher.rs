//! The fetch collaborator: sole writer of the result slot.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    provider::WeatherProvider,
    query::{Query, QueryResult},
    slot::{ResultSlot, ResultWatcher},
};

/// Fire-and-forget fetch. The outcome is delivered through the result slot.
pub trait Fetch {
    fn fetch(&self, query: Query);
}

/// Resolves queries against a [`WeatherProvider`] and publishes the outcome.
///
/// `fetch` marks the slot `Loading` before returning, then resolves the query
/// on a spawned tokio task, so it must be called from within a runtime.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    provider: Arc<dyn WeatherProvider>,
    slot: Arc<ResultSlot>,
}

impl WeatherFetcher {
    pub fn new(provider: Arc<dyn WeatherProvider>, slot: ResultSlot) -> Self {
        Self { provider, slot: Arc::new(slot) }
    }

    pub fn subscribe(&self) -> ResultWatcher {
        self.slot.subscribe()
    }
}

impl Fetch for WeatherFetcher {
    fn fetch(&self, query: Query) {
        let ticket = self.slot.begin();
        info!(query = query.text(), ?ticket, "fetching weather");

        let provider = Arc::clone(&self.provider);
        let slot = Arc::clone(&self.slot);

        tokio::spawn(async move {
            let outcome = match provider.current(query.text()).await {
                Ok(snapshot) => QueryResult::Success(snapshot),
                Err(err) => {
                    warn!(query = query.text(), error = %err, "weather fetch failed");
                    QueryResult::Error(err.to_string())
                }
            };
            slot.resolve(ticket, outcome);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::StalePolicy, error::FetchError, model::WeatherSnapshot, slot::result_slot,
        test_support::snapshot,
    };
    use async_trait::async_trait;
    use std::{collections::HashMap, sync::Mutex};
    use tokio::sync::oneshot;

    /// Answers each location once its gate is opened by the test.
    #[derive(Debug, Default)]
    struct GatedProvider {
        gates: Mutex<HashMap<String, oneshot::Receiver<Result<WeatherSnapshot, FetchError>>>>,
    }

    impl GatedProvider {
        fn gate(&self, location: &str) -> oneshot::Sender<Result<WeatherSnapshot, FetchError>> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(location.to_string(), rx);
            tx
        }
    }

    #[async_trait]
    impl WeatherProvider for GatedProvider {
        async fn current(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
            let rx = self.gates.lock().unwrap().remove(location).expect("gate registered");
            rx.await.expect("gate dropped")
        }
    }

    fn fetcher(policy: StalePolicy) -> (WeatherFetcher, Arc<GatedProvider>, ResultWatcher) {
        let provider = Arc::new(GatedProvider::default());
        let (slot, watcher) = result_slot(policy);
        let fetcher = WeatherFetcher::new(provider.clone(), slot);
        (fetcher, provider, watcher)
    }

    #[tokio::test]
    async fn loading_is_visible_before_resolution() {
        let (fetcher, provider, mut watcher) = fetcher(StalePolicy::Discard);
        let gate = provider.gate("Paris");

        fetcher.fetch(Query::new("Paris"));
        assert_eq!(watcher.current(), QueryResult::Loading);

        gate.send(Ok(snapshot("Paris"))).unwrap();
        assert_eq!(watcher.settled().await, Some(QueryResult::Success(snapshot("Paris"))));
    }

    #[tokio::test]
    async fn every_subscriber_sees_the_outcome() {
        let (fetcher, provider, mut first) = fetcher(StalePolicy::Discard);
        let mut second = fetcher.subscribe();
        let gate = provider.gate("Paris");

        fetcher.fetch(Query::new("Paris"));
        gate.send(Ok(snapshot("Paris"))).unwrap();

        assert_eq!(first.settled().await, second.settled().await);
    }

    #[tokio::test]
    async fn error_is_published_as_message() {
        let (fetcher, provider, mut watcher) = fetcher(StalePolicy::Discard);
        let gate = provider.gate("Atlantis");

        fetcher.fetch(Query::new("Atlantis"));
        gate.send(Err(FetchError::Status { status: 400, message: "City not found".into() }))
            .unwrap();

        assert_eq!(watcher.settled().await, Some(QueryResult::Error("City not found".into())));
    }

    #[tokio::test]
    async fn resubmitting_from_terminal_state_goes_back_to_loading() {
        let (fetcher, provider, mut watcher) = fetcher(StalePolicy::Discard);

        let gate = provider.gate("Atlantis");
        fetcher.fetch(Query::new("Atlantis"));
        gate.send(Err(FetchError::MissingApiKey)).unwrap();
        assert!(matches!(watcher.settled().await, Some(QueryResult::Error(_))));

        let _gate = provider.gate("Paris");
        fetcher.fetch(Query::new("Paris"));
        assert_eq!(watcher.current(), QueryResult::Loading);
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let (fetcher, provider, mut watcher) = fetcher(StalePolicy::Discard);
        let slow = provider.gate("Paris");
        let fast = provider.gate("Rome");

        fetcher.fetch(Query::new("Paris"));
        fetcher.fetch(Query::new("Rome"));

        fast.send(Ok(snapshot("Rome"))).unwrap();
        assert_eq!(watcher.settled().await, Some(QueryResult::Success(snapshot("Rome"))));

        slow.send(Ok(snapshot("Paris"))).unwrap();
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(watcher.current(), QueryResult::Success(snapshot("Rome")));
    }

    #[tokio::test]
    async fn last_write_wins_lets_stale_response_through() {
        let (fetcher, provider, mut watcher) = fetcher(StalePolicy::LastWriteWins);
        let slow = provider.gate("Paris");
        let fast = provider.gate("Rome");

        fetcher.fetch(Query::new("Paris"));
        fetcher.fetch(Query::new("Rome"));

        fast.send(Ok(snapshot("Rome"))).unwrap();
        assert_eq!(watcher.settled().await, Some(QueryResult::Success(snapshot("Rome"))));

        slow.send(Ok(snapshot("Paris"))).unwrap();
        assert_eq!(watcher.changed().await, Some(QueryResult::Success(snapshot("Paris"))));
    }
}
