use tracing::debug;

use crate::{fetcher::Fetch, query::Query};

/// Forwards user-submitted location text to the fetch collaborator.
///
/// Nothing is validated or trimmed: an empty string is submitted like any other
/// and the upstream error comes back through the result slot.
#[derive(Debug, Clone)]
pub struct QueryTrigger<F> {
    fetcher: F,
}

impl<F: Fetch> QueryTrigger<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn submit(&self, location_text: &str) {
        debug!(location = location_text, "query submitted");
        self.fetcher.fetch(Query::new(location_text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::StalePolicy,
        query::QueryResult,
        slot::{ResultSlot, ResultWatcher, result_slot},
        test_support::snapshot,
    };
    use std::cell::RefCell;

    /// Records queries and resolves them synchronously.
    struct SyncFetch {
        slot: ResultSlot,
        seen: RefCell<Vec<String>>,
        history: RefCell<Vec<QueryResult>>,
        watcher: ResultWatcher,
    }

    impl SyncFetch {
        fn new() -> Self {
            let (slot, watcher) = result_slot(StalePolicy::Discard);
            Self { slot, seen: RefCell::default(), history: RefCell::default(), watcher }
        }
    }

    impl Fetch for &SyncFetch {
        fn fetch(&self, query: Query) {
            self.seen.borrow_mut().push(query.text().to_string());

            let ticket = self.slot.begin();
            self.history.borrow_mut().push(self.watcher.current());

            let outcome = if query.text().trim().is_empty() {
                QueryResult::Error("Parameter q is missing.".into())
            } else {
                QueryResult::Success(snapshot(query.text()))
            };
            self.slot.resolve(ticket, outcome);
            self.history.borrow_mut().push(self.watcher.current());
        }
    }

    #[test]
    fn each_submit_fetches_exactly_once() {
        let fetch = SyncFetch::new();
        let trigger = QueryTrigger::new(&fetch);

        trigger.submit("Paris");
        trigger.submit("Rome");

        assert_eq!(*fetch.seen.borrow(), vec!["Paris", "Rome"]);
    }

    #[test]
    fn empty_query_is_passed_through() {
        let fetch = SyncFetch::new();
        let trigger = QueryTrigger::new(&fetch);

        trigger.submit("");
        trigger.submit("   ");

        assert_eq!(*fetch.seen.borrow(), vec!["", "   "]);
        assert_eq!(fetch.watcher.current(), QueryResult::Error("Parameter q is missing.".into()));
    }

    #[test]
    fn loading_precedes_every_terminal_state() {
        let fetch = SyncFetch::new();
        let trigger = QueryTrigger::new(&fetch);

        trigger.submit("");
        trigger.submit("Paris");
        trigger.submit("Rome");

        let history = fetch.history.borrow();
        assert_eq!(history.len(), 6);
        for pair in history.chunks(2) {
            assert_eq!(pair[0], QueryResult::Loading);
            assert!(pair[1].is_terminal());
        }
    }
}
