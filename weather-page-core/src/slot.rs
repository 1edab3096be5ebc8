//! Observable holder for the latest [`QueryResult`].
//!
//! The slot has one writer ([`ResultSlot`], owned by the fetch collaborator) and
//! any number of readers ([`ResultWatcher`]). Readers see the current value and
//! are woken on every change.

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{config::StalePolicy, query::QueryResult};

/// Identifies one submitted query. Issued by [`ResultSlot::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct Published {
    seq: u64,
    result: QueryResult,
}

/// Writer half of the slot.
#[derive(Debug)]
pub struct ResultSlot {
    tx: watch::Sender<Published>,
    policy: StalePolicy,
}

/// Reader half of the slot.
#[derive(Debug, Clone)]
pub struct ResultWatcher {
    rx: watch::Receiver<Published>,
}

/// Create an `Idle` slot with the given stale-result policy.
pub fn result_slot(policy: StalePolicy) -> (ResultSlot, ResultWatcher) {
    let (tx, rx) = watch::channel(Published::default());
    (ResultSlot { tx, policy }, ResultWatcher { rx })
}

impl ResultSlot {
    /// Mark a new query as in flight and hand out its ticket.
    pub fn begin(&self) -> Ticket {
        let mut seq = 0;
        self.tx.send_modify(|p| {
            p.seq += 1;
            p.result = QueryResult::Loading;
            seq = p.seq;
        });
        debug!(seq, "slot -> loading");
        Ticket(seq)
    }

    /// Publish the outcome for `ticket`.
    ///
    /// Returns `false` when the outcome was dropped because a newer query has
    /// started since and the policy is [`StalePolicy::Discard`].
    pub fn resolve(&self, ticket: Ticket, result: QueryResult) -> bool {
        let policy = self.policy;
        let name = result.name();

        let accepted = self.tx.send_if_modified(|p| {
            if policy == StalePolicy::Discard && p.seq != ticket.0 {
                return false;
            }
            p.result = result;
            true
        });

        if accepted {
            debug!(seq = ticket.0, result = name, "slot resolved");
        } else {
            warn!(seq = ticket.0, result = name, "discarding result of superseded query");
        }
        accepted
    }

    pub fn subscribe(&self) -> ResultWatcher {
        ResultWatcher { rx: self.tx.subscribe() }
    }
}

impl ResultWatcher {
    /// The latest published value.
    pub fn current(&self) -> QueryResult {
        self.rx.borrow().result.clone()
    }

    /// Wait for the next change and return the new value.
    ///
    /// Returns `None` once the writer is gone.
    pub async fn changed(&mut self) -> Option<QueryResult> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().result.clone())
    }

    /// Wait until the slot holds `Success` or `Error`.
    pub async fn settled(&mut self) -> Option<QueryResult> {
        let published = self.rx.wait_for(|p| p.result.is_terminal()).await.ok()?;
        Some(published.result.clone())
    }
}
