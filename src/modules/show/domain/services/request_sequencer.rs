use std::sync::atomic::{AtomicU64, Ordering};

/// Handed out when a request is issued; compared against the sequencer when its
/// response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Last-write-wins guard for overlapping requests.
///
/// Only the response belonging to the most recently issued ticket is applied;
/// anything older is stale regardless of arrival order.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// `Some(value)` when the ticket is still current, `None` when superseded
    pub fn resolve<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_latest(ticket) {
            Some(value)
        } else {
            log::debug!(
                "Discarding stale response (generation {} < {})",
                ticket.0,
                self.latest.load(Ordering::SeqCst)
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_resolves() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.begin();
        let second = sequencer.begin();

        // second answers first, then the slow first one lands
        assert_eq!(sequencer.resolve(second, "second"), Some("second"));
        assert_eq!(sequencer.resolve(first, "first"), None);
    }

    #[test]
    fn test_generations_increase() {
        let sequencer = RequestSequencer::new();
        let a = sequencer.begin();
        let b = sequencer.begin();
        assert!(b.generation() > a.generation());
        assert!(!sequencer.is_latest(a));
        assert!(sequencer.is_latest(b));
    }
}
