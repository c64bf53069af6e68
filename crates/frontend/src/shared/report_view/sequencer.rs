use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Tag of one outbound report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets; only the most recent one is current.
///
/// Responses are applied by request order, not completion order: a response whose
/// ticket was superseded is dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes all previous ones.
    pub fn next(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let sequencer = RequestSequencer::new();
        let a = sequencer.next();
        assert!(sequencer.is_current(a));
        let b = sequencer.next();
        assert!(!sequencer.is_current(a));
        assert!(sequencer.is_current(b));
        assert!(a < b);
    }

    #[test]
    fn test_clones_share_the_counter() {
        let sequencer = RequestSequencer::new();
        let clone = sequencer.clone();
        let a = sequencer.next();
        let b = clone.next();
        assert!(!sequencer.is_current(a));
        assert!(sequencer.is_current(b));
    }
}
