//! Ordering guard for overlapping snapshot loads.
//!
//! The dashboard polls on a timer while the user can trigger loads of their
//! own, and nothing cancels an in-flight request. Without a fence, a slow
//! response that settles late would clobber a fresher snapshot. The sequencer
//! stamps every load at start and only lets a response through if no
//! later-started load has been applied yet.

/// Sequence stamp handed out by [`LoadSequencer::begin`]. Opaque to callers;
/// hold it across the await and present it when the response settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct LoadSequencer {
    issued: u64,
    committed: u64,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a load that is about to start.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Ask whether the response for `ticket` may be applied. Accepts only
    /// tickets newer than the last applied one, so whichever load started
    /// last wins no matter the settle order. Failed loads simply never
    /// commit; their tickets lapse.
    pub fn try_commit(&mut self, ticket: Ticket) -> bool {
        if ticket.0 > self.committed {
            self.committed = ticket.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_responses_all_commit() {
        let mut seq = LoadSequencer::new();
        let a = seq.begin();
        assert!(seq.try_commit(a));
        let b = seq.begin();
        assert!(seq.try_commit(b));
    }

    #[test]
    fn stale_response_is_rejected() {
        let mut seq = LoadSequencer::new();
        let timer_tick = seq.begin();
        let user_reload = seq.begin();

        // The user-triggered load settles first; the older timer tick must
        // not overwrite it afterwards.
        assert!(seq.try_commit(user_reload));
        assert!(!seq.try_commit(timer_tick));
    }

    #[test]
    fn failed_load_leaves_ordering_untouched() {
        let mut seq = LoadSequencer::new();
        let ok = seq.begin();
        let _failed = seq.begin(); // errored, never presented
        assert!(seq.try_commit(ok));

        let next = seq.begin();
        assert!(seq.try_commit(next));
    }

    #[test]
    fn double_commit_of_same_ticket_is_rejected() {
        let mut seq = LoadSequencer::new();
        let t = seq.begin();
        assert!(seq.try_commit(t));
        assert!(!seq.try_commit(t));
    }
}
