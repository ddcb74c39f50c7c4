//! Request tickets
//!
//! Every outstanding backend call belongs to a slot (list, detail, create,
//! suggestion). Issuing a new request or leaving the owning view moves the
//! slot forward, and completions carrying an older ticket are dropped.

/// Identifies one issued request within its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic per-slot counter
#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    /// Last issued ticket value (0 = never issued)
    current: u64,
    /// Whether the current ticket is still waiting for its completion
    pending: bool,
}

impl RequestSequence {
    /// Issue a ticket, superseding any outstanding one
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        self.pending = true;
        Ticket(self.current)
    }

    /// Drop interest in whatever is outstanding
    pub fn invalidate(&mut self) {
        self.current += 1;
        self.pending = false;
    }

    /// Accept a completion: true only for the latest issued ticket, once
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.current {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Whether a request of this slot is in flight
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_is_accepted_once() {
        let mut seq = RequestSequence::default();
        let t = seq.issue();
        assert!(seq.is_pending());
        assert!(seq.complete(t));
        assert!(!seq.is_pending());
        assert!(!seq.complete(t));
    }

    #[test]
    fn newer_request_supersedes_older() {
        let mut seq = RequestSequence::default();
        let old = seq.issue();
        let new = seq.issue();
        assert!(old < new);
        assert!(!seq.complete(old));
        assert!(seq.is_pending());
        assert!(seq.complete(new));
    }

    #[test]
    fn invalidate_drops_outstanding() {
        let mut seq = RequestSequence::default();
        let t = seq.issue();
        seq.invalidate();
        assert!(!seq.is_pending());
        assert!(!seq.complete(t));
    }
}
