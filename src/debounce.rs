//! Trailing-edge debounce without timer cancellation.
//!
//! Every call stores its value and hands back a ticket. The host schedules a
//! timeout per call; when it fires it redeems the ticket, and only the most
//! recent ticket yields the value. Superseded timeouts find nothing and return.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Ticket identifying one debounced call.
pub type Ticket = u64;

/// Last-value-wins debouncer.
#[derive(Debug)]
pub struct Debounce<T> {
    generation: Ticket,
    pending: Option<T>,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None }
    }
}

impl<T> Debounce<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call, superseding any pending one.
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    /// Redeem `ticket`; yields the latest value only if no newer call arrived.
    pub fn take(&mut self, ticket: Ticket) -> Option<T> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }
}
