//! Stale-response protection
//!
//! Every request takes a [`Ticket`] when it starts. The ticket records the
//! generation counter and the context (user, page) the request was issued
//! for. When the response arrives it is applied only if the guard still sits
//! at the same generation and context; otherwise the response belongs to a
//! screen state that no longer exists and is dropped.

use tracing::debug;

/// Snapshot taken when a request starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<C> {
    generation: u64,
    context: C,
}

impl<C> Ticket<C> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn context(&self) -> &C {
        &self.context
    }
}

/// Generation counter plus the context of the latest request
#[derive(Debug, Clone)]
pub struct RequestGuard<C> {
    generation: u64,
    context: Option<C>,
}

impl<C> Default for RequestGuard<C> {
    fn default() -> Self {
        Self {
            generation: 0,
            context: None,
        }
    }
}

impl<C: Clone + PartialEq + std::fmt::Debug> RequestGuard<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; any request started earlier becomes stale
    pub fn begin(&mut self, context: C) -> Ticket<C> {
        self.generation += 1;
        self.context = Some(context.clone());
        Ticket {
            generation: self.generation,
            context,
        }
    }

    /// Make every outstanding ticket stale, e.g. on a user switch
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.context = None;
    }

    /// Whether a completed request may still be applied
    pub fn accepts(&self, ticket: &Ticket<C>) -> bool {
        let current = ticket.generation == self.generation
            && self.context.as_ref() == Some(&ticket.context);
        if !current {
            debug!(
                stale_generation = ticket.generation,
                current_generation = self.generation,
                context = ?ticket.context,
                "Discarding stale response"
            );
        }
        current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
