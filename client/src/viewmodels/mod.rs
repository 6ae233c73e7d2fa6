//! View models: derived state the dashboard screens render
//!
//! Each view model is handed the active user id by the session and never
//! reads it from anywhere else. Loads are split into `begin_*` (take a
//! ticket) and `complete_*` (apply the response if still current) so that an
//! event loop can run requests concurrently with user input; the `async`
//! helpers simply run both halves back to back.

pub mod food_history;
pub mod profile;
pub mod recommendations;
pub mod summary;

pub use food_history::{FoodHistoryViewModel, PageContext};
pub use profile::{ProfileViewModel, SeriesWindows};
pub use recommendations::RecommendationsViewModel;
pub use summary::{DailySummaryViewModel, MutationKind, MutationOutcome};

use std::fmt::Debug;

use tracing::{debug, warn};

use crate::error::ClientResult;
use crate::guard::{RequestGuard, Ticket};

/// What happened to a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response replaced the current value
    Applied,
    /// The request failed; the error policy was applied
    Failed,
    /// The response was stale and ignored
    Discarded,
}

/// What a failed load does to the value already on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Keep the previous value and show the error next to it
    KeepStale,
    /// Drop the previous value and show the error instead
    Clear,
    /// Drop the previous value without showing anything
    Silent,
}

/// One remotely loaded value with its loading and error state
#[derive(Debug, Clone)]
pub struct Resource<C, T> {
    value: Option<T>,
    error: Option<String>,
    loading: bool,
    policy: ErrorPolicy,
    guard: RequestGuard<C>,
}

impl<C: Clone + PartialEq + Debug, T> Resource<C, T> {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            value: None,
            error: None,
            loading: false,
            policy,
            guard: RequestGuard::new(),
        }
    }

    pub fn begin(&mut self, context: C) -> Ticket<C> {
        self.loading = true;
        self.guard.begin(context)
    }

    pub fn complete(&mut self, ticket: &Ticket<C>, result: ClientResult<T>) -> Completion {
        if !self.guard.accepts(ticket) {
            return Completion::Discarded;
        }
        self.loading = false;
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
                Completion::Applied
            }
            Err(err) => {
                match self.policy {
                    ErrorPolicy::KeepStale => {
                        warn!(error = %err, "Load failed, keeping previous value");
                        self.error = Some(err.user_message());
                    }
                    ErrorPolicy::Clear => {
                        warn!(error = %err, "Load failed");
                        self.value = None;
                        self.error = Some(err.user_message());
                    }
                    ErrorPolicy::Silent => {
                        debug!(error = %err, "Optional load failed");
                        self.value = None;
                        self.error = None;
                    }
                }
                Completion::Failed
            }
        }
    }

    /// Install a value obtained outside a load, e.g. from a save response;
    /// loads still in flight become stale
    pub fn replace(&mut self, value: T) {
        self.guard.invalidate();
        self.value = Some(value);
        self.error = None;
        self.loading = false;
    }

    /// Forget the value and make outstanding requests stale
    pub fn reset(&mut self) {
        self.guard.invalidate();
        self.value = None;
        self.error = None;
        self.loading = false;
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
