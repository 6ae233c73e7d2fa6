//! Fasting status as shown on the dashboard
//!
//! Two states, `Inactive -> start -> Active -> stop -> Inactive`. Both
//! transitions are remote calls; this view is always derived from the
//! summary re-fetched after the call, never flipped ahead of confirmation.

use serde::Serialize;

use crate::models::{DailySummary, FastingStatus};

/// Label shown when no fast is running
pub const INACTIVE_LABEL: &str = "No hay ayuno activo.";

/// Protocol shown when an active fast carries no label
pub const CUSTOM_PROTOCOL: &str = "custom";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FastingState {
    Inactive,
    Active {
        protocol: String,
        session_id: Option<i64>,
    },
}

impl From<&FastingStatus> for FastingState {
    fn from(status: &FastingStatus) -> Self {
        if !status.active {
            // protocol and id of an inactive status are not current
            return FastingState::Inactive;
        }
        // only a missing protocol falls back; a blank one is shown as sent
        let protocol = status
            .protocol
            .clone()
            .unwrap_or_else(|| CUSTOM_PROTOCOL.to_string());
        FastingState::Active {
            protocol,
            session_id: status.session_id,
        }
    }
}

/// Which fasting actions the dashboard offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FastingView {
    pub state: FastingState,
    pub label: String,
    pub can_start: bool,
    pub can_stop: bool,
}

impl FastingView {
    pub fn from_status(status: &FastingStatus) -> Self {
        let state = FastingState::from(status);
        let (label, can_start, can_stop) = match &state {
            FastingState::Inactive => (INACTIVE_LABEL.to_string(), true, false),
            FastingState::Active { protocol, .. } => (format!("Ayuno activo · {}", protocol), false, true),
        };
        Self {
            state,
            label,
            can_start,
            can_stop,
        }
    }

    pub fn from_summary(summary: &DailySummary) -> Self {
        Self::from_status(&summary.fasting)
    }

    /// Same view with both actions disabled, used while a mutation is in flight
    pub fn locked(mut self) -> Self {
        self.can_start = false;
        self.can_stop = false;
        self
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, FastingState::Active { .. })
    }
}
