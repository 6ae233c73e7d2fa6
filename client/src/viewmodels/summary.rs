//! Daily summary hub
//!
//! Holds today's summary for the active user. Every mutating action runs as
//! two sequenced steps: the mutation request, then a refresh of the summary.
//! The refresh is issued only after the mutation has completed, and it runs
//! whether the mutation succeeded or not, so the screen always reflects what
//! the service holds. State is never flipped ahead of confirmation.

use std::future::Future;

use ginger_shared::validation::{validate_meal_text, validate_water_ml};
use ginger_shared::{DailySummary, DashboardView, FastingView, UserId};
use tracing::{info, warn};

use super::{Completion, ErrorPolicy, Resource};
use crate::api::DashboardApi;
use crate::error::{ClientError, ClientResult};
use crate::guard::Ticket;

/// The dashboard's mutating actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    AddWater,
    LogMeal,
    StartFast,
    StopFast,
}

/// Result of both steps of a mutating action
#[derive(Debug)]
pub struct MutationOutcome {
    pub kind: MutationKind,
    pub mutation: ClientResult<()>,
    /// `None` when the action was rejected locally and nothing was sent
    pub refresh: Option<Completion>,
}

impl MutationOutcome {
    fn rejected(kind: MutationKind, err: ClientError) -> Self {
        Self {
            kind,
            mutation: Err(err),
            refresh: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.mutation.is_ok() && self.refresh == Some(Completion::Applied)
    }
}

pub struct DailySummaryViewModel {
    user_id: UserId,
    summary: Resource<UserId, DailySummary>,
    mutating: bool,
}

impl DailySummaryViewModel {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            summary: Resource::new(ErrorPolicy::KeepStale),
            mutating: false,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Replace the active user; anything loaded for the previous one is dropped
    pub fn set_user(&mut self, user_id: UserId) {
        if self.user_id == user_id {
            return;
        }
        self.user_id = user_id;
        self.summary.reset();
        self.mutating = false;
    }

    pub fn summary(&self) -> Option<&DailySummary> {
        self.summary.value()
    }

    pub fn error(&self) -> Option<&str> {
        self.summary.error()
    }

    pub fn is_loading(&self) -> bool {
        self.summary.is_loading()
    }

    /// Mutation triggers are disabled while a mutation is in flight
    pub fn can_mutate(&self) -> bool {
        !self.mutating
    }

    /// Everything the dashboard widgets render
    pub fn view(&self) -> Option<DashboardView> {
        let mut view = DashboardView::from_summary(self.summary.value()?);
        if self.mutating {
            view.fasting = view.fasting.locked();
        }
        Some(view)
    }

    pub fn fasting(&self) -> Option<FastingView> {
        self.view().map(|v| v.fasting)
    }

    pub fn begin_refresh(&mut self) -> Ticket<UserId> {
        self.summary.begin(self.user_id)
    }

    pub fn complete_refresh(&mut self, ticket: &Ticket<UserId>, result: ClientResult<DailySummary>) -> Completion {
        let result = result.and_then(|s| {
            if s.user_id == *ticket.context() {
                Ok(s)
            } else {
                Err(ClientError::invalid_response(format!(
                    "summary for user {} returned for user {}",
                    s.user_id,
                    ticket.context()
                )))
            }
        });
        self.summary.complete(ticket, result)
    }

    /// Re-fetch today's summary
    pub async fn refresh(&mut self, api: &dyn DashboardApi) -> Completion {
        let ticket = self.begin_refresh();
        let result = api.today_summary(*ticket.context()).await;
        self.complete_refresh(&ticket, result)
    }

    pub async fn add_water(&mut self, api: &dyn DashboardApi, ml: u32) -> MutationOutcome {
        if let Err(err) = validate_water_ml(ml) {
            return MutationOutcome::rejected(MutationKind::AddWater, err.into());
        }
        let user_id = self.user_id;
        self.mutate_then_refresh(api, MutationKind::AddWater, api.add_water(user_id, ml))
            .await
    }

    /// Log a meal from free text; the service extracts the nutrients
    pub async fn log_meal(&mut self, api: &dyn DashboardApi, text: &str) -> MutationOutcome {
        if let Err(err) = validate_meal_text(text) {
            return MutationOutcome::rejected(MutationKind::LogMeal, err.into());
        }
        let user_id = self.user_id;
        self.mutate_then_refresh(api, MutationKind::LogMeal, api.log_meal(user_id, text))
            .await
    }

    pub async fn start_fast(&mut self, api: &dyn DashboardApi, protocol: &str) -> MutationOutcome {
        if !self.fasting().is_some_and(|f| f.can_start) {
            return MutationOutcome::rejected(
                MutationKind::StartFast,
                ClientError::NotAllowed("start fast".to_string()),
            );
        }
        let user_id = self.user_id;
        self.mutate_then_refresh(api, MutationKind::StartFast, api.start_fasting(user_id, protocol))
            .await
    }

    pub async fn stop_fast(&mut self, api: &dyn DashboardApi) -> MutationOutcome {
        if !self.fasting().is_some_and(|f| f.can_stop) {
            return MutationOutcome::rejected(
                MutationKind::StopFast,
                ClientError::NotAllowed("stop fast".to_string()),
            );
        }
        let user_id = self.user_id;
        self.mutate_then_refresh(api, MutationKind::StopFast, api.stop_fasting(user_id))
            .await
    }

    /// Mark a mutation as in flight; fails if one already is
    pub fn begin_mutation(&mut self, kind: MutationKind) -> ClientResult<()> {
        if self.mutating {
            warn!(?kind, "Mutation rejected while another is in flight");
            return Err(ClientError::Busy);
        }
        self.mutating = true;
        self.summary.set_error(None);
        Ok(())
    }

    pub fn finish_mutation(&mut self) {
        self.mutating = false;
    }

    async fn mutate_then_refresh<F>(
        &mut self,
        api: &dyn DashboardApi,
        kind: MutationKind,
        mutation: F,
    ) -> MutationOutcome
    where
        F: Future<Output = ClientResult<()>>,
    {
        if let Err(err) = self.begin_mutation(kind) {
            return MutationOutcome::rejected(kind, err);
        }

        let mutation = mutation.await;
        match &mutation {
            Ok(()) => info!(?kind, user_id = self.user_id, "Mutation accepted"),
            Err(err) => warn!(?kind, user_id = self.user_id, error = %err, "Mutation failed"),
        }

        let refresh = self.refresh(api).await;
        if let Err(err) = &mutation {
            // the mutation's failure outranks whatever the refresh reported
            self.summary.set_error(Some(err.user_message()));
        }

        self.finish_mutation();
        MutationOutcome {
            kind,
            mutation,
            refresh: Some(refresh),
        }
    }
}
