//! Today's recommendation banner
//!
//! Recommendations are optional: a failed fetch just means nothing to show.

use ginger_shared::{BannerState, RecommendationSet, Tone, UserId};

use super::{Completion, ErrorPolicy, Resource};
use crate::api::DashboardApi;
use crate::error::ClientResult;
use crate::guard::Ticket;

pub struct RecommendationsViewModel {
    user_id: UserId,
    set: Resource<UserId, RecommendationSet>,
    banner: BannerState,
}

impl RecommendationsViewModel {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            set: Resource::new(ErrorPolicy::Silent),
            banner: BannerState::default(),
        }
    }

    pub fn set_user(&mut self, user_id: UserId) {
        if self.user_id == user_id {
            return;
        }
        self.user_id = user_id;
        self.set.reset();
        self.banner = BannerState::default();
    }

    pub fn begin_load(&mut self) -> Ticket<UserId> {
        self.set.begin(self.user_id)
    }

    pub fn complete_load(
        &mut self,
        ticket: &Ticket<UserId>,
        result: ClientResult<RecommendationSet>,
    ) -> Completion {
        let completion = self.set.complete(ticket, result);
        match completion {
            Completion::Applied => {
                let messages = self.set.value().map(|s| s.messages.clone()).unwrap_or_default();
                self.banner = BannerState::new(messages);
            }
            Completion::Failed => self.banner = BannerState::default(),
            Completion::Discarded => {}
        }
        completion
    }

    pub async fn load(&mut self, api: &dyn DashboardApi) -> Completion {
        let ticket = self.begin_load();
        let result = api.today_recommendations(*ticket.context()).await;
        self.complete_load(&ticket, result)
    }

    pub fn recommendations(&self) -> Option<&RecommendationSet> {
        self.set.value()
    }

    pub fn banner(&self) -> &BannerState {
        &self.banner
    }

    pub fn primary(&self) -> Option<&str> {
        self.banner.primary()
    }

    pub fn tone(&self) -> Option<Tone> {
        self.banner.tone()
    }

    /// Switch between the primary message only and every message
    pub fn toggle(&mut self) {
        self.banner.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use chrono::NaiveDate;

    fn set(user_id: UserId, messages: &[&str]) -> RecommendationSet {
        RecommendationSet {
            user_id,
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            messages: messages.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_primary_follows_topic_priority() {
        let mut vm = RecommendationsViewModel::new(1);
        let t = vm.begin_load();
        vm.complete_load(&t, Ok(set(1, &["Comida: bien", "Agua: te falta 500ml"])));
        assert_eq!(vm.primary(), Some("Agua: te falta 500ml"));
        assert_eq!(vm.tone(), Some(Tone::Warn));
    }

    #[test]
    fn test_failure_shows_nothing() {
        let mut vm = RecommendationsViewModel::new(1);
        let t = vm.begin_load();
        vm.complete_load(&t, Ok(set(1, &["Agua: objetivo cumplido"])));
        let t = vm.begin_load();
        let result = vm.complete_load(&t, Err(ClientError::invalid_response("bad json")));
        assert_eq!(result, Completion::Failed);
        assert_eq!(vm.primary(), None);
        assert_eq!(vm.tone(), None);
    }

    #[test]
    fn test_toggle_needs_several_messages() {
        let mut vm = RecommendationsViewModel::new(1);
        let t = vm.begin_load();
        vm.complete_load(&t, Ok(set(1, &["Agua: objetivo cumplido"])));
        vm.toggle();
        assert!(!vm.banner().is_expanded());

        let t = vm.begin_load();
        vm.complete_load(&t, Ok(set(1, &["Comida: registrada", "Ayuno: cerca del objetivo"])));
        vm.toggle();
        assert!(vm.banner().is_expanded());
        assert_eq!(vm.banner().expanded_messages().len(), 2);
    }

    #[test]
    fn test_stale_set_after_user_switch_ignored() {
        let mut vm = RecommendationsViewModel::new(1);
        let t = vm.begin_load();
        vm.set_user(2);
        assert_eq!(vm.complete_load(&t, Ok(set(1, &["Agua: te falta 300ml"]))), Completion::Discarded);
        assert_eq!(vm.primary(), None);
    }
}
