//! Session: the composition root
//!
//! Owns the user list, the active user id and every view model. The active
//! id lives here only; view models receive it through `set_user`. While the
//! active profile is incomplete the onboarding screen is the only one shown.

use ginger_shared::onboarding::{missing_fields, REQUIRED_FIELDS};
use ginger_shared::validation::get_missing_fields_labels;
use ginger_shared::{
    needs_onboarding, DashboardView, NutrientTotals, OnboardingForm, PageControls, Tone, UserId,
    UserProfile,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::api::DashboardApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::viewmodels::{
    DailySummaryViewModel, FoodHistoryViewModel, MutationOutcome, ProfileViewModel,
    RecommendationsViewModel, SeriesWindows,
};

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Onboarding,
    Dashboard,
    Profile,
    FoodHistory,
}

pub struct Session {
    config: ClientConfig,
    users: Vec<UserProfile>,
    active_user: UserId,
    requested: Screen,
    onboarding_form: OnboardingForm,
    onboarding_error: Option<String>,
    summary: DailySummaryViewModel,
    food_history: FoodHistoryViewModel,
    recommendations: RecommendationsViewModel,
    profile: ProfileViewModel,
}

impl Session {
    /// Build a session around an already known user list
    pub fn new(config: ClientConfig, users: Vec<UserProfile>) -> ClientResult<Self> {
        let active_user = users.first().map(|u| u.id).ok_or(ClientError::NoUsers)?;
        let windows = SeriesWindows::from(&config.stats);
        Ok(Self {
            summary: DailySummaryViewModel::new(active_user),
            food_history: FoodHistoryViewModel::new(active_user, config.food_history.page_size),
            recommendations: RecommendationsViewModel::new(active_user),
            profile: ProfileViewModel::new(active_user, windows),
            config,
            users,
            active_user,
            requested: Screen::Dashboard,
            onboarding_form: OnboardingForm::default(),
            onboarding_error: None,
        })
    }

    /// Load the users and make the first one active
    pub async fn bootstrap(api: &dyn DashboardApi, config: ClientConfig) -> ClientResult<Self> {
        let users = api.list_users().await?;
        info!(count = users.len(), "Users loaded");
        Self::new(config, users)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn users(&self) -> &[UserProfile] {
        &self.users
    }

    pub fn active_user_id(&self) -> UserId {
        self.active_user
    }

    pub fn active_profile(&self) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == self.active_user)
    }

    pub fn needs_onboarding(&self) -> bool {
        needs_onboarding(self.active_profile())
    }

    /// The screen actually shown; onboarding overrides any request
    pub fn screen(&self) -> Screen {
        if self.needs_onboarding() {
            Screen::Onboarding
        } else if self.requested == Screen::Onboarding {
            Screen::Dashboard
        } else {
            self.requested
        }
    }

    pub fn navigate(&mut self, screen: Screen) -> Screen {
        self.requested = screen;
        self.screen()
    }

    /// Navigate and load what the resulting screen renders
    pub async fn open(&mut self, api: &dyn DashboardApi, screen: Screen) -> Screen {
        self.navigate(screen);
        self.load_screen(api).await
    }

    /// Load what the current screen renders
    pub async fn load_screen(&mut self, api: &dyn DashboardApi) -> Screen {
        let shown = self.screen();
        match shown {
            Screen::Onboarding => {}
            Screen::Dashboard => self.refresh_dashboard(api).await,
            Screen::Profile => self.profile.load_all(api).await,
            Screen::FoodHistory => {
                self.food_history.load_page(api, 0).await;
            }
        }
        shown
    }

    /// Make another user active and reload the screen for them
    pub async fn switch_user(&mut self, api: &dyn DashboardApi, user_id: UserId) -> ClientResult<Screen> {
        let changed = user_id != self.active_user;
        self.select_user(user_id)?;
        if !changed {
            return Ok(self.screen());
        }
        Ok(self.load_screen(api).await)
    }

    /// Make another user active; everything derived from the previous one is dropped
    pub fn select_user(&mut self, user_id: UserId) -> ClientResult<()> {
        if !self.users.iter().any(|u| u.id == user_id) {
            return Err(ClientError::NotAllowed(format!("unknown user {}", user_id)));
        }
        if user_id == self.active_user {
            return Ok(());
        }
        info!(from = self.active_user, to = user_id, "Switching user");
        self.active_user = user_id;
        self.summary.set_user(user_id);
        self.food_history.set_user(user_id);
        self.recommendations.set_user(user_id);
        self.profile.set_user(user_id);
        self.onboarding_form = OnboardingForm::default();
        self.onboarding_error = None;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Onboarding
    // ------------------------------------------------------------------

    /// Labels of the required fields still missing on the active profile
    pub fn missing_field_labels(&self) -> Vec<String> {
        match self.active_profile() {
            Some(profile) => get_missing_fields_labels(&missing_fields(profile)),
            None => get_missing_fields_labels(&REQUIRED_FIELDS),
        }
    }

    pub fn onboarding_form(&self) -> &OnboardingForm {
        &self.onboarding_form
    }

    pub fn onboarding_form_mut(&mut self) -> &mut OnboardingForm {
        &mut self.onboarding_form
    }

    pub fn onboarding_error(&self) -> Option<&str> {
        self.onboarding_error.as_deref()
    }

    /// Submit the setup form; on success the stored profile is replaced by
    /// the service's recalculated one
    pub async fn submit_onboarding(&mut self, api: &dyn DashboardApi) -> ClientResult<()> {
        self.onboarding_error = None;
        let request = match self.onboarding_form.to_request() {
            Ok(request) => request,
            Err(errors) => {
                let err = errors
                    .into_iter()
                    .next()
                    .map(ClientError::Validation)
                    .unwrap_or_else(|| ClientError::NotAllowed("submit onboarding".to_string()));
                self.onboarding_error = Some(err.user_message());
                return Err(err);
            }
        };

        let user_id = self.active_user;
        match api.submit_onboarding(user_id, &request).await {
            Ok(profile) => {
                info!(user_id, "Onboarding completed");
                self.store_profile(profile)
            }
            Err(err) => {
                warn!(user_id, error = %err, "Onboarding submission failed");
                self.onboarding_error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Save the profile screen's form and keep the user list in step
    pub async fn save_profile(&mut self, api: &dyn DashboardApi) -> ClientResult<()> {
        let profile = self.profile.save(api).await?;
        self.store_profile(profile)
    }

    /// Record a weight and keep the user list in step with the reloaded profile
    pub async fn add_weight(&mut self, api: &dyn DashboardApi, weight_kg: f64) -> ClientResult<()> {
        self.profile.add_weight(api, weight_kg).await?;
        match self.profile.profile().cloned() {
            Some(profile) => self.store_profile(profile),
            None => Ok(()),
        }
    }

    fn store_profile(&mut self, profile: UserProfile) -> ClientResult<()> {
        if profile.id != self.active_user {
            let err = ClientError::invalid_response(format!(
                "profile {} returned for user {}",
                profile.id, self.active_user
            ));
            self.onboarding_error = Some(err.user_message());
            return Err(err);
        }
        match self.users.iter_mut().find(|u| u.id == profile.id) {
            Some(slot) => *slot = profile,
            None => self.users.push(profile),
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // View models
    // ------------------------------------------------------------------

    /// Re-fetch the summary and the recommendations
    pub async fn refresh_dashboard(&mut self, api: &dyn DashboardApi) {
        self.summary.refresh(api).await;
        self.recommendations.load(api).await;
    }

    /// Quick-add the configured default amount of water
    pub async fn quick_add_water(&mut self, api: &dyn DashboardApi) -> MutationOutcome {
        let ml = self.config.dashboard.default_water_ml;
        self.summary.add_water(api, ml).await
    }

    /// Start a fast with the configured default protocol
    pub async fn start_default_fast(&mut self, api: &dyn DashboardApi) -> MutationOutcome {
        let protocol = self.config.dashboard.default_fasting_protocol.clone();
        self.summary.start_fast(api, &protocol).await
    }

    pub fn summary(&self) -> &DailySummaryViewModel {
        &self.summary
    }

    pub fn summary_mut(&mut self) -> &mut DailySummaryViewModel {
        &mut self.summary
    }

    pub fn food_history(&self) -> &FoodHistoryViewModel {
        &self.food_history
    }

    pub fn food_history_mut(&mut self) -> &mut FoodHistoryViewModel {
        &mut self.food_history
    }

    pub fn recommendations(&self) -> &RecommendationsViewModel {
        &self.recommendations
    }

    pub fn recommendations_mut(&mut self) -> &mut RecommendationsViewModel {
        &mut self.recommendations
    }

    pub fn profile(&self) -> &ProfileViewModel {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileViewModel {
        &mut self.profile
    }

    /// Serializable picture of what the current screen shows
    pub fn snapshot(&self) -> SessionSnapshot {
        let screen = self.screen();
        let mut snapshot = SessionSnapshot {
            user_id: self.active_user,
            user: self.active_profile().map(UserProfile::display_name),
            screen,
            missing_fields: Vec::new(),
            dashboard: None,
            recommendation: None,
            tone: None,
            food_history: None,
            error: None,
        };
        match screen {
            Screen::Onboarding => {
                snapshot.missing_fields = self.missing_field_labels();
                snapshot.error = self.onboarding_error.clone();
            }
            Screen::Dashboard => {
                snapshot.dashboard = self.summary.view();
                snapshot.recommendation = self.recommendations.primary().map(str::to_string);
                snapshot.tone = self.recommendations.tone();
                snapshot.error = self.summary.error().map(str::to_string);
            }
            Screen::FoodHistory => {
                snapshot.food_history = self.food_history.controls().map(|controls| FoodHistorySnapshot {
                    entries: self.food_history.filtered().len(),
                    totals: self.food_history.totals(),
                    controls,
                });
                snapshot.error = self.food_history.error().map(str::to_string);
            }
            Screen::Profile => {
                snapshot.error = self.profile.profile_error().map(str::to_string);
            }
        }
        snapshot
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub user_id: UserId,
    pub user: Option<String>,
    pub screen: Screen,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_history: Option<FoodHistorySnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodHistorySnapshot {
    pub entries: usize,
    pub totals: NutrientTotals,
    pub controls: PageControls,
}
