//! Profile screen: editable targets form plus trend charts

use ginger_shared::series::{
    weight_chart, WeightChartPoint, DEFAULT_CALORIES_BY_HOUR_DAYS, DEFAULT_DAILY_TOTALS_DAYS,
    DEFAULT_WEIGHT_DAYS,
};
use ginger_shared::validation::{validate_days, validate_positive};
use ginger_shared::{
    DailyTotalsPoint, HourCaloriesPoint, OnboardingForm, UserId, UserProfile, WeightPoint,
};
use tracing::{info, warn};

use super::{Completion, ErrorPolicy, Resource};
use crate::api::DashboardApi;
use crate::config::StatsConfig;
use crate::error::{ClientError, ClientResult};
use crate::guard::Ticket;

pub const SAVED_NOTICE: &str = "Guardado. Objetivos recalculados.";

/// History windows for the three trend series, in days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesWindows {
    pub weight_days: u32,
    pub daily_totals_days: u32,
    pub calories_by_hour_days: u32,
}

impl Default for SeriesWindows {
    fn default() -> Self {
        Self {
            weight_days: DEFAULT_WEIGHT_DAYS,
            daily_totals_days: DEFAULT_DAILY_TOTALS_DAYS,
            calories_by_hour_days: DEFAULT_CALORIES_BY_HOUR_DAYS,
        }
    }
}

impl From<&StatsConfig> for SeriesWindows {
    fn from(config: &StatsConfig) -> Self {
        Self {
            weight_days: config.weight_days,
            daily_totals_days: config.daily_totals_days,
            calories_by_hour_days: config.calories_by_hour_days,
        }
    }
}

/// A series request is current only for the same user and window
type SeriesKey = (UserId, u32);

pub struct ProfileViewModel {
    user_id: UserId,
    profile: Resource<UserId, UserProfile>,
    form: OnboardingForm,
    notice: Option<String>,
    save_error: Option<String>,
    windows: SeriesWindows,
    weight: Resource<SeriesKey, Vec<WeightPoint>>,
    daily_totals: Resource<SeriesKey, Vec<DailyTotalsPoint>>,
    calories_by_hour: Resource<SeriesKey, Vec<HourCaloriesPoint>>,
}

impl ProfileViewModel {
    pub fn new(user_id: UserId, windows: SeriesWindows) -> Self {
        Self {
            user_id,
            profile: Resource::new(ErrorPolicy::Clear),
            form: OnboardingForm::default(),
            notice: None,
            save_error: None,
            windows,
            weight: Resource::new(ErrorPolicy::Clear),
            daily_totals: Resource::new(ErrorPolicy::Clear),
            calories_by_hour: Resource::new(ErrorPolicy::Clear),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn set_user(&mut self, user_id: UserId) {
        if self.user_id == user_id {
            return;
        }
        self.user_id = user_id;
        self.profile.reset();
        self.weight.reset();
        self.daily_totals.reset();
        self.calories_by_hour.reset();
        self.form = OnboardingForm::default();
        self.notice = None;
        self.save_error = None;
    }

    // ------------------------------------------------------------------
    // Profile and form
    // ------------------------------------------------------------------

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.value()
    }

    pub fn profile_error(&self) -> Option<&str> {
        self.profile.error()
    }

    pub fn begin_profile_load(&mut self) -> Ticket<UserId> {
        self.profile.begin(self.user_id)
    }

    /// Apply a loaded profile and pre-fill the form from it
    pub fn complete_profile_load(
        &mut self,
        ticket: &Ticket<UserId>,
        result: ClientResult<UserProfile>,
    ) -> Completion {
        let completion = self.profile.complete(ticket, result);
        if completion == Completion::Applied {
            if let Some(profile) = self.profile.value() {
                self.form = OnboardingForm::from_profile(profile);
            }
        }
        completion
    }

    pub async fn load_profile(&mut self, api: &dyn DashboardApi) -> Completion {
        let ticket = self.begin_profile_load();
        let result = api.get_user(*ticket.context()).await;
        self.complete_profile_load(&ticket, result)
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    /// Editing the form hides the last save notice
    pub fn form_mut(&mut self) -> &mut OnboardingForm {
        self.notice = None;
        &mut self.form
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    /// Re-submit the form; the service recalculates every target
    pub async fn save(&mut self, api: &dyn DashboardApi) -> ClientResult<UserProfile> {
        self.notice = None;
        self.save_error = None;

        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(errors) => {
                let err = errors
                    .into_iter()
                    .next()
                    .map(ClientError::Validation)
                    .unwrap_or_else(|| ClientError::NotAllowed("save profile".to_string()));
                self.save_error = Some(err.user_message());
                return Err(err);
            }
        };

        match api.submit_onboarding(self.user_id, &request).await {
            Ok(profile) => {
                info!(user_id = self.user_id, "Profile saved, targets recalculated");
                self.form = OnboardingForm::from_profile(&profile);
                self.profile.replace(profile.clone());
                self.notice = Some(SAVED_NOTICE.to_string());
                Ok(profile)
            }
            Err(err) => {
                warn!(user_id = self.user_id, error = %err, "Profile save failed");
                self.save_error = Some(err.user_message());
                Err(err)
            }
        }
    }

    pub fn goal_label(&self) -> Option<&'static str> {
        self.profile.value()?.goal.map(|g| g.label())
    }

    pub fn activity_label(&self) -> Option<&'static str> {
        self.profile.value()?.activity_level.map(|a| a.label())
    }

    // ------------------------------------------------------------------
    // Trend series
    // ------------------------------------------------------------------

    pub fn windows(&self) -> SeriesWindows {
        self.windows
    }

    pub fn weight(&self) -> Option<&[WeightPoint]> {
        self.weight.value().map(Vec::as_slice)
    }

    pub fn weight_error(&self) -> Option<&str> {
        self.weight.error()
    }

    pub fn weight_chart(&self) -> Vec<WeightChartPoint> {
        self.weight().map(weight_chart).unwrap_or_default()
    }

    pub fn daily_totals(&self) -> Option<&[DailyTotalsPoint]> {
        self.daily_totals.value().map(Vec::as_slice)
    }

    pub fn daily_totals_error(&self) -> Option<&str> {
        self.daily_totals.error()
    }

    pub fn calories_by_hour(&self) -> Option<&[HourCaloriesPoint]> {
        self.calories_by_hour.value().map(Vec::as_slice)
    }

    pub fn calories_by_hour_error(&self) -> Option<&str> {
        self.calories_by_hour.error()
    }

    pub fn begin_weight_load(&mut self) -> Ticket<SeriesKey> {
        self.weight.begin((self.user_id, self.windows.weight_days))
    }

    pub fn complete_weight_load(
        &mut self,
        ticket: &Ticket<SeriesKey>,
        result: ClientResult<Vec<WeightPoint>>,
    ) -> Completion {
        self.weight.complete(ticket, result)
    }

    pub async fn load_weight(&mut self, api: &dyn DashboardApi) -> Completion {
        let ticket = self.begin_weight_load();
        let (user_id, days) = *ticket.context();
        let result = api.weight_series(user_id, days).await;
        self.complete_weight_load(&ticket, result)
    }

    pub async fn load_daily_totals(&mut self, api: &dyn DashboardApi) -> Completion {
        let ticket = self
            .daily_totals
            .begin((self.user_id, self.windows.daily_totals_days));
        let (user_id, days) = *ticket.context();
        let result = api.daily_totals(user_id, days).await;
        self.daily_totals.complete(&ticket, result)
    }

    pub async fn load_calories_by_hour(&mut self, api: &dyn DashboardApi) -> Completion {
        let ticket = self
            .calories_by_hour
            .begin((self.user_id, self.windows.calories_by_hour_days));
        let (user_id, days) = *ticket.context();
        let result = api.calories_by_hour(user_id, days).await;
        self.calories_by_hour.complete(&ticket, result)
    }

    /// Load the profile and every series
    pub async fn load_all(&mut self, api: &dyn DashboardApi) {
        self.load_profile(api).await;
        self.load_weight(api).await;
        self.load_daily_totals(api).await;
        self.load_calories_by_hour(api).await;
    }

    /// Change the weight window and reload that series
    pub async fn set_weight_days(&mut self, api: &dyn DashboardApi, days: u32) -> ClientResult<Completion> {
        validate_days(days)?;
        self.windows.weight_days = days;
        Ok(self.load_weight(api).await)
    }

    pub async fn set_daily_totals_days(
        &mut self,
        api: &dyn DashboardApi,
        days: u32,
    ) -> ClientResult<Completion> {
        validate_days(days)?;
        self.windows.daily_totals_days = days;
        Ok(self.load_daily_totals(api).await)
    }

    pub async fn set_calories_by_hour_days(
        &mut self,
        api: &dyn DashboardApi,
        days: u32,
    ) -> ClientResult<Completion> {
        validate_days(days)?;
        self.windows.calories_by_hour_days = days;
        Ok(self.load_calories_by_hour(api).await)
    }

    /// Record a weight measurement, then reload the chart and the profile
    pub async fn add_weight(&mut self, api: &dyn DashboardApi, weight_kg: f64) -> ClientResult<()> {
        validate_positive("weight_kg", weight_kg)?;
        api.add_weight(self.user_id, weight_kg).await.map_err(|err| {
            warn!(user_id = self.user_id, error = %err, "Adding weight failed");
            err
        })?;
        info!(user_id = self.user_id, weight_kg, "Weight recorded");
        self.load_weight(api).await;
        self.load_profile(api).await;
        Ok(())
    }
}
