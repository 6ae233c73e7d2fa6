//! Remote service contract
//!
//! The dashboard core only ever talks to the Ginger service through
//! [`DashboardApi`]. Mutations return a bare acknowledgement; their effect is
//! observed by re-fetching the daily summary.

mod http;

pub use http::HttpDashboardApi;

use async_trait::async_trait;
use ginger_shared::{
    DailySummary, DailyTotalsPoint, FoodLogEntry, HourCaloriesPoint, OnboardingRequest, Page,
    PageRequest, RecommendationSet, UserId, UserProfile, WeightPoint,
};

use crate::error::ClientResult;

#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn list_users(&self) -> ClientResult<Vec<UserProfile>>;

    async fn get_user(&self, user_id: UserId) -> ClientResult<UserProfile>;

    /// Returns the profile with targets recalculated by the service
    async fn submit_onboarding(
        &self,
        user_id: UserId,
        request: &OnboardingRequest,
    ) -> ClientResult<UserProfile>;

    async fn today_summary(&self, user_id: UserId) -> ClientResult<DailySummary>;

    async fn add_water(&self, user_id: UserId, ml: u32) -> ClientResult<()>;

    /// The service extracts nutrients from the text and stores the meal
    async fn log_meal(&self, user_id: UserId, text: &str) -> ClientResult<()>;

    async fn start_fasting(&self, user_id: UserId, protocol: &str) -> ClientResult<()>;

    async fn stop_fasting(&self, user_id: UserId) -> ClientResult<()>;

    async fn food_logs(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> ClientResult<Page<FoodLogEntry>>;

    async fn weight_series(&self, user_id: UserId, days: u32) -> ClientResult<Vec<WeightPoint>>;

    async fn daily_totals(&self, user_id: UserId, days: u32)
        -> ClientResult<Vec<DailyTotalsPoint>>;

    async fn calories_by_hour(
        &self,
        user_id: UserId,
        days: u32,
    ) -> ClientResult<Vec<HourCaloriesPoint>>;

    async fn today_recommendations(&self, user_id: UserId) -> ClientResult<RecommendationSet>;

    async fn add_weight(&self, user_id: UserId, weight_kg: f64) -> ClientResult<()>;
}
