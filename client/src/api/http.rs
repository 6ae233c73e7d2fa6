//! HTTP implementation of the service contract

use std::time::Duration;

use async_trait::async_trait;
use ginger_shared::{
    AddWaterRequest, AddWeightRequest, ApiErrorBody, DailySummary, DailyTotalsPoint, FoodLogEntry,
    HourCaloriesPoint, LogMealRequest, OnboardingRequest, Page, PageRequest, RecommendationSet,
    StartFastingRequest, UserId, UserProfile, WeightPoint,
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::DashboardApi;
use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};

/// Ginger service client over HTTP/JSON
#[derive(Clone)]
pub struct HttpDashboardApi {
    client: Client,
    base_url: String,
}

impl HttpDashboardApi {
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::Http)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client pointed at an arbitrary base URL with the default timeout
    #[doc(hidden)]
    pub fn new_with_base_url(base_url: &str) -> ClientResult<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 30,
        })
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> ClientResult<T> {
        let url = self.build_url(path);
        debug!(method = "GET", path, "Sending request");

        let response = self.client.get(&url).query(query).send().await?;
        let response = self.handle_response_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::invalid_response(format!("Failed to parse JSON response: {}", e)))
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> ClientResult<Response> {
        let url = self.build_url(path);
        debug!(method = "POST", path, "Sending request");

        let response = self.client.post(&url).query(query).json(body).send().await?;
        self.handle_response_status(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.post(path, &[], body).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::invalid_response(format!("Failed to parse JSON response: {}", e)))
    }

    /// POST whose response body is only an acknowledgement
    async fn post_ack<B: Serialize + ?Sized>(&self, path: &str, query: &[(&str, String)], body: &B) -> ClientResult<()> {
        self.post(path, query, body).await.map(|_| ())
    }

    /// Handle response status codes and convert to errors
    async fn handle_response_status(&self, response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| match status {
                StatusCode::NOT_FOUND => "Resource not found".to_string(),
                _ => body.clone(),
            });

        warn!(status = status.as_u16(), message = %message, "Service returned an error");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn user_query(user_id: UserId) -> (&'static str, String) {
    ("userId", user_id.to_string())
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn list_users(&self) -> ClientResult<Vec<UserProfile>> {
        self.get_json("/users", &[]).await
    }

    async fn get_user(&self, user_id: UserId) -> ClientResult<UserProfile> {
        self.get_json(&format!("/users/{}", user_id), &[]).await
    }

    async fn submit_onboarding(
        &self,
        user_id: UserId,
        request: &OnboardingRequest,
    ) -> ClientResult<UserProfile> {
        self.post_json(&format!("/users/{}/onboarding", user_id), request).await
    }

    async fn today_summary(&self, user_id: UserId) -> ClientResult<DailySummary> {
        self.get_json("/summary/today", &[user_query(user_id)]).await
    }

    async fn add_water(&self, user_id: UserId, ml: u32) -> ClientResult<()> {
        self.post_ack("/water", &[], &AddWaterRequest { user_id, ml }).await
    }

    async fn log_meal(&self, user_id: UserId, text: &str) -> ClientResult<()> {
        let body = LogMealRequest {
            user_id,
            text: text.to_string(),
        };
        self.post_ack("/ai/log-meal", &[], &body).await
    }

    async fn start_fasting(&self, user_id: UserId, protocol: &str) -> ClientResult<()> {
        let body = StartFastingRequest {
            user_id,
            protocol: protocol.to_string(),
        };
        self.post_ack("/fasting/start", &[], &body).await
    }

    async fn stop_fasting(&self, user_id: UserId) -> ClientResult<()> {
        self.post_ack("/fasting/stop", &[user_query(user_id)], &serde_json::json!({}))
            .await
    }

    async fn food_logs(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> ClientResult<Page<FoodLogEntry>> {
        let query = [
            user_query(user_id),
            ("page", page.page.to_string()),
            ("size", page.size.to_string()),
        ];
        let page: Page<FoodLogEntry> = self.get_json("/food-logs", &query).await?;
        page.validate()?;
        Ok(page)
    }

    async fn weight_series(&self, user_id: UserId, days: u32) -> ClientResult<Vec<WeightPoint>> {
        self.get_json("/stats/weight", &[user_query(user_id), ("days", days.to_string())])
            .await
    }

    async fn daily_totals(&self, user_id: UserId, days: u32) -> ClientResult<Vec<DailyTotalsPoint>> {
        self.get_json("/stats/daily-totals", &[user_query(user_id), ("days", days.to_string())])
            .await
    }

    async fn calories_by_hour(
        &self,
        user_id: UserId,
        days: u32,
    ) -> ClientResult<Vec<HourCaloriesPoint>> {
        self.get_json(
            "/stats/calories-by-hour",
            &[user_query(user_id), ("days", days.to_string())],
        )
        .await
    }

    async fn today_recommendations(&self, user_id: UserId) -> ClientResult<RecommendationSet> {
        self.get_json("/recommendations/today", &[user_query(user_id)]).await
    }

    async fn add_weight(&self, user_id: UserId, weight_kg: f64) -> ClientResult<()> {
        self.post_ack("/weight", &[], &AddWeightRequest { user_id, weight_kg }).await
    }
}
