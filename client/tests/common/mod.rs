//! Common test utilities for integration tests
//!
//! `FakeApi` is an in-memory stand-in for the Ginger service. It keeps a
//! tiny amount of server state so that mutations show up in the next
//! summary, and it records every call in order.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use fake::faker::name::en::FirstName;
use fake::Fake;
use ginger_client::error::{ClientError, ClientResult};
use ginger_client::DashboardApi;
use ginger_shared::{
    DailyConsumption, DailySummary, DailyTargets, DailyTotalsPoint, FastingStatus, FoodLogEntry,
    HourCaloriesPoint, OnboardingRequest, Page, PageRequest, RecommendationSet, UserId, UserProfile,
    WeightPoint,
};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

/// A profile that passes the onboarding gate
pub fn complete_profile(id: UserId) -> UserProfile {
    let name: String = FirstName().fake();
    UserProfile {
        age: Some(30),
        height_cm: Some(170.0),
        weight_kg: Some(70.0),
        calorie_target_kcal: Some(2000.0),
        protein_target_g: Some(120.0),
        sugar_limit_g: Some(50.0),
        water_goal_ml: Some(2000.0),
        ..UserProfile::bare(id, name)
    }
}

/// A profile created before onboarding
pub fn bare_profile(id: UserId) -> UserProfile {
    let name: String = FirstName().fake();
    UserProfile::bare(id, name)
}

pub fn food_entry(id: i64, description: &str, calories: Option<f64>, sugar_g: Option<f64>) -> FoodLogEntry {
    FoodLogEntry {
        id,
        description: Some(description.to_string()),
        eaten_at: Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap() + Duration::minutes(id),
        calories,
        protein_g: Some(5.0),
        carbs_g: Some(10.0),
        sugar_g,
        fat_g: None,
    }
}

#[derive(Debug, Default)]
struct UserState {
    water_ml: i64,
    calories: f64,
    fasting: Option<String>,
    fast_ids: i64,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<String>,
    users: Vec<UserProfile>,
    per_user: HashMap<UserId, UserState>,
    food_logs: HashMap<UserId, Vec<FoodLogEntry>>,
    recommendations: HashMap<UserId, Vec<String>>,
    weights: HashMap<UserId, Vec<WeightPoint>>,
    failing: HashSet<&'static str>,
}

pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn new(users: Vec<UserProfile>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                users,
                ..FakeState::default()
            }),
        }
    }

    /// Every call so far, e.g. `"add_water:1:250"` or `"today_summary:1"`
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// Make every call of the named operation fail with a 500
    pub fn fail(&self, operation: &'static str) {
        self.state.lock().unwrap().failing.insert(operation);
    }

    pub fn recover(&self, operation: &'static str) {
        self.state.lock().unwrap().failing.remove(operation);
    }

    pub fn set_food_logs(&self, user_id: UserId, entries: Vec<FoodLogEntry>) {
        self.state.lock().unwrap().food_logs.insert(user_id, entries);
    }

    pub fn set_recommendations(&self, user_id: UserId, messages: &[&str]) {
        self.state
            .lock()
            .unwrap()
            .recommendations
            .insert(user_id, messages.iter().map(|m| m.to_string()).collect());
    }

    pub fn start_fast_directly(&self, user_id: UserId, protocol: &str) {
        let mut state = self.state.lock().unwrap();
        state.per_user.entry(user_id).or_default().fasting = Some(protocol.to_string());
    }

    fn record(&self, call: String, operation: &'static str) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing.contains(operation) {
            return Err(ClientError::Api {
                status: 500,
                message: format!("{} failed", operation),
            });
        }
        Ok(())
    }

    fn profile(&self, user_id: UserId) -> ClientResult<UserProfile> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(ClientError::Api {
                status: 404,
                message: "User not found".to_string(),
            })
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn list_users(&self) -> ClientResult<Vec<UserProfile>> {
        self.record("list_users".to_string(), "list_users")?;
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn get_user(&self, user_id: UserId) -> ClientResult<UserProfile> {
        self.record(format!("get_user:{}", user_id), "get_user")?;
        self.profile(user_id)
    }

    async fn submit_onboarding(
        &self,
        user_id: UserId,
        request: &OnboardingRequest,
    ) -> ClientResult<UserProfile> {
        self.record(format!("submit_onboarding:{}", user_id), "submit_onboarding")?;
        let mut profile = self.profile(user_id)?;
        profile.age = Some(request.age);
        profile.sex = Some(request.sex);
        profile.height_cm = Some(request.height_cm);
        profile.weight_kg = Some(request.weight_kg);
        profile.activity_level = Some(request.activity_level);
        profile.goal = Some(request.goal);
        profile.goal_pace = Some(request.goal_pace);
        profile.calorie_target_kcal = Some((request.weight_kg * 30.0).round());
        profile.water_goal_ml = Some((request.weight_kg * 35.0).round());

        let mut state = self.state.lock().unwrap();
        if let Some(slot) = state.users.iter_mut().find(|u| u.id == user_id) {
            *slot = profile.clone();
        }
        Ok(profile)
    }

    async fn today_summary(&self, user_id: UserId) -> ClientResult<DailySummary> {
        self.record(format!("today_summary:{}", user_id), "today_summary")?;
        let profile = self.profile(user_id)?;
        let state = self.state.lock().unwrap();
        let user = state.per_user.get(&user_id);
        Ok(DailySummary {
            user_id,
            date: today(),
            targets: DailyTargets {
                calorie_target_kcal: profile.calorie_target_kcal,
                protein_target_g: profile.protein_target_g,
                sugar_limit_g: profile.sugar_limit_g,
                water_goal_ml: profile.water_goal_ml,
            },
            consumed: DailyConsumption {
                calories: user.map_or(0.0, |u| u.calories),
                protein_g: 0.0,
                sugar_g: 0.0,
                water_ml: user.map_or(0, |u| u.water_ml),
            },
            fasting: FastingStatus {
                active: user.is_some_and(|u| u.fasting.is_some()),
                protocol: user.and_then(|u| u.fasting.clone()),
                session_id: user.and_then(|u| u.fasting.as_ref().map(|_| u.fast_ids)),
            },
        })
    }

    async fn add_water(&self, user_id: UserId, ml: u32) -> ClientResult<()> {
        self.record(format!("add_water:{}:{}", user_id, ml), "add_water")?;
        let mut state = self.state.lock().unwrap();
        state.per_user.entry(user_id).or_default().water_ml += i64::from(ml);
        Ok(())
    }

    async fn log_meal(&self, user_id: UserId, text: &str) -> ClientResult<()> {
        self.record(format!("log_meal:{}:{}", user_id, text), "log_meal")?;
        let mut state = self.state.lock().unwrap();
        state.per_user.entry(user_id).or_default().calories += 450.0;
        Ok(())
    }

    async fn start_fasting(&self, user_id: UserId, protocol: &str) -> ClientResult<()> {
        self.record(format!("start_fasting:{}:{}", user_id, protocol), "start_fasting")?;
        let mut state = self.state.lock().unwrap();
        let user = state.per_user.entry(user_id).or_default();
        if user.fasting.is_some() {
            return Err(ClientError::Api {
                status: 409,
                message: "User already has an active fasting session".to_string(),
            });
        }
        user.fast_ids += 1;
        user.fasting = Some(protocol.to_string());
        Ok(())
    }

    async fn stop_fasting(&self, user_id: UserId) -> ClientResult<()> {
        self.record(format!("stop_fasting:{}", user_id), "stop_fasting")?;
        let mut state = self.state.lock().unwrap();
        state.per_user.entry(user_id).or_default().fasting = None;
        Ok(())
    }

    async fn food_logs(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> ClientResult<Page<FoodLogEntry>> {
        self.record(
            format!("food_logs:{}:{}:{}", user_id, page.page, page.size),
            "food_logs",
        )?;
        let state = self.state.lock().unwrap();
        let all = state.food_logs.get(&user_id).cloned().unwrap_or_default();
        let total = all.len() as u64;
        let content: Vec<FoodLogEntry> = all
            .into_iter()
            .skip((page.page * page.size) as usize)
            .take(page.size as usize)
            .collect();
        Ok(Page::new(content, page.page, page.size, total)?)
    }

    async fn weight_series(&self, user_id: UserId, days: u32) -> ClientResult<Vec<WeightPoint>> {
        self.record(format!("weight_series:{}:{}", user_id, days), "weight_series")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .weights
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn daily_totals(&self, user_id: UserId, days: u32) -> ClientResult<Vec<DailyTotalsPoint>> {
        self.record(format!("daily_totals:{}:{}", user_id, days), "daily_totals")?;
        Ok(vec![DailyTotalsPoint {
            date: today(),
            calories: 1800.0,
            water_ml: 1500,
        }])
    }

    async fn calories_by_hour(
        &self,
        user_id: UserId,
        days: u32,
    ) -> ClientResult<Vec<HourCaloriesPoint>> {
        self.record(format!("calories_by_hour:{}:{}", user_id, days), "calories_by_hour")?;
        Ok(vec![HourCaloriesPoint {
            hour: 13,
            calories: 700.0,
        }])
    }

    async fn today_recommendations(&self, user_id: UserId) -> ClientResult<RecommendationSet> {
        self.record(format!("today_recommendations:{}", user_id), "today_recommendations")?;
        let messages = self
            .state
            .lock()
            .unwrap()
            .recommendations
            .get(&user_id)
            .cloned()
            .unwrap_or_default();
        Ok(RecommendationSet {
            user_id,
            date: today(),
            messages,
        })
    }

    async fn add_weight(&self, user_id: UserId, weight_kg: f64) -> ClientResult<()> {
        self.record(format!("add_weight:{}:{}", user_id, weight_kg), "add_weight")?;
        let mut state = self.state.lock().unwrap();
        state.weights.entry(user_id).or_default().push(WeightPoint {
            created_at: Utc.with_ymd_and_hms(2026, 3, 2, 7, 30, 0).unwrap(),
            weight_kg,
        });
        if let Some(user) = state.users.iter_mut().find(|u| u.id == user_id) {
            user.weight_kg = Some(weight_kg);
        }
        Ok(())
    }
}
