//! Data models received from the Ginger service
//!
//! Every model is an immutable snapshot of what the service returned. Field
//! names follow the service's camelCase JSON.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Service-side user identifier
pub type UserId = i64;

/// Biological sex used by the service when recalculating targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Hombre",
            Sex::Female => "Mujer",
        }
    }
}

/// Weekly activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    /// Little movement
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    #[default]
    Moderate,
    /// 6-7 days/week
    High,
    /// Physical job plus training
    VeryHigh,
}

impl ActivityLevel {
    /// Short label shown on the profile screen
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentario",
            ActivityLevel::Light => "Ligera",
            ActivityLevel::Moderate => "Moderada",
            ActivityLevel::High => "Alta",
            ActivityLevel::VeryHigh => "Muy alta",
        }
    }

    /// Longer description shown next to the selector
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentario (poco movimiento)",
            ActivityLevel::Light => "Ligera (1–3 días/sem)",
            ActivityLevel::Moderate => "Moderada (3–5 días/sem)",
            ActivityLevel::High => "Alta (6–7 días/sem)",
            ActivityLevel::VeryHigh => "Muy alta (trabajo físico + entreno)",
        }
    }
}

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "Adelgazar",
            Goal::Maintain => "Mantener",
            Goal::Gain => "Ganar peso",
        }
    }
}

/// How fast the weight goal should be approached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalPace {
    #[default]
    Mild,
    Medium,
    Aggressive,
}

impl GoalPace {
    pub fn label(&self) -> &'static str {
        match self {
            GoalPace::Mild => "Suave",
            GoalPace::Medium => "Medio",
            GoalPace::Aggressive => "Agresivo",
        }
    }
}

/// User profile with optional physiological data and service-computed targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub goal_pace: Option<GoalPace>,
    #[serde(default)]
    pub goal_mode: Option<String>,
    #[serde(default)]
    pub calorie_target_kcal: Option<f64>,
    #[serde(default)]
    pub protein_target_g: Option<f64>,
    #[serde(default)]
    pub sugar_limit_g: Option<f64>,
    #[serde(default)]
    pub water_goal_ml: Option<f64>,
    #[serde(default)]
    pub fasting_default_hours: Option<f64>,
}

impl UserProfile {
    /// A profile that only carries identity, as created before onboarding
    pub fn bare(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age: None,
            height_cm: None,
            weight_kg: None,
            sex: None,
            activity_level: None,
            goal: None,
            goal_pace: None,
            goal_mode: None,
            calorie_target_kcal: None,
            protein_target_g: None,
            sugar_limit_g: None,
            water_goal_ml: None,
            fasting_default_hours: None,
        }
    }

    /// Label used by user pickers
    pub fn display_name(&self) -> String {
        format!("{} (id {})", self.name, self.id)
    }
}

/// Daily goals for one user; `None` means no goal set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTargets {
    pub calorie_target_kcal: Option<f64>,
    pub protein_target_g: Option<f64>,
    pub sugar_limit_g: Option<f64>,
    pub water_goal_ml: Option<f64>,
}

/// Accumulated actuals for the current day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyConsumption {
    pub calories: f64,
    pub protein_g: f64,
    pub sugar_g: f64,
    pub water_ml: i64,
}

/// Fasting flags as embedded in the daily summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FastingStatus {
    #[serde(rename = "fastingActive")]
    pub active: bool,
    #[serde(rename = "fastingProtocol", default)]
    pub protocol: Option<String>,
    #[serde(rename = "activeFastingId", default)]
    pub session_id: Option<i64>,
}

/// Today's targets, consumption and fasting state for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub targets: DailyTargets,
    pub consumed: DailyConsumption,
    #[serde(flatten)]
    pub fasting: FastingStatus,
}

/// One logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogEntry {
    pub id: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub eaten_at: DateTime<Utc>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein_g: Option<f64>,
    #[serde(default)]
    pub carbs_g: Option<f64>,
    #[serde(default)]
    pub sugar_g: Option<f64>,
    #[serde(default)]
    pub fat_g: Option<f64>,
}

impl FoodLogEntry {
    /// Description text, empty when the service sent none
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Recommendation messages generated by the service for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub user_id: UserId,
    pub date: NaiveDate,
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Historical weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightPoint {
    pub created_at: DateTime<Utc>,
    pub weight_kg: f64,
}

/// Calories and water for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotalsPoint {
    pub date: NaiveDate,
    pub calories: f64,
    pub water_ml: i64,
}

/// Calories eaten in one hour-of-day bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourCaloriesPoint {
    pub hour: u8,
    pub calories: f64,
}
