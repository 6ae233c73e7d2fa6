//! Onboarding gate and setup form policy
//!
//! A profile is usable only once the service has computed a complete target
//! set for it. Until then every other screen is blocked and the setup form is
//! shown. The form never computes targets itself; it only collects the
//! inputs the service needs to recalculate them.

use validator::Validate;

use crate::models::{ActivityLevel, Goal, GoalPace, Sex, UserProfile};
use crate::types::OnboardingRequest;
use crate::validation::{from_validation_errors, ValidationError};

/// Fields that must be present and non-zero for a profile to be onboarded
pub const REQUIRED_FIELDS: [&str; 5] = [
    "calorie_target_kcal",
    "water_goal_ml",
    "age",
    "height_cm",
    "weight_kg",
];

fn is_set(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0 && !v.is_nan())
}

/// Required fields that are missing or zero on the profile
pub fn missing_fields(profile: &UserProfile) -> Vec<&'static str> {
    let checks = [
        is_set(profile.calorie_target_kcal),
        is_set(profile.water_goal_ml),
        profile.age.is_some_and(|a| a != 0),
        is_set(profile.height_cm),
        is_set(profile.weight_kg),
    ];
    REQUIRED_FIELDS
        .iter()
        .zip(checks)
        .filter(|(_, ok)| !ok)
        .map(|(field, _)| *field)
        .collect()
}

/// Whether setup must run before any other screen is usable
///
/// All-or-nothing: a partially completed profile goes back through setup.
pub fn needs_onboarding(profile: Option<&UserProfile>) -> bool {
    match profile {
        None => true,
        Some(p) => !missing_fields(p).is_empty(),
    }
}

/// Editable onboarding inputs
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingForm {
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub goal_pace: GoalPace,
}

impl Default for OnboardingForm {
    /// Starting values of the first-run setup screen
    fn default() -> Self {
        Self {
            age: 34,
            sex: Sex::Male,
            height_cm: 178.0,
            weight_kg: 78.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            goal_pace: GoalPace::Mild,
        }
    }
}

impl OnboardingForm {
    /// Pre-fill from an existing profile, falling back to neutral values
    /// for anything the profile lacks
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            age: profile.age.unwrap_or(30),
            sex: profile.sex.unwrap_or_default(),
            height_cm: profile.height_cm.unwrap_or(170.0),
            weight_kg: profile.weight_kg.unwrap_or(70.0),
            activity_level: profile.activity_level.unwrap_or_default(),
            goal: profile.goal.unwrap_or_default(),
            goal_pace: profile.goal_pace.unwrap_or_default(),
        }
    }

    /// Submit stays disabled until age, height and weight are positive
    pub fn can_submit(&self) -> bool {
        self.age > 0 && self.height_cm > 0.0 && self.weight_kg > 0.0
    }

    /// Pace only matters when the goal changes weight
    pub fn goal_pace_editable(&self) -> bool {
        self.goal != Goal::Maintain
    }

    /// Build the payload, or the field errors that block submission
    pub fn to_request(&self) -> Result<OnboardingRequest, Vec<ValidationError>> {
        let request = OnboardingRequest {
            age: self.age,
            sex: self.sex,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity_level: self.activity_level,
            goal: self.goal,
            goal_pace: self.goal_pace,
        };
        request
            .validate()
            .map_err(|errors| from_validation_errors(&errors))?;
        Ok(request)
    }
}
