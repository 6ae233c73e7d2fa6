//! Dashboard view composed from one daily summary
//!
//! Every dashboard widget reads from this one value so that progress bars,
//! stat tiles and fasting controls always agree with each other.

use chrono::NaiveDate;
use serde::Serialize;

use crate::fasting::FastingView;
use crate::models::{DailySummary, UserId};
use crate::progress::progress_percent;

/// A consumed-versus-target metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricView {
    /// e.g. `"640 / 2000"`, or just `"640"` when no target is set
    pub text: String,
    /// Bar value; `None` hides the bar
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub calories: MetricView,
    pub water: MetricView,
    pub protein_text: String,
    pub sugar_text: String,
    pub water_text: String,
    pub fasting: FastingView,
}

impl DashboardView {
    pub fn from_summary(summary: &DailySummary) -> Self {
        let targets = &summary.targets;
        let consumed = &summary.consumed;

        let calories_text = match positive(targets.calorie_target_kcal) {
            Some(t) => format!("{} / {}", consumed.calories.round() as i64, t.round() as i64),
            None => format!("{}", consumed.calories.round() as i64),
        };
        let water_text = match positive(targets.water_goal_ml) {
            Some(t) => format!("{} / {} ml", consumed.water_ml, t.round() as i64),
            None => format!("{} ml", consumed.water_ml),
        };

        Self {
            user_id: summary.user_id,
            date: summary.date,
            calories: MetricView {
                text: calories_text,
                progress: progress_percent(consumed.calories, targets.calorie_target_kcal),
            },
            water: MetricView {
                text: water_text,
                progress: progress_percent(consumed.water_ml as f64, targets.water_goal_ml),
            },
            protein_text: format!("{} g", consumed.protein_g.round() as i64),
            sugar_text: format!("{} g", consumed.sugar_g.round() as i64),
            water_text: format!("{} ml", consumed.water_ml),
            fasting: FastingView::from_summary(summary),
        }
    }
}

fn positive(target: Option<f64>) -> Option<f64> {
    target.filter(|t| *t > 0.0)
}
