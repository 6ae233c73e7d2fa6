//! Trend series shown on the profile screen

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::WeightPoint;

/// Default history window for the weight chart
pub const DEFAULT_WEIGHT_DAYS: u32 = 90;
/// Default history window for daily calorie/water totals
pub const DEFAULT_DAILY_TOTALS_DAYS: u32 = 30;
/// Default history window for calories by hour of day
pub const DEFAULT_CALORIES_BY_HOUR_DAYS: u32 = 14;

/// One point of the weight chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightChartPoint {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// Weight chart points, one decimal place, in arrival order
pub fn weight_chart(points: &[WeightPoint]) -> Vec<WeightChartPoint> {
    points
        .iter()
        .map(|p| WeightChartPoint {
            date: p.created_at.date_naive(),
            weight_kg: (p.weight_kg * 10.0).round() / 10.0,
        })
        .collect()
}
