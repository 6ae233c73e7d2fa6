//! Food history filtering, totals and paging controls
//!
//! Filtering and totals work only on the page currently loaded; they never
//! pull in other pages and are not cumulative across pages.

use serde::Serialize;

use crate::models::FoodLogEntry;
use crate::types::Page;

/// Entries whose description contains the query, ignoring case
///
/// A blank query returns every entry unchanged.
pub fn filter_entries<'a>(entries: &'a [FoodLogEntry], query: &str) -> Vec<&'a FoodLogEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.iter().collect();
    }
    entries
        .iter()
        .filter(|e| e.description().to_lowercase().contains(&needle))
        .collect()
}

/// Rounded nutrient sums over a set of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NutrientTotals {
    pub calories: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub sugar_g: i64,
}

impl NutrientTotals {
    /// Sum every quantity, treating missing values as zero, then round
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a FoodLogEntry>,
    {
        let (cal, pro, car, sug) = entries.into_iter().fold((0.0, 0.0, 0.0, 0.0), |acc, e| {
            (
                acc.0 + or_zero(e.calories),
                acc.1 + or_zero(e.protein_g),
                acc.2 + or_zero(e.carbs_g),
                acc.3 + or_zero(e.sugar_g),
            )
        });
        Self {
            calories: cal.round() as i64,
            protein_g: pro.round() as i64,
            carbs_g: car.round() as i64,
            sugar_g: sug.round() as i64,
        }
    }
}

fn or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Previous/next affordances and the page caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub can_previous: bool,
    pub can_next: bool,
    pub caption: String,
    pub record_count: String,
}

impl PageControls {
    pub fn for_page<T>(page: &Page<T>) -> Self {
        Self {
            can_previous: !page.first,
            can_next: !page.last,
            caption: format!("Página {} / {}", page.number + 1, page.total_pages),
            record_count: format!("{} registros", page.total_elements),
        }
    }

    /// Same controls with navigation disabled, used while a page is loading
    pub fn locked(mut self) -> Self {
        self.can_previous = false;
        self.can_next = false;
        self
    }
}
