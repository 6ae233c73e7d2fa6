//! Ginger WASM Module
//!
//! Browser bindings for the dashboard's derived-state rules. Structured
//! inputs cross the boundary as JSON strings; anything that fails to parse
//! is treated as absent.

use ginger_shared::{DailySummary, DashboardView, Tone, UserProfile};
use wasm_bindgen::prelude::*;

/// Percentage of a target reached, or nothing when no positive target is set
#[wasm_bindgen]
pub fn progress_percent(consumed: f64, target: Option<f64>) -> Option<u8> {
    ginger_shared::progress_percent(consumed, target)
}

/// Whether the setup flow must run for this profile (`null` means no profile)
#[wasm_bindgen]
pub fn needs_onboarding(profile_json: &str) -> bool {
    let profile = serde_json::from_str::<Option<UserProfile>>(profile_json)
        .ok()
        .flatten();
    ginger_shared::needs_onboarding(profile.as_ref())
}

/// Highest-priority message from a JSON array of strings
#[wasm_bindgen]
pub fn pick_primary_message(messages_json: &str) -> Option<String> {
    let messages: Vec<String> = serde_json::from_str(messages_json).ok()?;
    ginger_shared::pick_primary_message(&messages).map(str::to_string)
}

/// "success", "warn" or "info"
#[wasm_bindgen]
pub fn tone_from_message(message: &str) -> String {
    match ginger_shared::tone_from_message(message) {
        Tone::Success => "success",
        Tone::Warn => "warn",
        Tone::Info => "info",
    }
    .to_string()
}

/// Dashboard widget values for a daily summary, as JSON
#[wasm_bindgen]
pub fn dashboard_view(summary_json: &str) -> Option<String> {
    let summary: DailySummary = serde_json::from_str(summary_json).ok()?;
    serde_json::to_string(&DashboardView::from_summary(&summary)).ok()
}
