//! Ginger Shared Library
//!
//! This crate contains the data model received from the Ginger service and
//! the pure derived-state logic the dashboard screens render from. It is
//! shared by the client view models and the WASM bindings.

pub mod errors;
pub mod fasting;
pub mod food_log;
pub mod models;
pub mod onboarding;
pub mod progress;
pub mod recommendations;
pub mod series;
pub mod summary;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use fasting::{FastingState, FastingView};
pub use food_log::{filter_entries, NutrientTotals, PageControls};
pub use models::*;
pub use onboarding::{needs_onboarding, OnboardingForm};
pub use progress::progress_percent;
pub use recommendations::{pick_primary_message, tone_from_message, BannerState, Tone, Topic};
pub use summary::DashboardView;
pub use types::*;
