//! Ginger Dashboard Client Library
//!
//! Service client, stale-response guards, view models and the session root
//! the dashboard screens are driven by.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;
pub mod viewmodels;

pub use api::{DashboardApi, HttpDashboardApi};
pub use error::{ClientError, ClientResult};
pub use session::{Screen, Session};
