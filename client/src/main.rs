//! Ginger Dashboard
//!
//! Loads the users from the Ginger service, opens a screen for the first
//! one and prints what that screen shows as JSON.
//!
//! Usage: `ginger-dashboard [dashboard|food-history|profile]`

use anyhow::Result;
use ginger_client::{config, HttpDashboardApi, Screen, Session};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::ClientConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::ClientConfig::is_production() { "production" } else { "development" },
        base_url = %config.api.base_url,
        "Starting Ginger dashboard"
    );

    let screen = parse_screen(std::env::args().nth(1).as_deref())?;
    let api = HttpDashboardApi::new(&config.api)?;

    let mut session = match Session::bootstrap(&api, config).await {
        Ok(session) => session,
        Err(err) => {
            error!(error = %err, "Could not start a session");
            println!("{}", serde_json::json!({ "error": err.user_message() }));
            return Ok(());
        }
    };

    let shown = session.open(&api, screen).await;
    info!(user_id = session.active_user_id(), screen = ?shown, "Screen loaded");

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}

fn parse_screen(arg: Option<&str>) -> Result<Screen> {
    match arg {
        None | Some("dashboard") => Ok(Screen::Dashboard),
        Some("food-history") => Ok(Screen::FoodHistory),
        Some("profile") => Ok(Screen::Profile),
        Some(other) => anyhow::bail!("Unknown screen '{}', expected dashboard, food-history or profile", other),
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::ClientConfig::is_production() {
            "ginger_client=info".into()
        } else {
            "ginger_client=debug,reqwest=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::ClientConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}
