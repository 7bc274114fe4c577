//! Core engine for the Navexa travel operations app.
//!
//! Turns raw trip and vehicle input into consistent derived figures
//! (expense totals, profit, distance, driver balances, payment status),
//! dashboard aggregates, and maintenance urgency flags, backed by a
//! key-value persistence layer. The view layer and charting live elsewhere;
//! this crate is the math, the rules, and the storage contract.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fleet;
pub mod insights;
pub mod service;
pub mod store;
pub mod trips;

// Re-export commonly used items
pub use config::Config;
pub use error::{AppError, Result};
pub use insights::{GeminiClient, InsightError};
pub use service::FleetOps;
pub use store::{FleetStore, JsonFileStore, KvStore};

/// Install the global tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
