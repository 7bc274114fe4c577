//! Environment-based configuration.
//!
//! Settings are read once at startup from the process environment, with a
//! `.env` file honored in development.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the engine and its collaborators
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted collections
    pub data_dir: PathBuf,
    /// API key for the insight generator; insight calls are unavailable without it
    pub gemini_api_key: Option<String>,
    /// Gemini model used for insight generation
    pub gemini_model: String,
}

impl Config {
    /// Load configuration from the environment (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data_dir: env::var("NAVEXA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
        }
    }
}
