//! Service settings loaded from the environment

/// Runtime settings. Every value has a default suitable for local runs.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub scores_path: String,
}

impl Settings {
    /// Read PORT and SCORES_PATH; broken values fall back to defaults
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let scores_path = std::env::var("SCORES_PATH")
            .unwrap_or_else(|_| "data/scores.json".to_string());

        Self { port, scores_path }
    }
}
