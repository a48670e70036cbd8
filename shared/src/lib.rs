use serde::{Deserialize, Serialize};

/// Health check response from `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        HealthResponse {
            status: "ok".to_string(),
        }
    }
}

/// Welcome message returned from `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl WelcomeResponse {
    /// Builds the greeting for a named service, e.g. `"Rust Axum"` becomes
    /// `"Welcome from the Rust Axum service!"`.
    pub fn for_service(service_name: &str) -> Self {
        WelcomeResponse {
            message: format!("Welcome from the {} service!", service_name),
        }
    }
}
