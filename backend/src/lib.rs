pub mod config;
pub mod handlers;
pub mod startup;

use shared::WelcomeResponse;

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service_name: String,
    pub welcome_message: WelcomeResponse,
}

impl AppState {
    pub fn new(service_name: impl Into<String>) -> Self {
        let service_name = service_name.into();
        let welcome_message = WelcomeResponse::for_service(&service_name);
        AppState {
            service_name,
            welcome_message,
        }
    }
}
