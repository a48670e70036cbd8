use axum::{extract::State, Json};
use shared::WelcomeResponse;
use std::sync::Arc;

use crate::AppState;

pub async fn welcome(State(state): State<Arc<AppState>>) -> Json<WelcomeResponse> {
    Json(state.welcome_message.clone())
}
