pub mod contact;
pub mod health;
pub mod site;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::services::contact::CONTACT_PATH;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/site", get(site::get_site))
        .route(CONTACT_PATH, post(contact::submit_contact))
        .with_state(state)
}
