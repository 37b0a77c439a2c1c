use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::BookingRequest;
use crate::services::leads;
use crate::state::AppState;

// POST /api/contact
#[derive(Serialize)]
pub struct ContactResponse {
    ok: bool,
    id: String,
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(lead): Json<BookingRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let id = leads::intake(&state, &lead).await?;
    Ok(Json(ContactResponse {
        ok: true,
        id: id.to_string(),
    }))
}
