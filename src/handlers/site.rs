use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::models::{PackageOption, SiteContent};
use crate::state::AppState;

// GET /api/site
#[derive(Serialize)]
pub struct SiteResponse {
    #[serde(flatten)]
    content: SiteContent,
    package_options: Vec<PackageOption>,
}

pub async fn get_site(State(state): State<Arc<AppState>>) -> Json<SiteResponse> {
    Json(SiteResponse {
        content: state.site.clone(),
        package_options: state.site.package_options(),
    })
}
