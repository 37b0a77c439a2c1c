use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{format_price, BookingRequest, Field, SiteContent};
use crate::services::validation::{self, ValidationErrors};
use crate::state::AppState;

/// Client-side rules plus a check that the package is one we actually sell.
pub fn validate_lead(site: &SiteContent, lead: &BookingRequest) -> ValidationErrors {
    let mut errors = validation::validate(lead);
    if errors.get(Field::Package).is_none() && site.find_package(lead.package.trim()).is_none() {
        errors.insert(Field::Package, validation::PACKAGE_REQUIRED);
    }
    errors
}

pub fn owner_notification(
    site: &SiteContent,
    id: &Uuid,
    lead: &BookingRequest,
    received_at: DateTime<Utc>,
) -> String {
    let package = match site.find_package(lead.package.trim()) {
        Some(tier) => format!("{} ({})", tier.title, format_price(tier.price)),
        None => lead.package.trim().to_string(),
    };
    format!(
        "New booking request {}\nName: {}\nPhone: {}\nService: {}\nMessage: {}\nReceived: {}",
        short_id(id),
        lead.name.trim(),
        lead.phone.trim(),
        package,
        lead.message.trim(),
        received_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

/// Validates a lead and forwards it to the owner. Returns the lead id.
pub async fn intake(state: &AppState, lead: &BookingRequest) -> Result<Uuid, AppError> {
    let errors = validate_lead(&state.site, lead);
    if !errors.is_empty() {
        tracing::info!(invalid_fields = errors.len(), "rejected booking request");
        return Err(AppError::Validation(errors));
    }

    let id = Uuid::new_v4();
    let body = owner_notification(&state.site, &id, lead, Utc::now());

    tracing::info!(lead_id = %id, package = %lead.package, "booking request received");

    state
        .messaging
        .send_message(&state.config.owner_phone, &body)
        .await
        .map_err(|e| {
            tracing::error!(lead_id = %id, error = %e, "failed to notify owner");
            AppError::Messaging(format!("{e:#}"))
        })?;

    Ok(id)
}
