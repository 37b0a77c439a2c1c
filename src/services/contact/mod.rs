pub mod http;

use async_trait::async_trait;

use crate::models::BookingRequest;

/// Fixed path of the contact-intake endpoint.
pub const CONTACT_PATH: &str = "/api/contact";

/// Delivers a booking request to the contact-intake endpoint.
///
/// Returns the HTTP status of the response; any transport-level failure is
/// an `Err`. The response body is never inspected.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn post_lead(&self, request: &BookingRequest) -> anyhow::Result<u16>;
}
