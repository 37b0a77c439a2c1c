use anyhow::Context;
use async_trait::async_trait;

use super::{ContactTransport, CONTACT_PATH};
use crate::models::BookingRequest;

pub struct HttpContactTransport {
    url: String,
    client: reqwest::Client,
}

impl HttpContactTransport {
    /// `base_url` is the site origin, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            url: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn post_lead(&self, request: &BookingRequest) -> anyhow::Result<u16> {
        // .json() sets Content-Type: application/json
        let resp = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .context("failed to reach contact endpoint")?;

        Ok(resp.status().as_u16())
    }
}
