use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Origin the booking form posts to.
    pub contact_base_url: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_phone_number: String,
    /// Where lead notifications go. Empty disables SMS (leads are only logged).
    pub owner_phone: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);
        Self {
            port,
            contact_base_url: env::var("CONTACT_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{port}")),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            twilio_phone_number: env::var("TWILIO_PHONE_NUMBER").unwrap_or_default(),
            owner_phone: env::var("OWNER_PHONE").unwrap_or_default(),
        }
    }

    pub fn sms_enabled(&self) -> bool {
        !self.owner_phone.is_empty()
    }
}
