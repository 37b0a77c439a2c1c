use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crystal_clear::config::AppConfig;
use crystal_clear::handlers;
use crystal_clear::models::SiteContent;
use crystal_clear::services::messaging::twilio::TwilioSmsProvider;
use crystal_clear::services::messaging::{LogOnlyMessaging, MessagingProvider};
use crystal_clear::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let messaging: Box<dyn MessagingProvider> = if config.sms_enabled() {
        anyhow::ensure!(
            !config.twilio_account_sid.is_empty() && !config.twilio_auth_token.is_empty(),
            "TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN must be set when OWNER_PHONE is set"
        );
        tracing::info!(owner = %config.owner_phone, "lead notifications via Twilio SMS");
        Box::new(TwilioSmsProvider::new(
            config.twilio_account_sid.clone(),
            config.twilio_auth_token.clone(),
            config.twilio_phone_number.clone(),
        ))
    } else {
        tracing::warn!("OWNER_PHONE not set, leads will only be logged");
        Box::new(LogOnlyMessaging)
    };

    let site = SiteContent::crystal_clear();
    tracing::info!(
        services = site.services.len(),
        testimonials = site.testimonials.len(),
        "loaded site content for {}",
        site.business_name
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        site,
        messaging,
    });

    let app = handlers::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}, form posts to {}", config.contact_base_url);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
