use crate::config::AppConfig;
use crate::models::SiteContent;
use crate::services::messaging::MessagingProvider;

pub struct AppState {
    pub config: AppConfig,
    pub site: SiteContent,
    pub messaging: Box<dyn MessagingProvider>,
}
