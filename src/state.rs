use crate::config::AppConfig;
use crate::services::courts::BookingSite;
use crate::services::messaging::MessagingProvider;
use crate::services::router::IntentRouter;

pub struct AppState {
    pub config: AppConfig,
    pub router: IntentRouter,
    pub messaging: Box<dyn MessagingProvider>,
    pub site: Box<dyn BookingSite>,
}
