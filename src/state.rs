use std::sync::Arc;

use sqlx::PgPool;

use crate::ai::{AidAssistant, build_assistant};
use crate::config::ai::AiConfig;
use crate::config::cors::CorsConfig;
use crate::config::dashboard::DashboardConfig;
use crate::config::rate_limit::RateLimitConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub dashboard_config: DashboardConfig,
    pub assistant: Arc<dyn AidAssistant>,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: aidconnect_db::init_db_pool().await,
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
        dashboard_config: DashboardConfig::from_env(),
        assistant: build_assistant(&AiConfig::from_env()),
    }
}
