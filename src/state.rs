use crate::config::AppConfig;
use crate::store::SiteStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn SiteStore>,
}

impl AppState {
    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn SiteStore>) -> Self {
        Self { config, store }
    }

    #[cfg(test)]
    pub fn fake(store: Arc<crate::testing::MemoryStore>) -> Self {
        Self {
            config: Arc::new(AppConfig::for_tests()),
            store,
        }
    }
}
