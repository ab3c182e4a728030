use crate::config::Defaults;
use std::sync::Arc;

/// État partagé entre les handlers (lecture seule).
#[derive(Debug, Clone)]
pub struct AppState {
    pub defaults: Arc<Defaults>,
    pub version: &'static str,
}

impl AppState {
    pub fn new(defaults: Defaults) -> Self {
        Self {
            defaults: Arc::new(defaults),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
