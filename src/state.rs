use std::sync::Arc;

use crate::modules::movies::provider::MovieProvider;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MovieProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self { provider }
    }
}
