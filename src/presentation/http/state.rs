// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// Shared by every handler through the `Extension` layer.
#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
}

impl HttpState {
    pub fn new(services: ApplicationServices) -> Self {
        Self {
            services: Arc::new(services),
        }
    }
}
