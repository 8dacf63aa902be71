//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::api::render::Responder;
use crate::application::services::RedirectResolver;
use crate::domain::repositories::LinkRepository;

/// Process-wide handles built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RedirectResolver>,
    pub responder: Arc<Responder>,
    /// Store handle, used directly by health checks.
    pub links: Arc<dyn LinkRepository>,
}

impl AppState {
    /// Wires a resolver over `links`.
    pub fn new(links: Arc<dyn LinkRepository>, responder: Responder, default_url: &str) -> Self {
        Self {
            resolver: Arc::new(RedirectResolver::new(links.clone(), default_url)),
            responder: Arc::new(responder),
            links,
        }
    }
}
