//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Process-wide state: the link service over the store handle, plus the
/// configured base URL override. Initialized once at startup.
#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkService>,
    /// `BASE_URL` override for short-URL construction; when `None` the
    /// scheme and host come from the request.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(links: Arc<LinkService>, base_url: Option<String>) -> Self {
        Self { links, base_url }
    }
}
