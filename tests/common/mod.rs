#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use snaplink::AppState;
use snaplink::application::services::LinkService;
use snaplink::domain::entities::{Link, NewLink};
use snaplink::domain::repositories::LinkRepository;
use snaplink::error::AppError;
use snaplink::routes::app_router;

/// In-memory link store with the same create-conflict semantics as the
/// PostgreSQL repository: inserting an existing code fails with
/// `AppError::Conflict`, and the insert is atomic under the map lock.
pub struct InMemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn insert_link(&self, code: &str, long_url: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.links.lock().unwrap().insert(
            code.to_string(),
            Link::new(id, code.to_string(), long_url.to_string(), Utc::now()),
        );
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": new_link.code }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let link = Link::new(id, new_link.code.clone(), new_link.long_url, Utc::now());
        links.insert(new_link.code, link.clone());

        Ok(link)
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.lock().unwrap().contains_key(code))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.lock().unwrap().get(code).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Builds application state over a fresh in-memory store.
pub fn test_state(base_url: Option<&str>) -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let links = Arc::new(LinkService::new(repository.clone()));

    (
        AppState::new(links, base_url.map(str::to_string)),
        repository,
    )
}

/// Builds the full application router over a fresh in-memory store.
pub fn test_app(base_url: Option<&str>) -> (Router, Arc<InMemoryLinkRepository>) {
    let (state, repository) = test_state(base_url);
    (app_router(state), repository)
}
