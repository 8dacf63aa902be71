#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use link_redirect::api::render::{Responder, ResponseMode};
use link_redirect::domain::entities::LinkRecord;
use link_redirect::domain::repositories::{LinkRepository, StoreError};
use link_redirect::domain::resolution::CacheLifetimes;
use link_redirect::domain::slug::Slug;
use link_redirect::routes::app_router;
use link_redirect::state::AppState;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub const DEFAULT_URL: &str = "https://cogiflow.ai";
pub const HEADER_PREFIX: &str = "Cogiflow";

/// Link store kept in memory, with switches for failure scenarios.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    records: Mutex<Vec<LinkRecord>>,
    calls: AtomicUsize,
    fail_lookup: AtomicBool,
    fail_increment: AtomicBool,
    fail_ping: AtomicBool,
    panic_on_lookup: AtomicBool,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<LinkRecord>) -> Self {
        let repo = Self::new();
        *repo.records.lock().unwrap() = records;
        repo
    }

    pub fn clicks(&self, id: i64) -> Option<i64> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.clicks)
    }

    /// Number of store operations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail_lookups(&self) {
        self.fail_lookup.store(true, Ordering::SeqCst);
    }

    pub fn fail_increments(&self) {
        self.fail_increment.store(true, Ordering::SeqCst);
    }

    pub fn fail_pings(&self) {
        self.fail_ping.store(true, Ordering::SeqCst);
    }

    pub fn panic_on_lookups(&self) {
        self.panic_on_lookup.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_active_by_slug(&self, slug: &Slug) -> Result<Option<LinkRecord>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.panic_on_lookup.load(Ordering::SeqCst) {
            panic!("lookup exploded");
        }
        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }

        let mut matches: Vec<LinkRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.active && r.slug == slug.as_str())
            .cloned()
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(StoreError::Ambiguous {
                slug: slug.to_string(),
                rows: n,
            }),
        }
    }

    async fn increment_clicks(&self, id: i64) -> Result<i64, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_increment.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("write timeout".to_string()));
        }

        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::RecordMissing { id })?;
        record.clicks += 1;
        Ok(record.clicks)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.fail_ping.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

pub fn create_test_state(repo: Arc<InMemoryLinkRepository>, mode: ResponseMode) -> AppState {
    let responder = Responder::new(mode, DEFAULT_URL, HEADER_PREFIX, CacheLifetimes::default())
        .expect("test responder is valid");
    AppState::new(repo, responder, DEFAULT_URL)
}

pub fn create_test_server(repo: Arc<InMemoryLinkRepository>, mode: ResponseMode) -> TestServer {
    TestServer::new(app_router(create_test_state(repo, mode))).unwrap()
}

/// The record most scenarios start from: `tool` with a valid primary URL.
pub fn tool_record() -> LinkRecord {
    LinkRecord::new(
        7,
        "tool",
        Some("https://partner.example/x".to_string()),
        None,
    )
    .with_clicks(5)
}

pub async fn insert_link(
    pool: &sqlx::PgPool,
    slug: &str,
    redirect_url: Option<&str>,
    fallback_url: Option<&str>,
    active: bool,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (slug, redirect_url, fallback_url, active) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(slug)
    .bind(redirect_url)
    .bind(fallback_url)
    .bind(active)
    .fetch_one(pool)
    .await
    .unwrap()
}
