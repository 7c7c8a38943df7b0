// CBT Diary - HTTP Server Module
// REST API over the crisis detector, the journal and session stores and the
// catalogs

mod catalog_handlers;
mod handlers;
mod journal_handlers;
mod payload;
mod pmr_handlers;

pub use handlers::{create_router, health_check};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::crisis::CrisisDetector;
use crate::errors::bind_failed_error;
use crate::journal::JournalRepository;
use crate::sessions::SessionRepository;

/// Shared application state
pub struct DiaryServer {
    /// Crisis detector (read-only tables, no locking)
    detector: CrisisDetector,
    /// Journal storage
    journal: Arc<dyn JournalRepository>,
    /// Relaxation session history
    sessions: Arc<dyn SessionRepository>,
    /// Server configuration
    config: ServerConfig,
    started_at: Instant,
}

impl DiaryServer {
    pub fn new(
        config: ServerConfig,
        detector: CrisisDetector,
        journal: Arc<dyn JournalRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            detector,
            journal,
            sessions,
            config,
            started_at: Instant::now(),
        }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let bind_address = self.config.bind_address.clone();
        let addr: SocketAddr = bind_address
            .parse()
            .with_context(|| bind_failed_error(&bind_address))?;

        let app = create_router(Arc::new(self))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| bind_failed_error(&bind_address))?;

        tracing::info!("CBT diary listening at http://{}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }

    pub fn detector(&self) -> &CrisisDetector {
        &self.detector
    }

    pub fn journal(&self) -> &Arc<dyn JournalRepository> {
        &self.journal
    }

    pub fn sessions(&self) -> &Arc<dyn SessionRepository> {
        &self.sessions
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
