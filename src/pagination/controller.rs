//! Pagination controller
//!
//! Drives a `PaginationSession` through `Idle -> Loading -> {Ready, Failed}`
//! using a `PageFetcher`. Two entry points: start a query, load the next page.

use super::session::{PageRequest, PaginationSession, Phase};
use crate::error::FetchError;
use crate::fetch::PageFetcher;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Orchestrates page fetches for sessions
#[derive(Debug)]
pub struct PaginationController<F> {
    fetcher: F,
}

impl<F: PageFetcher> PaginationController<F> {
    /// Create a controller around a fetcher
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Get the fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Start a new query for `subject_id`, replacing the session's records
    ///
    /// A missing subject or an unresolvable endpoint fails the session
    /// without a network call.
    pub async fn start_query(&self, session: &mut PaginationSession, subject_id: &str) -> Phase {
        let Some(request) = self.begin_query(session, subject_id) else {
            return session.phase();
        };
        let result = self.fetcher.fetch_page(request.params()).await;
        if session.complete(&request, result) {
            self.log_outcome(session);
        }
        session.phase()
    }

    /// Load the page after the current one and append its records
    ///
    /// A no-op while a request is in flight or once the last page came back
    /// short. After a failure, calling again re-requests the same page.
    pub async fn load_more(&self, session: &mut PaginationSession) -> Phase {
        let Some(request) = self.begin_load_more(session) else {
            return session.phase();
        };
        let result = self.fetcher.fetch_page(request.params()).await;
        if session.complete(&request, result) {
            self.log_outcome(session);
        }
        session.phase()
    }

    /// `start_query` for a session shared between tasks
    ///
    /// The lock is released during the network call. A later `start_query`
    /// supersedes this one and its result is dropped.
    pub async fn start_query_shared(
        &self,
        session: &Mutex<PaginationSession>,
        subject_id: &str,
    ) -> Phase {
        let request = {
            let mut guard = session.lock().await;
            match self.begin_query(&mut guard, subject_id) {
                Some(request) => request,
                None => return guard.phase(),
            }
        };
        self.finish_shared(session, request).await
    }

    /// `load_more` for a session shared between tasks
    ///
    /// Concurrent calls while a request is in flight are ignored, not queued.
    pub async fn load_more_shared(&self, session: &Mutex<PaginationSession>) -> Phase {
        let request = {
            let mut guard = session.lock().await;
            match self.begin_load_more(&mut guard) {
                Some(request) => request,
                None => return guard.phase(),
            }
        };
        self.finish_shared(session, request).await
    }

    async fn finish_shared(
        &self,
        session: &Mutex<PaginationSession>,
        request: PageRequest,
    ) -> Phase {
        let result = self.fetcher.fetch_page(request.params()).await;
        let mut guard = session.lock().await;
        if guard.complete(&request, result) {
            self.log_outcome(&guard);
        }
        guard.phase()
    }

    fn begin_query(
        &self,
        session: &mut PaginationSession,
        subject_id: &str,
    ) -> Option<PageRequest> {
        if let Err(e) = self.fetcher.check_ready() {
            debug!("Query rejected: {}", e);
            session.reject(FetchError::configuration(e.to_string()));
            return None;
        }

        let subject_id = subject_id.trim();
        if subject_id.is_empty() {
            debug!("Query rejected: empty subject id");
            session.reject(FetchError::configuration("Please enter a user ID."));
            return None;
        }

        info!("Starting query for '{}'", subject_id);
        Some(session.begin_query(subject_id))
    }

    fn begin_load_more(&self, session: &mut PaginationSession) -> Option<PageRequest> {
        let request = session.begin_load_more();
        match &request {
            Some(request) => debug!("Loading page {}", request.params().page_number),
            None => debug!(
                "Ignoring load more (phase {:?}, has_more {})",
                session.phase(),
                session.has_more()
            ),
        }
        request
    }

    fn log_outcome(&self, session: &PaginationSession) {
        match session.last_error() {
            Some(error) => info!(
                "Request for '{}' failed: {}",
                session.subject_id().unwrap_or_default(),
                error
            ),
            None => info!(
                "Page {} loaded, {} records total, has_more {}",
                session.current_page(),
                session.len(),
                session.has_more()
            ),
        }
    }
}
