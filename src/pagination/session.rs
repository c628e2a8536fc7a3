//! Pagination session state
//!
//! A `PaginationSession` is owned by whoever drives it and passed by
//! reference to the controller. All transitions happen here; the controller
//! only performs the network call between `begin_*` and `complete`.

use crate::classify::PageResult;
use crate::error::FetchError;
use crate::types::{QueryParams, Record};
use tracing::debug;

/// Where a session is in its request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No query started yet
    #[default]
    Idle,
    /// A page request is in flight
    Loading,
    /// Last request succeeded
    Ready,
    /// Last request (or configuration check) failed
    Failed,
}

/// Whether a request replaces or extends the accumulated records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// First page of a new query
    FirstPage,
    /// Next page of the current query
    NextPage,
}

/// A page request issued by a session, to be completed with its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    generation: u64,
    kind: RequestKind,
    params: QueryParams,
}

impl PageRequest {
    /// Parameters to fetch
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Whether this starts a query or extends one
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// State of one query and its "load more" extensions
#[derive(Debug, Clone)]
pub struct PaginationSession {
    page_size: u32,
    subject_id: Option<String>,
    accumulated: Vec<Record>,
    current_page: u32,
    has_more: bool,
    phase: Phase,
    last_error: Option<FetchError>,
    /// A page of the current query has loaded, so `current_page` is real
    loaded: bool,
    /// Bumped by every new query; older results are discarded on arrival
    generation: u64,
}

impl PaginationSession {
    /// Create an idle session
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            subject_id: None,
            accumulated: Vec::new(),
            current_page: 1,
            has_more: true,
            phase: Phase::Idle,
            last_error: None,
            loaded: false,
            generation: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Observable state
    // ------------------------------------------------------------------------

    /// Records in arrival order
    pub fn records(&self) -> &[Record] {
        &self.accumulated
    }

    /// Number of accumulated records
    pub fn len(&self) -> usize {
        self.accumulated.len()
    }

    /// Whether no records have accumulated
    pub fn is_empty(&self) -> bool {
        self.accumulated.is_empty()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Subject of the current query
    pub fn subject_id(&self) -> Option<&str> {
        self.subject_id.as_deref()
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Human-readable last error
    pub fn last_error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(ToString::to_string)
    }

    /// Page number of the request in flight, if any
    pub fn pending_page(&self) -> Option<u32> {
        match self.phase {
            Phase::Loading if self.loaded => Some(self.current_page + 1),
            Phase::Loading => Some(1),
            _ => None,
        }
    }

    /// Whether `load_more` would issue a request right now
    pub fn can_load_more(&self) -> bool {
        self.loaded && self.has_more && matches!(self.phase, Phase::Ready | Phase::Failed)
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Start a new query: discard everything and request page 1
    ///
    /// Supersedes any request still in flight.
    pub fn begin_query(&mut self, subject_id: &str) -> PageRequest {
        self.generation += 1;
        self.subject_id = Some(subject_id.to_string());
        self.accumulated.clear();
        self.current_page = 1;
        self.has_more = true;
        self.loaded = false;
        self.last_error = None;
        self.phase = Phase::Loading;

        PageRequest {
            generation: self.generation,
            kind: RequestKind::FirstPage,
            params: QueryParams::first_page(subject_id, self.page_size),
        }
    }

    /// Request the page after `current_page`, if allowed
    ///
    /// Returns `None` while loading, when the last page came back short, or
    /// before the current query has loaded its first page.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if !self.can_load_more() {
            return None;
        }
        let subject_id = self.subject_id.clone()?;

        self.last_error = None;
        self.phase = Phase::Loading;

        Some(PageRequest {
            generation: self.generation,
            kind: RequestKind::NextPage,
            params: QueryParams::first_page(subject_id, self.page_size)
                .with_page(self.current_page + 1),
        })
    }

    /// Fail a query before any request is made
    ///
    /// Resets like `begin_query` does, then fails. Any request in flight is
    /// superseded.
    pub fn reject(&mut self, error: FetchError) {
        self.generation += 1;
        self.accumulated.clear();
        self.current_page = 1;
        self.has_more = true;
        self.loaded = false;
        self.last_error = Some(error);
        self.phase = Phase::Failed;
    }

    /// Apply the result of a request
    ///
    /// Returns `false` when the request was superseded and the result dropped.
    pub fn complete(&mut self, request: &PageRequest, result: PageResult) -> bool {
        if request.generation != self.generation || self.phase != Phase::Loading {
            debug!(
                "Dropping stale result for page {} of '{}'",
                request.params.page_number, request.params.subject_id
            );
            return false;
        }

        match result.into_records() {
            Ok(records) => {
                let record_count = records.len();
                match request.kind {
                    RequestKind::FirstPage => self.accumulated = records,
                    RequestKind::NextPage => self.accumulated.extend(records),
                }
                self.current_page = request.params.page_number;
                self.has_more = record_count >= self.page_size as usize;
                self.loaded = true;
                self.last_error = None;
                self.phase = Phase::Ready;
            }
            Err(error) => {
                self.last_error = Some(error);
                self.phase = Phase::Failed;
            }
        }
        true
    }
}
