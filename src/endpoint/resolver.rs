//! URL resolution for page requests

use crate::error::{Error, Result};
use crate::settings::EndpointSettings;
use crate::types::QueryParams;
use url::Url;

/// Query parameter carrying the page size
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// Query parameter carrying the 1-based page number
pub const PAGE_NUMBER_PARAM: &str = "pageNum";

/// Query parameter carrying the subject identifier
pub const SUBJECT_PARAM: &str = "uid";

/// A validated endpoint: a non-empty path resolved against an origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    /// Resolve `path` against `origin`
    ///
    /// `path` may be origin-relative ("/v1/replies") or absolute.
    pub fn new(path: &str, origin: &str) -> Result<Self> {
        let path = path.trim();
        if path.is_empty() {
            return Err(Error::missing_field("endpoint.path"));
        }

        let origin = Url::parse(origin.trim())?;
        if origin.cannot_be_a_base() {
            return Err(Error::invalid_value(
                "origin",
                format!("'{origin}' cannot be used as a base URL"),
            ));
        }

        let base = origin.join(path)?;
        Ok(Self { base })
    }

    /// Build an endpoint from persisted settings
    ///
    /// The configured host is not consulted.
    pub fn from_settings(settings: &EndpointSettings) -> Result<Self> {
        Self::new(&settings.path, &settings.origin)
    }

    /// URL for one page request
    pub fn url(&self, params: &QueryParams) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair(PAGE_SIZE_PARAM, &params.page_size.to_string())
            .append_pair(PAGE_NUMBER_PARAM, &params.page_number.to_string())
            .append_pair(SUBJECT_PARAM, &params.subject_id);
        url
    }

    /// Resolved URL without page parameters
    pub fn base(&self) -> &Url {
        &self.base
    }
}

/// Resolve a full request URL from a path, origin and page parameters
pub fn resolve(path: &str, base_origin: &str, params: &QueryParams) -> Result<Url> {
    Endpoint::new(path, base_origin).map(|endpoint| endpoint.url(params))
}
