//! Page outcome types

use crate::error::FetchError;
use crate::types::Record;

/// Outcome of one page fetch
///
/// Exactly one variant is produced per request; fetching never fails in any
/// other way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult {
    /// Well-formed envelope with a records list
    Success {
        records: Vec<Record>,
        record_count: usize,
    },

    /// Non-JSON body, markup in place of data, or a record of the wrong shape
    MalformedPayload {
        reason: String,
        /// Body was a markup document, usually a proxy or path misconfiguration
        markup: bool,
    },

    /// Non-2xx HTTP status
    TransportError {
        status_code: u16,
        body_preview: String,
    },

    /// Envelope parsed but carried no records list
    ServerReportedError {
        message: String,
        code: Option<i64>,
    },

    /// No HTTP response at all (connect failure, timeout, body read)
    Unreachable { message: String },

    /// The endpoint could not be resolved, so nothing was sent
    Misconfigured { message: String },
}

impl PageResult {
    /// Create a success result; `record_count` follows the records
    pub fn success(records: Vec<Record>) -> Self {
        let record_count = records.len();
        Self::Success {
            records,
            record_count,
        }
    }

    /// Check if this is a success result
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::MalformedPayload { markup: true, .. } => "markup",
            Self::MalformedPayload { .. } => "malformed",
            Self::TransportError { .. } => "transport",
            Self::ServerReportedError { .. } => "server-reported",
            Self::Unreachable { .. } => "unreachable",
            Self::Misconfigured { .. } => "misconfigured",
        }
    }

    /// Split into the records of a successful page or the error to report
    pub fn into_records(self) -> Result<Vec<Record>, FetchError> {
        match self {
            Self::Success { records, .. } => Ok(records),
            Self::MalformedPayload { reason, markup } => {
                Err(FetchError::Malformed { reason, markup })
            }
            Self::TransportError {
                status_code,
                body_preview,
            } => Err(FetchError::Transport {
                status: status_code,
                body_preview,
            }),
            Self::ServerReportedError { message, code } => {
                Err(FetchError::ServerReported { message, code })
            }
            Self::Unreachable { message } => Err(FetchError::Unreachable { message }),
            Self::Misconfigured { message } => Err(FetchError::Configuration { message }),
        }
    }
}
