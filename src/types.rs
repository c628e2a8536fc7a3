//! Common types used throughout Reply Scout
//!
//! Query parameters for a single page request and the comment record as it
//! arrives on the wire.

use chrono::NaiveDateTime;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Page size used when settings do not say otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Format of the `pubdate` field
const PUBDATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Query Parameters
// ============================================================================

/// Parameters of one page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Identifier of the user whose comments are listed
    pub subject_id: String,
    /// Maximum records per page
    pub page_size: u32,
    /// 1-based page number
    pub page_number: u32,
}

impl QueryParams {
    /// Parameters for the first page of a query
    pub fn first_page(subject_id: impl Into<String>, page_size: u32) -> Self {
        Self {
            subject_id: subject_id.into(),
            page_size,
            page_number: 1,
        }
    }

    /// Same query, a specific page
    #[must_use]
    pub fn with_page(&self, page_number: u32) -> Self {
        Self {
            page_number,
            ..self.clone()
        }
    }
}

// ============================================================================
// Reply Kind
// ============================================================================

/// Whether a comment is top-level or a reply to another comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// Wire value "1"
    TopLevel,
    /// Wire value "2"
    Nested,
}

impl ReplyKind {
    /// Wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            ReplyKind::TopLevel => "1",
            ReplyKind::Nested => "2",
        }
    }

    fn from_wire(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(ReplyKind::TopLevel),
            "2" => Some(ReplyKind::Nested),
            _ => None,
        }
    }
}

impl Serialize for ReplyKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReplyKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let text = match &value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(de::Error::custom(format!(
                    "reply_type must be a string or number, got {other}"
                )))
            }
        };
        ReplyKind::from_wire(&text)
            .ok_or_else(|| de::Error::custom(format!("unknown reply_type '{text}'")))
    }
}

// ============================================================================
// Record
// ============================================================================

/// One comment entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name of the commenting user
    #[serde(rename = "user_name")]
    pub subject_display_name: String,

    /// Numeric or string user id, when the backend sends it
    #[serde(rename = "user_id", default, deserialize_with = "lenient::optional_id")]
    pub subject_id: Option<String>,

    /// Comment text
    pub content: String,

    /// Publication time, "YYYY-MM-DD HH:MM:SS"
    #[serde(rename = "pubdate", default)]
    pub published: String,

    /// Partition date, used when `published` is empty
    #[serde(rename = "dt", default)]
    pub partition_date: String,

    /// Title of the commented item
    #[serde(rename = "title")]
    pub source_title: String,

    /// Owner of the commented item
    #[serde(rename = "video_owner_name")]
    pub source_owner_name: String,

    /// Identifier of the commented item
    #[serde(rename = "bvid")]
    pub source_identifier: String,

    #[serde(rename = "favorite", default, deserialize_with = "lenient::count")]
    pub like_count: u64,

    #[serde(rename = "reply", default, deserialize_with = "lenient::count")]
    pub reply_count: u64,

    #[serde(rename = "reply_type")]
    pub reply_kind: ReplyKind,

    /// Link to the comment
    #[serde(rename = "link")]
    pub permalink: String,
}

/// Date and time parts of a record for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub date: String,
    pub time: String,
}

impl Record {
    /// Split the publication time into date and time parts
    ///
    /// Falls back to the partition date (with no time) when `pubdate` is empty.
    pub fn timestamp(&self) -> Timestamp {
        let published = self.published.trim();
        if published.is_empty() {
            return Timestamp {
                date: self.partition_date.clone(),
                time: String::new(),
            };
        }
        match published.split_once(' ') {
            Some((date, time)) => Timestamp {
                date: date.to_string(),
                time: time.trim().to_string(),
            },
            None => Timestamp {
                date: published.to_string(),
                time: String::new(),
            },
        }
    }

    /// Parsed publication time, if it has the expected format
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.published.trim(), PUBDATE_FORMAT).ok()
    }

    /// Reply id from the `#reply<id>` fragment of the permalink
    pub fn reply_id(&self) -> Option<&str> {
        self.permalink
            .split_once("#reply")
            .map(|(_, id)| id)
            .filter(|id| !id.is_empty())
    }
}

/// Deserializers that accept the loose typing some backends produce
mod lenient {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    /// Non-negative count from a number, a numeric string, or null
    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0),
            Value::Number(n) => n
                .as_u64()
                .ok_or_else(|| de::Error::custom(format!("count must be non-negative, got {n}"))),
            Value::String(s) if s.trim().is_empty() => Ok(0),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("count is not a number: '{s}'"))),
            other => Err(de::Error::custom(format!("count must be a number, got {other}"))),
        }
    }

    /// Identifier from a string or number
    pub fn optional_id<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(de::Error::custom(format!(
                "user_id must be a string or number, got {other}"
            ))),
        }
    }
}
