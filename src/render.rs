//! Text rendering of records and session status for the terminal

use crate::error::Result;
use crate::pagination::{PaginationSession, Phase};
use crate::types::{Record, ReplyKind};
use std::fmt::Write as _;

/// Render one record as a block of text
///
/// ```text
/// 2025-11-28 15:22:59  alice  [reply]  12 likes  3 replies
///   BV1xx411c7mD | UP: bob | Some video
///   first!
///   https://www.bilibili.com/video/BV1xx411c7mD#reply245
/// ```
pub fn render_record(record: &Record) -> String {
    let timestamp = record.timestamp();
    let when = if timestamp.time.is_empty() {
        timestamp.date
    } else {
        format!("{} {}", timestamp.date, timestamp.time)
    };
    let kind = match record.reply_kind {
        ReplyKind::TopLevel => "comment",
        ReplyKind::Nested => "reply",
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{when}  {}  [{kind}]  {} likes  {} replies",
        record.subject_display_name, record.like_count, record.reply_count
    );
    let _ = writeln!(
        out,
        "  {} | UP: {} | {}",
        record.source_identifier, record.source_owner_name, record.source_title
    );
    for line in record.content.lines() {
        let _ = writeln!(out, "  {line}");
    }
    let _ = write!(out, "  {}", record.permalink);
    out
}

/// Render one record as a single JSON line
pub fn render_json(record: &Record) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// One-line summary of where a session stands
pub fn render_status(session: &PaginationSession) -> String {
    match session.phase() {
        Phase::Idle => "Enter a user ID to search for replies.".to_string(),
        Phase::Loading => format!(
            "Loading page {}...",
            session.pending_page().unwrap_or_else(|| session.current_page())
        ),
        Phase::Failed => format!(
            "Query failed: {}",
            session.last_error_message().unwrap_or_default()
        ),
        Phase::Ready if session.is_empty() => "No replies found.".to_string(),
        Phase::Ready if session.has_more() => format!(
            "{} replies loaded (page {}), more available.",
            session.len(),
            session.current_page()
        ),
        Phase::Ready => format!("{} replies loaded. End of history.", session.len()),
    }
}
