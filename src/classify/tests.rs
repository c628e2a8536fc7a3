//! Tests for response classification

use super::*;
use crate::types::ReplyKind;
use serde_json::json;
use test_case::test_case;

fn record_json(content: &str) -> serde_json::Value {
    json!({
        "bvid": "BV1",
        "content": content,
        "dt": "2025-11-28",
        "favorite": 1,
        "link": "https://www.bilibili.com/video/BV1#reply1",
        "pubdate": "2025-11-28 15:22:59",
        "reply": 0,
        "reply_type": "2",
        "title": "t",
        "user_id": 1,
        "user_name": "u",
        "video_owner_name": "o"
    })
}

// ============================================================================
// Markup Tests
// ============================================================================

#[test_case(200, "<!DOCTYPE html><html><body>app</body></html>" ; "html page with 200")]
#[test_case(200, "   \n\t<html>" ; "leading whitespace")]
#[test_case(404, "<html><body>Not Found</body></html>" ; "html error page")]
#[test_case(502, "<?xml version=\"1.0\"?><error/>" ; "xml error")]
fn test_markup_is_malformed(status: u16, body: &str) {
    match classify(status, body) {
        PageResult::MalformedPayload { markup, reason } => {
            assert!(markup);
            assert!(reason.contains("proxy"));
        }
        other => panic!("Expected MalformedPayload, got {other:?}"),
    }
}

// ============================================================================
// Status Tests
// ============================================================================

#[test_case(404, "not found" ; "client error")]
#[test_case(500, "{\"msg\":\"boom\"}" ; "server error with json body")]
#[test_case(302, "" ; "redirect")]
fn test_non_success_status_is_transport_error(status: u16, body: &str) {
    match classify(status, body) {
        PageResult::TransportError {
            status_code,
            body_preview,
        } => {
            assert_eq!(status_code, status);
            assert_eq!(body_preview, body);
        }
        other => panic!("Expected TransportError, got {other:?}"),
    }
}

#[test]
fn test_transport_preview_is_truncated() {
    let body = "x".repeat(500);
    let PageResult::TransportError { body_preview, .. } = classify(503, &body) else {
        panic!("Expected TransportError");
    };
    assert_eq!(body_preview, format!("{}...", "x".repeat(PREVIEW_CHARS)));
}

#[test]
fn test_preview_respects_char_boundaries() {
    let body = "评论".repeat(100);
    let cut = preview(&body, 3);
    assert_eq!(cut, "评论评...");
    assert_eq!(preview("short", 10), "short");
}

// ============================================================================
// Parse Tests
// ============================================================================

#[test_case("" ; "empty body")]
#[test_case("not json at all" ; "plain text")]
#[test_case("{\"data\": [" ; "truncated json")]
fn test_invalid_json_is_malformed(body: &str) {
    match classify(200, body) {
        PageResult::MalformedPayload { markup, reason } => {
            assert!(!markup);
            assert!(reason.contains("not valid JSON"));
        }
        other => panic!("Expected MalformedPayload, got {other:?}"),
    }
}

// ============================================================================
// Envelope Tests
// ============================================================================

#[test]
fn test_missing_data_uses_server_message() {
    let result = classify(200, r#"{"code":1,"msg":"user not found"}"#);
    assert_eq!(
        result,
        PageResult::ServerReportedError {
            message: "user not found".to_string(),
            code: Some(1),
        }
    );
}

#[test]
fn test_missing_data_without_message() {
    let result = classify(200, r#"{"code":"500"}"#);
    assert_eq!(
        result,
        PageResult::ServerReportedError {
            message: MISSING_RECORDS_MESSAGE.to_string(),
            code: Some(500),
        }
    );
}

#[test_case(r#"{"data": {"rows": []}, "msg": ""}"# ; "data is object and msg empty")]
#[test_case(r#"{"data": null}"# ; "data is null")]
#[test_case(r#"[1, 2, 3]"# ; "top level array")]
#[test_case(r#""just a string""# ; "top level string")]
fn test_data_not_array_is_server_error(body: &str) {
    match classify(200, body) {
        PageResult::ServerReportedError { message, .. } => {
            assert_eq!(message, MISSING_RECORDS_MESSAGE);
        }
        other => panic!("Expected ServerReportedError, got {other:?}"),
    }
}

#[test]
fn test_message_field_fallback() {
    let result = classify(200, r#"{"message":"token expired"}"#);
    let PageResult::ServerReportedError { message, code } = result else {
        panic!("Expected ServerReportedError");
    };
    assert_eq!(message, "token expired");
    assert!(code.is_none());
}

// ============================================================================
// Success Tests
// ============================================================================

#[test]
fn test_empty_data_is_success() {
    let result = classify(200, r#"{"data":[], "code":0}"#);
    assert_eq!(result, PageResult::success(vec![]));
    assert!(result.is_success());
}

#[test]
fn test_records_decoded_in_order() {
    let body = json!({
        "code": 0,
        "msg": "ok",
        "data": [record_json("one"), record_json("two"), record_json("three")]
    })
    .to_string();

    let PageResult::Success {
        records,
        record_count,
    } = classify(200, &body)
    else {
        panic!("Expected Success");
    };

    assert_eq!(record_count, 3);
    let contents: Vec<_> = records.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(contents, vec!["one", "two", "three"]);
    assert_eq!(records[0].reply_kind, ReplyKind::Nested);
}

#[test]
fn test_nonzero_code_with_data_is_still_success() {
    let body = json!({"code": 7, "data": [record_json("x")]}).to_string();
    assert!(classify(200, &body).is_success());
}

#[test]
fn test_bad_record_shape_is_malformed() {
    let mut bad = record_json("bad");
    bad.as_object_mut().unwrap().remove("link");
    let body = json!({"data": [record_json("ok"), bad]}).to_string();

    match classify(200, &body) {
        PageResult::MalformedPayload { reason, markup } => {
            assert!(!markup);
            assert!(reason.starts_with("record 1"));
        }
        other => panic!("Expected MalformedPayload, got {other:?}"),
    }
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_into_records() {
    assert_eq!(PageResult::success(vec![]).into_records(), Ok(vec![]));

    let err = PageResult::TransportError {
        status_code: 500,
        body_preview: "oops".to_string(),
    }
    .into_records()
    .unwrap_err();
    assert_eq!(err.to_string(), "API error: HTTP 500: oops");

    let err = PageResult::Misconfigured {
        message: "no path".to_string(),
    }
    .into_records()
    .unwrap_err();
    assert!(err.suggests_reconfiguration());
}

#[test]
fn test_labels() {
    assert_eq!(PageResult::success(vec![]).label(), "success");
    assert_eq!(classify(200, "<html>").label(), "markup");
    assert_eq!(classify(200, "nope").label(), "malformed");
}
