//! Tests for the HTTP page fetcher

use super::*;
use crate::classify::PageResult;
use crate::http::HttpClient;
use crate::settings::EndpointSettings;
use crate::types::QueryParams;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(server: &MockServer, api_path: &str) -> HttpPageFetcher {
    let endpoint = EndpointSettings::new(api_path).with_origin(server.uri());
    HttpPageFetcher::new(HttpClient::new().unwrap(), endpoint)
}

fn record(content: &str) -> serde_json::Value {
    json!({
        "bvid": "BV1",
        "content": content,
        "dt": "2025-11-28",
        "favorite": 0,
        "link": "https://www.bilibili.com/video/BV1#reply1",
        "pubdate": "2025-11-28 15:22:59",
        "reply": 0,
        "reply_type": "1",
        "title": "t",
        "user_id": 1,
        "user_name": "u",
        "video_owner_name": "o"
    })
}

#[tokio::test]
async fn test_fetch_sends_page_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sdap4mysql/replies"))
        .and(query_param("pageSize", "50"))
        .and(query_param("pageNum", "3"))
        .and(query_param("uid", "12345"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": [record("hi")]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server, "/sdap4mysql/replies");
    let params = QueryParams::first_page("12345", 50).with_page(3);

    let result = fetcher.fetch_page(&params).await;
    let PageResult::Success {
        records,
        record_count,
    } = result
    else {
        panic!("Expected Success, got {result:?}");
    };
    assert_eq!(record_count, 1);
    assert_eq!(records[0].content, "hi");
}

#[tokio::test]
async fn test_fetch_html_is_markup() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/replies"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<!DOCTYPE html><html><head></head></html>"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server, "/replies");
    let result = fetcher
        .fetch_page(&QueryParams::first_page("1", 100))
        .await;

    assert!(matches!(
        result,
        PageResult::MalformedPayload { markup: true, .. }
    ));
}

#[tokio::test]
async fn test_fetch_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/replies"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server, "/replies");
    let result = fetcher
        .fetch_page(&QueryParams::first_page("1", 100))
        .await;

    assert_eq!(
        result,
        PageResult::TransportError {
            status_code: 503,
            body_preview: "upstream down".to_string(),
        }
    );
}

#[tokio::test]
async fn test_fetch_unreachable() {
    let endpoint = EndpointSettings::new("/replies").with_origin("http://127.0.0.1:9");
    let fetcher = HttpPageFetcher::new(HttpClient::new().unwrap(), endpoint);

    let result = fetcher
        .fetch_page(&QueryParams::first_page("1", 100))
        .await;
    assert!(matches!(result, PageResult::Unreachable { .. }));
}

#[test]
fn test_check_ready() {
    let client = HttpClient::new().unwrap();

    let ready = HttpPageFetcher::new(client.clone(), EndpointSettings::new("/replies"));
    assert!(ready.check_ready().is_ok());

    let missing_path = HttpPageFetcher::new(client.clone(), EndpointSettings::default());
    assert!(missing_path.check_ready().unwrap_err().is_configuration());

    let bad_origin = HttpPageFetcher::new(
        client,
        EndpointSettings::new("/replies").with_origin("::::"),
    );
    assert!(bad_origin.check_ready().is_err());
}

#[tokio::test]
async fn test_fetch_without_path_is_misconfigured() {
    let fetcher = HttpPageFetcher::new(HttpClient::new().unwrap(), EndpointSettings::default());
    let result = fetcher
        .fetch_page(&QueryParams::first_page("1", 100))
        .await;
    assert!(matches!(result, PageResult::Misconfigured { .. }));
}
