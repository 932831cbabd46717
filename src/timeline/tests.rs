//! Tests for the paginated collector

use super::*;
use crate::api::TimelineApi;
use crate::config::AppConfig;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn collector_for(server: &MockServer, max_pages: u32) -> Collector {
    let config = AppConfig::builder()
        .bearer_token("test-token")
        .api_base_url(server.uri())
        .build();
    let api = TimelineApi::new(&config).unwrap();
    Collector::with_config(
        api,
        CollectorConfig {
            max_pages,
            page_size: 100,
            page_interval: Duration::from_millis(1),
        },
    )
}

fn post_json(id: &str, created_at: &str) -> serde_json::Value {
    json!({"id": id, "text": format!("post {id}"), "created_at": created_at})
}

#[tokio::test]
async fn test_collect_all_concatenates_pages_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .and(query_param_is_missing("pagination_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                post_json("3", "2024-01-03T00:00:00.000Z"),
                post_json("2", "2024-01-02T00:00:00.000Z")
            ],
            "meta": {"result_count": 2, "next_token": "tok-2"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .and(query_param("pagination_token", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [post_json("1", "2024-01-01T00:00:00.000Z")],
            "meta": {"result_count": 1}
        })))
        .mount(&mock_server)
        .await;

    let collector = collector_for(&mock_server, 15);
    let timeline = collector.collect_all("12").await;

    let ids: Vec<&str> = timeline.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2", "1"]);
    assert_eq!(timeline.pages_fetched, 2);
}

#[tokio::test]
async fn test_collect_all_respects_page_cap() {
    let mock_server = MockServer::start().await;

    // The server claims endless continuation; the cap must win.
    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [post_json("1", "2024-01-01T00:00:00.000Z")],
            "meta": {"result_count": 1, "next_token": "again"}
        })))
        .expect(3)
        .mount(&mock_server)
        .await;

    let collector = collector_for(&mock_server, 3);
    let timeline = collector.collect_all("12").await;

    assert_eq!(timeline.pages_fetched, 3);
    assert_eq!(timeline.len(), 3);
}

#[tokio::test]
async fn test_collect_all_stops_on_empty_page_despite_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "meta": {"result_count": 0, "next_token": "suspicious"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let collector = collector_for(&mock_server, 15);
    let timeline = collector.collect_all("12").await;

    assert!(timeline.is_empty());
    assert_eq!(timeline.pages_fetched, 0);
}

#[tokio::test]
async fn test_collect_all_stops_when_cursor_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [post_json("1", "2024-01-01T00:00:00.000Z")],
            "meta": {"result_count": 1}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let collector = collector_for(&mock_server, 15);
    let timeline = collector.collect_all("12").await;

    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.pages_fetched, 1);
}

#[tokio::test]
async fn test_collect_all_returns_partial_result_on_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .and(query_param_is_missing("pagination_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                post_json("5", "2024-01-05T00:00:00.000Z"),
                post_json("4", "2024-01-04T00:00:00.000Z")
            ],
            "meta": {"result_count": 2, "next_token": "tok-2"}
        })))
        .mount(&mock_server)
        .await;

    // Second page blows up; the first page's posts must survive.
    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .and(query_param("pagination_token", "tok-2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let collector = collector_for(&mock_server, 15);
    let timeline = collector.collect_all("12").await;

    let ids: Vec<&str> = timeline.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "4"]);
    assert_eq!(timeline.pages_fetched, 1);
}

#[tokio::test]
async fn test_collect_all_is_idempotent_against_stable_upstream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .and(query_param_is_missing("pagination_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                post_json("2", "2024-01-02T00:00:00.000Z"),
                post_json("1", "2024-01-01T00:00:00.000Z")
            ],
            "meta": {"result_count": 2}
        })))
        .mount(&mock_server)
        .await;

    let collector = collector_for(&mock_server, 15);
    let first = collector.collect_all("12").await;
    let second = collector.collect_all("12").await;

    assert_eq!(first.len(), second.len());
    assert_eq!(first.ids(), second.ids());
}

#[tokio::test]
async fn test_collect_range_is_inclusive_at_both_ends() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                post_json("4", "2024-01-04T00:00:00.000Z"),
                post_json("3", "2024-01-03T00:00:00.000Z"),
                post_json("2", "2024-01-02T00:00:00.000Z"),
                post_json("1", "2024-01-01T00:00:00.000Z")
            ],
            "meta": {"result_count": 4}
        })))
        .mount(&mock_server)
        .await;

    let start = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();

    let collector = collector_for(&mock_server, 15);
    let timeline = collector.collect_range("12", start, end).await;

    let ids: Vec<&str> = timeline.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2"]);
}

#[test]
fn test_collector_config_default() {
    let config = CollectorConfig::default();
    assert_eq!(config.max_pages, 15);
    assert_eq!(config.page_size, 100);
    assert_eq!(config.page_interval, Duration::from_secs(1));
}

#[test]
fn test_collector_config_with_max_pages() {
    let config = CollectorConfig::with_max_pages(5);
    assert_eq!(config.max_pages, 5);
    assert_eq!(config.page_size, 100);
}
