//! Integration tests for the `check` command against a mock status endpoint.
//!
//! Covers the full outcome taxonomy: success with a final game, partial data
//! without a game, upstream error codes inside a successful payload, bad
//! HTTP status, malformed body, and an unreachable endpoint.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn final_game_payload() -> serde_json::Value {
    serde_json::json!({
        "dateChecked": "2025-06-01",
        "live": true,
        "game": {
            "date": "2025-06-01",
            "venue": "Dodger Stadium",
            "status": "FINAL",
            "home": {
                "name": "Los Angeles Dodgers",
                "abbr": "LAD",
                "score": 5,
                "wins": 40,
                "losses": 20,
                "home": true,
                "winner": true
            },
            "away": {
                "name": "Atlanta Braves",
                "abbr": "ATL",
                "score": 3,
                "wins": 30,
                "losses": 28,
                "home": false
            }
        }
    })
}

fn check_cmd(home: &std::path::Path, endpoint: &str) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("pandamon");
    cmd.env("PANDAMON_HOME", home)
        .env_remove("PANDAMON_ENDPOINT")
        .env_remove("PANDAMON_LOG")
        .args(["check", "--endpoint", endpoint]);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_reports_yes_for_final_home_win() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/panda"))
        .respond_with(ResponseTemplate::new(200).set_body_json(final_game_payload()))
        .mount(&server)
        .await;

    check_cmd(dir.path(), &format!("{}/api/panda", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: YES"))
        .stdout(predicate::str::contains("3 – 5"))
        .stdout(predicate::str::contains(
            "Source: 2025-06-01 • Dodger Stadium • FINAL",
        ))
        .stdout(predicate::str::contains("Note:").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_sends_cache_busting_request() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    // Only respond when the cache-busting header and timestamp param are present.
    Mock::given(method("GET"))
        .and(path("/api/panda"))
        .and(header("Cache-Control", "no-cache"))
        .and(query_param_is_missing("t"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/panda"))
        .and(header("Cache-Control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(final_game_payload()))
        .mount(&server)
        .await;

    check_cmd(dir.path(), &format!("{}/api/panda", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: YES"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_partial_data_without_game() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/panda"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "dateChecked": "2025-06-01",
            "live": false
        })))
        .mount(&server)
        .await;

    check_cmd(dir.path(), &format!("{}/api/panda", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: NO"))
        .stdout(predicate::str::contains("Source: 2025-06-01"))
        .stdout(predicate::str::contains("Note:").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_surfaces_upstream_error_code_as_note() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/panda"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "dateChecked": "2025-06-01",
            "live": false,
            "error": "statsapi_error"
        })))
        .mount(&server)
        .await;

    check_cmd(dir.path(), &format!("{}/api/panda", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: NO"))
        .stdout(predicate::str::contains("Note: API error: statsapi_error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_http_500_is_bad_status() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/panda"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    check_cmd(dir.path(), &format!("{}/api/panda", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: NO"))
        .stdout(predicate::str::contains("Note: API error: bad_status"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_malformed_body_is_bad_status() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    // Valid JSON, but no `live` field: carries no signal.
    Mock::given(method("GET"))
        .and(path("/api/panda"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "dateChecked": "2025-06-01"
        })))
        .mount(&server)
        .await;

    check_cmd(dir.path(), &format!("{}/api/panda", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: NO"))
        .stdout(predicate::str::contains("Note: API error: bad_status"));
}

#[test]
fn test_check_unreachable_endpoint() {
    let dir = tempdir().unwrap();

    // Nothing listens on the discard port.
    check_cmd(dir.path(), "http://127.0.0.1:9/api/panda")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: NO"))
        .stdout(predicate::str::contains("Note: Could not reach status API."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_json_output() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/panda"))
        .respond_with(ResponseTemplate::new(200).set_body_json(final_game_payload()))
        .mount(&server)
        .await;

    let output = check_cmd(dir.path(), &format!("{}/api/panda", server.uri()))
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["phase"], "loaded");
    assert_eq!(value["live"], true);
    assert_eq!(value["data"]["game"]["venue"], "Dodger Stadium");
    assert!(value.get("error").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_endpoint_env_var_takes_precedence() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/panda"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "dateChecked": "2025-06-01",
            "live": true
        })))
        .mount(&server)
        .await;

    // Env points at the live mock; the flag points at a dead port.
    cargo_bin_cmd!("pandamon")
        .env("PANDAMON_HOME", dir.path())
        .env("PANDAMON_ENDPOINT", format!("{}/api/panda", server.uri()))
        .env_remove("PANDAMON_LOG")
        .args(["check", "--endpoint", "http://127.0.0.1:9/api/panda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: YES"));
}
