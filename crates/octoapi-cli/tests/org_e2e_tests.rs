//! End-to-end tests for the `octo org` commands
//!
//! These drive the compiled binary against a stub HTTP server and validate
//! path selection, pagination flags, output formats, edit payloads, and
//! error reporting.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary under test, with ambient GitHub configuration stripped
fn octo() -> Command {
    let mut cmd = Command::cargo_bin("octo").expect("octo binary");
    cmd.env_remove("GITHUB_API_URL")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_API_TIMEOUT_SECS");
    cmd
}

fn orgs_body() -> serde_json::Value {
    serde_json::json!([
        {"login": "octo-org", "id": 1, "name": "Octo Org", "public_repos": 12},
        {"login": "other-org", "id": 2}
    ])
}

#[tokio::test]
async fn test_org_list_defaults_to_authenticated_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orgs_body()))
        .mount(&mock_server)
        .await;

    octo()
        .arg("org")
        .arg("list")
        .arg("--api-url")
        .arg(mock_server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("octo-org"))
        .stdout(predicate::str::contains("other-org"));
}

#[tokio::test]
async fn test_org_list_with_user_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orgs_body()))
        .mount(&mock_server)
        .await;

    octo()
        .arg("org")
        .arg("list")
        .arg("--user")
        .arg("octocat")
        .arg("--format")
        .arg("compact")
        .arg("--api-url")
        .arg(mock_server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("octo-org"));
}

#[tokio::test]
async fn test_org_list_with_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/orgs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orgs_body()))
        .mount(&mock_server)
        .await;

    octo()
        .arg("org")
        .arg("list")
        .arg("--user")
        .arg("octocat")
        .arg("--page")
        .arg("2")
        .arg("--format")
        .arg("compact")
        .arg("--api-url")
        .arg(mock_server.uri())
        .assert()
        .success();
}

#[tokio::test]
async fn test_org_list_json_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orgs_body()))
        .mount(&mock_server)
        .await;

    octo()
        .arg("org")
        .arg("list")
        .arg("--format")
        .arg("json")
        .arg("--api-url")
        .arg(mock_server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""login": "octo-org""#))
        .stdout(predicate::str::contains(r#""public_repos": 12"#));
}

#[tokio::test]
async fn test_org_list_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    octo()
        .arg("org")
        .arg("list")
        .arg("--api-url")
        .arg(mock_server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("No organizations found"));
}

#[tokio::test]
async fn test_org_list_forwards_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .and(header("Authorization", "token secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orgs_body()))
        .mount(&mock_server)
        .await;

    octo()
        .arg("org")
        .arg("list")
        .arg("--format")
        .arg("compact")
        .arg("--api-url")
        .arg(mock_server.uri())
        .env("GITHUB_TOKEN", "secret")
        .assert()
        .success();
}

#[tokio::test]
async fn test_org_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/octo-org"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": "octo-org",
            "id": 1,
            "name": "Octo Org",
            "location": "San Francisco"
        })))
        .mount(&mock_server)
        .await;

    octo()
        .arg("org")
        .arg("get")
        .arg("octo-org")
        .arg("--api-url")
        .arg(mock_server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("octo-org"))
        .stdout(predicate::str::contains("San Francisco"));
}

#[tokio::test]
async fn test_org_get_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"message": "Not Found"})),
        )
        .mount(&mock_server)
        .await;

    octo()
        .arg("org")
        .arg("get")
        .arg("missing")
        .arg("--api-url")
        .arg(mock_server.uri())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not Found"));
}

#[tokio::test]
async fn test_org_edit_sends_only_provided_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/orgs/octo-org"))
        .and(body_json(serde_json::json!({
            "location": "Berlin",
            "billing_email": "billing@octo.example"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": "octo-org",
            "id": 1,
            "location": "Berlin",
            "billing_email": "billing@octo.example"
        })))
        .mount(&mock_server)
        .await;

    octo()
        .arg("org")
        .arg("edit")
        .arg("octo-org")
        .arg("--location")
        .arg("Berlin")
        .arg("--billing-email")
        .arg("billing@octo.example")
        .arg("--api-url")
        .arg(mock_server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated organization"))
        .stdout(predicate::str::contains("Berlin"));
}

#[tokio::test]
async fn test_org_edit_requires_at_least_one_field() {
    octo()
        .arg("org")
        .arg("edit")
        .arg("octo-org")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No fields to update"));
}

#[tokio::test]
async fn test_org_list_unknown_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orgs_body()))
        .mount(&mock_server)
        .await;

    octo()
        .arg("org")
        .arg("list")
        .arg("--format")
        .arg("yaml")
        .arg("--api-url")
        .arg(mock_server.uri())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}
