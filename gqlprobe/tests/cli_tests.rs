use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const ENABLED: &str = "GraphQL introspection is ENABLED.\n";
const DISABLED: &str = "GraphQL introspection is DISABLED or restricted.\n";

fn gqlprobe() -> Command {
    let mut cmd = Command::cargo_bin("gqlprobe").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_empty_url_exits_with_one() {
    gqlprobe()
        .arg("")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("URL is required."));
}

#[test]
fn test_missing_url_is_usage_error() {
    gqlprobe().assert().code(2).stdout("");
}

#[test]
fn test_unreachable_host_prints_disabled() {
    gqlprobe()
        .args(["127.0.0.1:1/graphql", "--timeout", "2"])
        .assert()
        .success()
        .stdout(DISABLED)
        .stderr(predicate::str::contains("Assuming https://"))
        .stderr(predicate::str::contains(
            "Checking GraphQL introspection at: https://127.0.0.1:1/graphql",
        ));
}

#[test]
fn test_malformed_header_is_logged() {
    gqlprobe()
        .args(["http://127.0.0.1:1", "-t", "2", "-H", "Authorization Bearer xyz"])
        .assert()
        .success()
        .stdout(DISABLED)
        .stderr(predicate::str::contains(
            "Invalid header format: Authorization Bearer xyz",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_enabled_endpoint_prints_enabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "__schema": { "queryType": { "name": "Query" }, "types": [] } }
        })))
        .mount(&mock_server)
        .await;

    gqlprobe()
        .arg(format!("{}/graphql", mock_server.uri()))
        .assert()
        .success()
        .stdout(ENABLED);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_format_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "forbidden" })))
        .mount(&mock_server)
        .await;

    let output = gqlprobe()
        .args([mock_server.uri().as_str(), "--format", "json", "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["verdict"], "disabled_or_restricted");
    assert_eq!(report["status_code"], 403);
    assert_eq!(
        report["verdict_line"],
        "GraphQL introspection is DISABLED or restricted."
    );
}
