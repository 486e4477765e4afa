//! Process-level checks on the demo binary: stdout carries exactly the
//! run result on success and nothing at all on failure, with logs kept
//! on stderr.

use std::process::{Command, Output};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run_binary(base_url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_picnic-agent"))
        .env("DEDALUS_API_KEY", "sk-test")
        .env("DEDALUS_BASE_URL", base_url)
        .output()
        .expect("binary should spawn")
}

// Multi-threaded runtimes here: Command::output() blocks the test thread
// while the mock server must keep serving.
#[tokio::test(flavor = "multi_thread")]
async fn stdout_is_exactly_the_final_output_line() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/runs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "final_output": "X"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_binary(&server.uri());

    assert!(output.status.success(), "binary should exit cleanly");
    assert_eq!(output.stdout, b"X\n", "stdout must be the result line only");
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_run_prints_no_output_line() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/runs"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error": "invalid api key"}"#),
        )
        .mount(&server)
        .await;

    let output = run_binary(&server.uri());

    assert!(!output.status.success(), "binary should exit non-zero");
    assert!(output.stdout.is_empty(), "no result line on failure");
}
