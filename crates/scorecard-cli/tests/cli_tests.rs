//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn scorecard() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("scorecard").unwrap();
    cmd.env_remove("SCORECARD_ENDPOINT");
    cmd
}

/// Write a payload of `n` records; every fifth record is in the "Safety"
/// module, the rest in "Onboarding".
fn write_snapshot(dir: &Path, n: usize) -> PathBuf {
    let users: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "_id": format!("id{i}"),
                "email": format!("user{i}@example.com"),
                "module": if i % 5 == 0 { "Safety" } else { "Onboarding" },
                "score": 8,
                "percentage": 80,
                "createdAt": "2024-10-15T10:30:00.000Z"
            })
        })
        .collect();
    let path = dir.join("scores.json");
    std::fs::write(&path, serde_json::json!({ "user": users }).to_string()).unwrap();
    path
}

#[test]
fn show_first_page() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(dir.path(), 25);

    scorecard()
        .arg("show")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sr No."))
        .stdout(predicate::str::contains("user9@example.com"))
        .stdout(predicate::str::contains("user10@example.com").not())
        .stdout(predicate::str::contains("80%"))
        .stdout(predicate::str::contains("Tue, 15 Oct 2024 10:30:00 GMT"))
        .stdout(predicate::str::contains("(Prev)  Page 1 of 3  [Next]"))
        .stderr(predicate::str::contains("Loading..."));
}

#[test]
fn show_last_page() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(dir.path(), 25);

    scorecard()
        .args(["show", "--page", "3", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("user20@example.com"))
        .stdout(predicate::str::contains("user24@example.com"))
        .stdout(predicate::str::contains("user19@example.com").not())
        .stdout(predicate::str::contains("[Prev]  Page 3 of 3  (Next)"));
}

#[test]
fn out_of_range_page_is_ignored() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(dir.path(), 25);

    scorecard()
        .args(["show", "--page", "7", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 3"));
}

#[test]
fn search_by_email_and_module() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(dir.path(), 25);

    scorecard()
        .args(["show", "--email", "USER1", "--module", "safety", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("user10@example.com"))
        .stdout(predicate::str::contains("user15@example.com"))
        .stdout(predicate::str::contains("user11@example.com").not())
        .stdout(predicate::str::contains("Page 1 of 1"));
}

#[test]
fn empty_result_still_shows_controls() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(dir.path(), 0);

    scorecard()
        .args(["show", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("(Prev)  Page 1 of 1  (Next)"));
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(dir.path(), 12);

    let output = scorecard()
        .args(["show", "--format", "json", "--page", "2", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "ready");
    assert_eq!(value["current_page"], 2);
    assert_eq!(value["rows"][0]["number"], 11);
    assert_eq!(value["rows"][1]["email"], "user11@example.com");
}

#[test]
fn html_output_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(dir.path(), 3);
    let out = dir.path().join("report/page.html");

    scorecard()
        .args(["show", "--format", "html", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("HTML report"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<td>user2@example.com</td>"));
    assert!(html.contains("Page 1 of 1"));
}

#[test]
fn unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(dir.path(), 1);

    scorecard()
        .args(["show", "--format", "xml", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn missing_snapshot_shows_failure_message() {
    let dir = TempDir::new().unwrap();

    scorecard()
        .args(["show", "--input"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to fetch data"))
        .stdout(predicate::str::contains("Email").not())
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn malformed_snapshot_shows_failure_message() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("scores.json");
    std::fs::write(&input, r#"{"users": []}"#).unwrap();

    scorecard()
        .args(["show", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to fetch data"))
        .stderr(predicate::str::contains("malformed response"));
}

#[test]
fn custom_field_name() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("scores.json");
    std::fs::write(
        &input,
        r#"{"results":[{"email":"a@x.com","module":"m","score":1,"percentage":10,"createdAt":"2024-01-01"}]}"#,
    )
    .unwrap();

    scorecard()
        .args(["show", "--field", "results", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("a@x.com"));
}

#[test]
fn config_file_sets_page_size_and_source() {
    let dir = TempDir::new().unwrap();
    write_snapshot(dir.path(), 12);
    std::fs::write(
        dir.path().join("scorecard.toml"),
        "page_size = 5\n\n[source]\ntype = \"file\"\npath = \"scores.json\"\n",
    )
    .unwrap();

    scorecard()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 3"));
}

#[test]
fn zero_page_size_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(dir.path(), 3);

    scorecard()
        .args(["show", "--page-size", "0", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size must be at least 1"));
}

#[test]
fn browse_session() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(dir.path(), 25);

    scorecard()
        .args(["browse", "--input"])
        .arg(&input)
        .write_stdin("next\nnext\nnext\nmodule SAFETY\nsearch\nclear\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 3"))
        .stdout(predicate::str::contains("[Prev]  Page 3 of 3  (Next)"))
        .stdout(predicate::str::contains("5 matching record(s)"))
        .stdout(predicate::str::contains("(Prev)  Page 1 of 1  (Next)"));
}

#[test]
fn browse_failure_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    scorecard()
        .args(["browse", "--input"])
        .arg(dir.path().join("missing.json"))
        .write_stdin("next\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to fetch data"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    scorecard()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created scorecard.toml"));

    assert!(dir.path().join("scorecard.toml").exists());

    scorecard()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[tokio::test(flavor = "multi_thread")]
async fn show_from_http_endpoint() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/getUserScore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": [
                {"email": "a@x.com", "module": "Intro", "score": 7.5, "percentage": 75, "createdAt": "2024-02-01T08:00:00Z"},
                {"email": "b@x.com", "module": "Intro", "score": 9, "percentage": 90, "createdAt": "2024-02-02T08:00:00Z"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = format!("{}/api/getUserScore", server.uri());
    let dir = TempDir::new().unwrap();
    let cwd = dir.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        scorecard()
            .current_dir(cwd)
            .args(["show", "--email", "a@", "--endpoint", endpoint.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("a@x.com"))
            .stdout(predicate::str::contains("7.5"))
            .stdout(predicate::str::contains("b@x.com").not());
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn http_error_shows_failure_message() {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let dir = TempDir::new().unwrap();
    let cwd = dir.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        scorecard()
            .current_dir(cwd)
            .args(["show", "--endpoint", endpoint.as_str()])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Failed to fetch data"))
            .stdout(predicate::str::contains("Sr No.").not())
            .stderr(predicate::str::contains("503"));
    })
    .await
    .unwrap();
}
