use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// A `gist` command isolated from the user's config and token, pointed at `api_url`.
fn gist_cmd(config_dir: &TempDir, api_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("gist").unwrap();
    cmd.env("GIST_CONFIG_DIR", config_dir.path())
        .env("GIST_API_URL", api_url)
        .env("GIST_KEY", "test-token")
        .env_remove("RUST_LOG");
    cmd
}

fn endpoint(server: &Server) -> String {
    format!("{}/gists", server.url())
}

#[test]
fn piped_stdin_prints_the_gist_url() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/gists")
        .match_header("authorization", "token test-token")
        .match_body(Matcher::Json(json!({
            "description": "",
            "public": true,
            "files": { "gistfile1.txt": { "content": "line1\nline2" } }
        })))
        .with_status(201)
        .with_body(r#"{"html_url":"https://gist.example/abc123"}"#)
        .create();
    let config_dir = tempfile::tempdir().unwrap();

    gist_cmd(&config_dir, &endpoint(&server))
        .arg("p")
        .write_stdin("line1\nline2\n")
        .assert()
        .success()
        .stdout("https://gist.example/abc123\n")
        .stderr(predicate::str::contains("Uploading stdin as gistfile1.txt"));

    mock.assert();
}

#[test]
fn files_are_renamed_by_position() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/gists")
        .match_body(Matcher::Json(json!({
            "description": "this is my daily log",
            "public": false,
            "files": {
                "good1.txt": { "content": "one" },
                "good2.txt": { "content": "two" },
                "good3.txt": { "content": "three" }
            }
        })))
        .with_status(201)
        .with_body(r#"{"html_url":"https://gist.example/def456"}"#)
        .create();
    let config_dir = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    std::fs::write(work.path().join("bad1.txt"), "one").unwrap();
    std::fs::write(work.path().join("bad2.txt"), "two").unwrap();
    std::fs::write(work.path().join("good3.txt"), "three").unwrap();

    gist_cmd(&config_dir, &endpoint(&server))
        .arg("secret")
        .arg(work.path().join("bad1.txt"))
        .arg(work.path().join("bad2.txt"))
        .arg(work.path().join("good3.txt"))
        .args(["-n", "good1.txt,good2.txt", "-d", "this is my daily log"])
        .assert()
        .success()
        .stdout("https://gist.example/def456\n")
        .stderr(predicate::str::contains("as good3.txt"));

    mock.assert();
}

#[test]
fn too_many_names_fails_without_uploading() {
    let mut server = Server::new();
    let mock = server.mock("POST", "/gists").expect(0).create();
    let config_dir = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    std::fs::write(work.path().join("only.txt"), "x").unwrap();

    gist_cmd(&config_dir, &endpoint(&server))
        .arg("p")
        .arg(work.path().join("only.txt"))
        .arg("--name=a.txt,b.txt")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "more override file names (2) than inputs (1)",
        ));

    mock.assert();
}

#[test]
fn clipboard_takes_one_name_however_many_paths() {
    let mut server = Server::new();
    let mock = server.mock("POST", "/gists").expect(0).create();
    let config_dir = tempfile::tempdir().unwrap();

    gist_cmd(&config_dir, &endpoint(&server))
        .args(["p", "-c", "a.txt", "b.txt", "c.txt", "-n", "x.txt,y.txt"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "more override file names (2) than inputs (1)",
        ));

    mock.assert();
}

#[test]
fn warnings_are_shown_when_the_upload_fails() {
    let mut server = Server::new();
    server
        .mock("POST", "/gists")
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create();
    let config_dir = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    std::fs::create_dir(work.path().join("one")).unwrap();
    std::fs::create_dir(work.path().join("two")).unwrap();
    std::fs::write(work.path().join("one").join("notes.txt"), "first").unwrap();
    std::fs::write(work.path().join("two").join("notes.txt"), "second").unwrap();

    gist_cmd(&config_dir, &endpoint(&server))
        .arg("p")
        .arg(work.path().join("one").join("notes.txt"))
        .arg(work.path().join("two").join("notes.txt"))
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("notes.txt appears more than once")
                .and(predicate::str::contains("Error: invalid API token")),
        );
}

#[test]
fn unreadable_file_fails_without_uploading() {
    let mut server = Server::new();
    let mock = server.mock("POST", "/gists").expect(0).create();
    let config_dir = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    std::fs::write(work.path().join("present.txt"), "x").unwrap();
    let missing = work.path().join("missing.txt");

    gist_cmd(&config_dir, &endpoint(&server))
        .arg("p")
        .arg(work.path().join("present.txt"))
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read file").and(
            predicate::str::contains(missing.to_string_lossy().into_owned()),
        ));

    mock.assert();
}

#[test]
fn missing_token_fails_without_uploading() {
    let mut server = Server::new();
    let mock = server.mock("POST", "/gists").expect(0).create();
    let config_dir = tempfile::tempdir().unwrap();

    gist_cmd(&config_dir, &endpoint(&server))
        .env_remove("GIST_KEY")
        .arg("p")
        .write_stdin("data")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing API token"));

    mock.assert();
}

#[test]
fn rejected_token_reports_invalid_auth() {
    let mut server = Server::new();
    server
        .mock("POST", "/gists")
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create();
    let config_dir = tempfile::tempdir().unwrap();

    gist_cmd(&config_dir, &endpoint(&server))
        .args(["p", "--token", "expired"])
        .write_stdin("data")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: invalid API token"));
}

#[test]
fn upstream_error_body_is_shown() {
    let mut server = Server::new();
    server
        .mock("POST", "/gists")
        .with_status(422)
        .with_body(r#"{"message":"Validation Failed"}"#)
        .create();
    let config_dir = tempfile::tempdir().unwrap();

    gist_cmd(&config_dir, &endpoint(&server))
        .arg("s")
        .write_stdin("data")
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#"{"message":"Validation Failed"}"#));
}

#[test]
fn endpoint_from_config_file() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/gists")
        .with_status(201)
        .with_body(r#"{"html_url":"https://gist.example/from-config"}"#)
        .create();
    let config_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_dir.path().join("config.json"),
        json!({ "api_url": endpoint(&server), "timeout_secs": 5 }).to_string(),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("gist").unwrap();
    cmd.env("GIST_CONFIG_DIR", config_dir.path())
        .env_remove("GIST_API_URL")
        .env("GIST_KEY", "test-token")
        .arg("p")
        .write_stdin("data")
        .assert()
        .success()
        .stdout("https://gist.example/from-config\n");

    mock.assert();
}

#[test]
fn license_is_printed() {
    Command::cargo_bin("gist")
        .unwrap()
        .arg("license")
        .assert()
        .success()
        .stdout(predicate::str::contains("MIT license"));
}

#[test]
fn help_lists_upload_commands() {
    Command::cargo_bin("gist")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("public").and(predicate::str::contains("secret")));
}
