use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn base_cmd(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hub"));
    cmd.env("HUB_CONFIG", config)
        .env_remove("HUB_HOST")
        .env_remove("HUB_REPO")
        .env_remove("HUB_PROTOCOL")
        .env_remove("HUB_DEBUG");
    for var in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy"] {
        cmd.env_remove(var);
    }
    cmd
}

fn write_hosts(dir: &Path, host: &str, token: &str) -> PathBuf {
    let path = dir.join("hosts.toml");
    let contents = format!(
        "[hosts.\"{host}\"]\nuser = \"octocat\"\noauth_token = \"{token}\"\nprotocol = \"http\"\n"
    );
    fs::write(&path, contents).expect("write hosts");
    path
}

#[test]
fn version_flag_prints_version() {
    let dir = tempdir().expect("tempdir");
    base_cmd(&dir.path().join("hosts.toml"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_command_prints_version() {
    let dir = tempdir().expect("tempdir");
    base_cmd(&dir.path().join("hosts.toml"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hub version"));
}

#[test]
fn auth_status_without_hosts() {
    let dir = tempdir().expect("tempdir");
    base_cmd(&dir.path().join("hosts.toml"))
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn repo_view_uses_saved_token() {
    let mut server = Server::new();
    let host = server.host_with_port();
    let mock = server
        .mock("GET", "/api/v3/repos/octocat/hello")
        .match_header("authorization", "token saved-token")
        .with_body(
            r#"{"id": 1, "name": "hello", "full_name": "octocat/hello",
                "private": false, "html_url": "http://example.test/octocat/hello",
                "default_branch": "main"}"#,
        )
        .create();

    let dir = tempdir().expect("tempdir");
    let config = write_hosts(dir.path(), &host, "saved-token");

    base_cmd(&config)
        .args(["repo", "view", "-R", "octocat/hello", "--host", &host, "--protocol", "http"])
        .assert()
        .success()
        .stdout(predicate::str::contains("octocat/hello"));

    mock.assert();
}

#[test]
fn repo_view_json_output() {
    let mut server = Server::new();
    let host = server.host_with_port();
    server
        .mock("GET", "/api/v3/repos/octocat/hello")
        .with_body(
            r#"{"id": 1, "name": "hello", "full_name": "octocat/hello",
                "private": true, "html_url": "http://example.test/octocat/hello"}"#,
        )
        .create();

    let dir = tempdir().expect("tempdir");
    let config = write_hosts(dir.path(), &host, "saved-token");

    base_cmd(&config)
        .args(["repo", "view", "--json", "-R", "octocat/hello", "--host", &host, "--protocol", "http"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"full_name\": \"octocat/hello\""));
}

#[test]
fn repo_view_not_found_exit_code() {
    let mut server = Server::new();
    let host = server.host_with_port();
    server
        .mock("GET", "/api/v3/repos/octocat/missing")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create();

    let dir = tempdir().expect("tempdir");
    let config = write_hosts(dir.path(), &host, "saved-token");

    base_cmd(&config)
        .args(["repo", "view", "-R", "octocat/missing", "--host", &host, "--protocol", "http"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains(
            "Error getting repository: Not Found (HTTP 404)",
        ));
}

#[test]
fn ci_status_exit_code_follows_state() {
    let mut server = Server::new();
    let host = server.host_with_port();
    server
        .mock("GET", "/api/v3/repos/octocat/hello/statuses/deadbeef")
        .match_query(Matcher::Any)
        .with_body(r#"[{"state": "pending", "context": "ci"}]"#)
        .create();

    let dir = tempdir().expect("tempdir");
    let config = write_hosts(dir.path(), &host, "saved-token");

    base_cmd(&config)
        .args(["ci-status", "deadbeef", "-R", "octocat/hello", "--host", &host, "--protocol", "http"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("pending"));
}
