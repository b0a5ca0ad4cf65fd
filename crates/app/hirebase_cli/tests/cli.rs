use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `hirebase` with an isolated session file and an unreachable backend.
fn hirebase(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hirebase").unwrap();
    cmd.env("HIREBASE_SESSION_FILE", dir.path().join("session.json"))
        .env("HIREBASE_API_BASE_URL", "http://127.0.0.1:9")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_prints_package_version() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_ignores_bad_configuration() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .env("HIREBASE_TIMEOUT_SECS", "soon")
        .arg("version")
        .assert()
        .success();
    hirebase(&dir)
        .env("HIREBASE_TIMEOUT_SECS", "soon")
        .arg("whoami")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("HIREBASE_TIMEOUT_SECS"));
}

#[test]
fn protected_route_redirects_to_sign_in() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .args(["open", "/jobs"])
        .assert()
        .success()
        .stdout("redirect /signin\n");
}

#[test]
fn public_route_renders_without_session() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .args(["open", "/government-jobs"])
        .assert()
        .success()
        .stdout("render GovernmentJobs\n");
}

#[test]
fn unknown_route_is_not_found() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .args(["open", "/nowhere"])
        .assert()
        .success()
        .stdout("not found\n");
}

#[test]
fn login_persists_token_between_runs() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .args(["login", "--token", "abc"])
        .assert()
        .success();

    let stored = std::fs::read_to_string(dir.path().join("session.json")).unwrap();
    assert!(stored.contains("abc"));

    hirebase(&dir)
        .args(["open", "/jobs"])
        .assert()
        .success()
        .stdout("render Jobs\n");

    // Signed in but not an admin: admin routes send the user home.
    hirebase(&dir)
        .args(["open", "/admin/dashboard"])
        .assert()
        .success()
        .stdout("redirect /\n");
}

#[test]
fn admin_session_opens_admin_routes() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .args(["login", "--token", "abc", "--admin"])
        .assert()
        .success();

    hirebase(&dir)
        .args(["open", "/admin/users/42"])
        .assert()
        .success()
        .stdout("render AdminUserDetail id=42\n");
}

#[test]
fn logout_clears_session() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .args(["login", "--token", "abc", "--admin"])
        .assert()
        .success();
    hirebase(&dir).arg("logout").assert().success();

    hirebase(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout("Not signed in\n");
    hirebase(&dir)
        .args(["open", "/admin/dashboard"])
        .assert()
        .success()
        .stdout("redirect /signin\n");
}

#[test]
fn admin_command_requires_admin_flag() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .args(["login", "--token", "abc"])
        .assert()
        .success();

    hirebase(&dir)
        .args(["admin", "dashboard"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("redirecting to /"));
}

#[test]
fn signed_out_commands_redirect_to_sign_in() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .args(["services", "mine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("redirecting to /signin"));
}

#[test]
fn api_failures_exit_with_status_one() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .args(["login", "--token", "abc"])
        .assert()
        .success();

    hirebase(&dir)
        .args(["services", "mine"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn unknown_export_table_is_rejected() {
    let dir = TempDir::new().unwrap();
    hirebase(&dir)
        .args(["admin", "export", "invoices"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown export table"));
}
