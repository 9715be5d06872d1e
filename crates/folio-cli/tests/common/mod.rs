use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI binary with arguments against an isolated HOME and store.
pub fn run_cli(args: &[&str], home: &Path, store: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
    cmd.args(args);
    cmd.arg("--store");
    cmd.arg(store);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env_remove("FOLIO_PASSWORD");
    cmd.env_remove("FOLIO_STORE");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], home: &Path, store: &Path) -> String {
    let output = run_cli(args, home, store);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Register an account and leave its session active.
pub fn register(email: &str, name: &str, password: &str, home: &Path, store: &Path) {
    run_cli_success(
        &[
            "register",
            "--email",
            email,
            "--name",
            name,
            "--password",
            password,
        ],
        home,
        store,
    );
}

/// Create a portfolio and return its id (first stdout line).
pub fn create_portfolio(template: &str, home: &Path, store: &Path) -> String {
    let stdout = run_cli_success(&["create", template], home, store);
    stdout
        .lines()
        .next()
        .expect("create printed no id")
        .trim()
        .to_string()
}
