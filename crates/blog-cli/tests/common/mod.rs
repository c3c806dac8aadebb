use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use url::Url;

/// `file://` URL for a local store directory.
pub fn file_api_url(path: &Path) -> String {
    Url::from_directory_path(path)
        .expect("Failed to convert path to file URL")
        .to_string()
}

/// The CLI binary with an isolated HOME and config directory and no colors.
pub fn cli(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_blog"));
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env("NO_COLOR", "1");
    cmd.env("CLICOLOR", "0");
    cmd.env_remove("BLOG_API_URL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run the CLI against the given gateway URL.
pub fn run_cli_with_env(args: &[&str], home: &Path, api_url: &str) -> Output {
    let mut cmd = cli(home);
    cmd.args(args);
    cmd.env("BLOG_API_URL", api_url);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI against the given gateway URL and expect success.
pub fn run_cli_with_env_success(args: &[&str], home: &Path, api_url: &str) -> String {
    let output = run_cli_with_env(args, home, api_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI with `input` on stdin.
pub fn run_cli_with_stdin(args: &[&str], home: &Path, api_url: &str, input: &str) -> Output {
    let mut cmd = cli(home);
    cmd.args(args);
    cmd.env("BLOG_API_URL", api_url);
    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for CLI")
}

/// Create a blog and return its id.
pub fn create_blog(home: &Path, api_url: &str, title: &str, author: &str, tags: &str) -> String {
    let stdout = run_cli_with_env_success(
        &[
            "create", "--title", title, "--content", "Some content", "--author", author,
            "--tags", tags,
        ],
        home,
        api_url,
    );
    stdout
        .lines()
        .next()
        .expect("create prints the new id")
        .trim()
        .to_string()
}
