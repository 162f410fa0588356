use std::fs;
use std::process::{Command, Output};

fn argdump(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argdump"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run argdump")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn prints_bound_settings() {
    let output = argdump(&["-h", "example.com", "-p", "636", "-s", "one", "list", "-v"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("host: example.com\n"), "{}", out);
    assert!(out.contains("port: 636\n"));
    assert!(out.contains("scope: one\n"));
    // -v after the first operand is still matched.
    assert!(out.contains("verbose: true\n"));
    assert!(out.ends_with("operands: list -v\n"));
}

#[test]
fn quiet_prints_operands_only() {
    let output = argdump(&["-q", "--", "-p", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-p 1\n");
}

#[test]
fn grouped_flags() {
    let output = argdump(&["-qH"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Usage: argdump"));
}

#[test]
fn invalid_value_fails_before_help() {
    let output = argdump(&["--help", "--port", "nonsense"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid value for -p/--port: 'nonsense'"));
}

#[test]
fn verbose_logs_to_stderr() {
    let output = argdump(&["-v", "-D", "admin"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("user: admin\n"));
    assert!(stderr(&output).contains("bound"));
}

#[test]
fn verbose_logs_conversion_failures() {
    let output = argdump(&["-v", "--port", "http"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("cannot convert \"http\""), "{}", err);
    assert!(err.contains("argdump: command line: invalid value for -p/--port: 'http'"));
}

#[test]
fn config_file_after_boolean_key_binds_later_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("argdump.properties");
    fs::write(&path, "verbose=true\nhost=db.internal\nport=5432\n").unwrap();

    let output = argdump(&["-f", path.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("host: db.internal\n"), "{}", out);
    assert!(out.contains("port: 5432\n"));
    assert!(out.contains("verbose: true\n"));
}

#[test]
fn config_file_layers_under_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("argdump.properties");
    fs::write(&path, "# local\nhost=db.internal\nport=5432\ntimeout=1.5\n").unwrap();

    let output = argdump(&["--config", path.to_str().unwrap(), "--port", "6432"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("host: db.internal\n"));
    assert!(out.contains("port: 6432\n"));
    assert!(out.contains("timeout: 1.5\n"));
    assert!(out.contains(&format!("config: {}\n", path.display())));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.properties");
    let output = argdump(&["-f", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("argdump: cannot read "));
}
