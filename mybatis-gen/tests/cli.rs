use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

/// 在指定目录下运行 mybatis-gen，通过标准输入传入 DDL
fn run_cli(cwd: &Path, args: &[&str], envs: &[(&str, &str)], stdin: &str) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_mybatis-gen"));
    command
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("MYBATIS_GEN_LOG_FILE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        command.env(key, value);
    }

    let mut child = command.spawn().unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_error_reaches_stderr_when_logging_to_file() {
    let temp_dir = tempdir().unwrap();
    let log_file = temp_dir.path().join("log.txt");

    let output = run_cli(
        temp_dir.path(),
        &["generate", "--dry-run"],
        &[("MYBATIS_GEN_LOG_FILE", log_file.to_str().unwrap())],
        "CREATE TABLE users (id INT)",
    );

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(output.stdout.is_empty());
    assert!(std::fs::read_to_string(&log_file).unwrap().contains("ERROR"));
}

#[test]
fn test_error_reaches_stderr_with_logging_off() {
    let temp_dir = tempdir().unwrap();

    let output = run_cli(
        temp_dir.path(),
        &["generate", "--dry-run"],
        &[("RUST_LOG", "off")],
        "CREATE TABLE users (id INT)",
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().filter(|line| !line.is_empty()).count(), 1);
}

#[test]
fn test_missing_explicit_config_exits_with_error() {
    let temp_dir = tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("mybatis-gen.toml"),
        "[output]\nlanguage = \"typescript\"\n",
    )
    .unwrap();

    let output = run_cli(
        temp_dir.path(),
        &["-c", "does-not-exist.toml", "generate", "--sample", "--dry-run"],
        &[],
        "",
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.toml"));
}

#[test]
fn test_default_config_file_is_picked_up() {
    let temp_dir = tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("mybatis-gen.toml"),
        "[output]\nlanguage = \"typescript\"\n",
    )
    .unwrap();

    let output = run_cli(temp_dir.path(), &["generate", "--sample", "--dry-run"], &[], "");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("===== Users.ts ====="));
    assert!(stdout.contains("===== usersMapper.xml ====="));
}

#[test]
fn test_init_then_generate_with_explicit_config() {
    let temp_dir = tempdir().unwrap();

    let init = run_cli(temp_dir.path(), &["-c", "custom.toml", "init"], &[], "");
    assert!(init.status.success());
    assert!(temp_dir.path().join("custom.toml").exists());

    let output = run_cli(
        temp_dir.path(),
        &["-c", "custom.toml", "generate", "--output-dir", "out"],
        &[],
        "CREATE TABLE `users` (\n  `id` INT(11) COMMENT '用户ID'\n);",
    );
    assert!(output.status.success());
    assert!(temp_dir.path().join("out/Users.java").exists());
    assert!(temp_dir.path().join("out/usersMapper.xml").exists());
}
