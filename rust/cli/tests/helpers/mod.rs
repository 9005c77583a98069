//! Shared harness for the run-level CLI tests.

#![allow(dead_code)]

use sixmax_cli::config::{CONFIG_ENV, HISTORY_ENV, SEED_ENV, STACK_ENV};
use std::io::Cursor;

pub struct Output {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Removes every `SIXMAX_*` override so a test starts from defaults.
/// Callers must hold the `serial` lock.
pub fn clear_env() {
    for key in [CONFIG_ENV, SEED_ENV, STACK_ENV, HISTORY_ENV] {
        unsafe { std::env::remove_var(key) };
    }
}

pub fn set_env(key: &str, value: impl AsRef<std::ffi::OsStr>) {
    unsafe { std::env::set_var(key, value) };
}

pub fn run(args: &[&str]) -> Output {
    run_with_stdin(args, "")
}

pub fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let code = sixmax_cli::run_with_input(args.iter().copied(), &mut out, &mut err, &mut stdin);
    Output {
        code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}
