// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use assert_cmd::Command;
use tempfile::TempDir;

/// A stand-in worker: detaches from the invoking terminal, records the
/// first payload its channel delivers, then parks. The record is staged in
/// a temp file and renamed into place, so `<channel>.received` only ever
/// appears with the complete payload. A watchdog exits the worker once its
/// channel disappears, so no test run leaks processes.
const WORKER_SCRIPT: &str = r#"#!/bin/sh
exec </dev/null >/dev/null 2>&1
( while [ -p "$1" ]; do sleep 1; done; kill $$ ) &
cat "$1" > "$1.tmp" && mv "$1.tmp" "$1.received"
while :; do sleep 1; done
"#;

/// Temp home for one test's ring: a worker script, a ring directory path,
/// and source files live under a private temp dir.
pub struct RingEnv {
    temp: TempDir,
}

impl RingEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("temp dir");
        let worker = temp.path().join("worker.sh");
        fs::write(&worker, WORKER_SCRIPT).expect("worker script");
        let mut perms = fs::metadata(&worker).expect("worker metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&worker, perms).expect("worker permissions");
        Self { temp }
    }

    pub fn ring_dir(&self) -> PathBuf {
        self.temp.path().join("ring")
    }

    pub fn channel(&self, slot: usize) -> PathBuf {
        self.ring_dir().join(format!("fifo{slot}"))
    }

    pub fn state_path(&self) -> PathBuf {
        self.ring_dir().join("state.json")
    }

    /// Write a source file to deliver.
    pub fn source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        fs::write(&path, content).expect("source file");
        path
    }

    /// A `carousel` command pointed at this ring.
    pub fn carousel(&self) -> Command {
        let mut cmd = Command::cargo_bin("carousel").expect("carousel binary");
        cmd.env("CAROUSEL_DIR", self.ring_dir());
        cmd.env("CAROUSEL_WORKER", self.temp.path().join("worker.sh"));
        cmd.current_dir(self.temp.path());
        cmd
    }

    /// Parse the persisted state document.
    pub fn state(&self) -> serde_json::Value {
        let bytes = fs::read(self.state_path()).expect("state.json");
        serde_json::from_slice(&bytes).expect("state.json parses")
    }

    /// Worker pids from the persisted state.
    pub fn worker_pids(&self) -> Vec<u32> {
        self.state()["workers"]
            .as_array()
            .expect("workers array")
            .iter()
            .map(|v| u32::try_from(v.as_u64().expect("pid")).expect("pid fits"))
            .collect()
    }
}

/// Poll `f` until it returns true or `timeout_ms` elapses.
pub fn wait_for(timeout_ms: u64, mut f: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        if f() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}

/// Whether a pid still answers signal 0.
pub fn pid_alive(pid: u32) -> bool {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    kill(Pid::from_raw(pid as i32), None).is_ok()
}
