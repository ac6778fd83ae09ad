//! CLI error specs
//!
//! Verify bad invocations fail with a useful message.

use crate::prelude::*;

#[test]
fn missing_target_shows_usage() {
    let ring = Ring::empty();

    ring.carousel().fails().stderr_has("Usage");
}

#[test]
fn unknown_flag_is_rejected() {
    let ring = Ring::empty();

    ring.carousel()
        .args(&["app.js", "--frobnicate"])
        .fails()
        .stderr_has("--frobnicate");
}

#[test]
fn slots_flag_rejects_non_numbers() {
    let ring = Ring::empty();

    ring.carousel()
        .args(&["app.js", "--slots", "many"])
        .fails()
        .stderr_has("invalid value");
}

#[test]
fn ring_too_small_to_rotate_is_rejected() {
    let ring = Ring::empty();
    ring.file("app.js", "x");

    ring.carousel()
        .args(&["app.js", "--slots", "1"])
        .fails()
        .stderr_has("at least 2 slots");

    assert!(!ring.dir().exists(), "nothing was provisioned");
}

#[test]
fn missing_source_file_is_reported() {
    let ring = Ring::empty();

    ring.carousel()
        .arg("ghost.js")
        .fails()
        .stderr_has("ghost.js")
        .stderr_has("failed to read code source");
}
