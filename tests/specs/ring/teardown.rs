//! Ring teardown specs
//!
//! Verify `carousel done` cleanup, idempotence, and lock recovery.

use crate::prelude::*;

#[test]
fn done_reports_the_stopped_workers() {
    let ring = Ring::empty();
    ring.file("app.js", "x");
    ring.carousel().arg("app.js").passes();

    ring.carousel()
        .arg("done")
        .passes()
        .stdout_has("Ring torn down (5 workers stopped)");
}

#[test]
fn done_removes_the_ring_directory() {
    let ring = Ring::empty();
    ring.file("app.js", "x");
    ring.carousel().arg("app.js").passes();

    ring.carousel().arg("done").passes();

    assert!(!ring.dir().exists(), "ring directory removed");
}

#[test]
fn done_without_a_ring_reports_nothing_to_do() {
    let ring = Ring::empty();

    ring.carousel()
        .arg("done")
        .passes()
        .stdout_has("Nothing to tear down");
}

#[test]
fn done_is_idempotent() {
    let ring = Ring::empty();
    ring.file("app.js", "x");
    ring.carousel().arg("app.js").passes();

    ring.carousel().arg("done").passes();
    ring.carousel()
        .arg("done")
        .passes()
        .stdout_has("Nothing to tear down");
}

#[test]
fn locked_ring_error_points_at_done() {
    let ring = Ring::empty();
    ring.seed_state(r#"{"locked":true,"pointer":0,"workers":[99991,99992]}"#);

    ring.carousel()
        .arg("app.js")
        .fails()
        .stderr_has("tear it down");
}

#[test]
fn done_unlocks_a_stuck_ring() {
    let ring = Ring::empty();
    ring.file("app.js", "x");
    ring.seed_state(r#"{"locked":true,"pointer":0,"workers":[99991,99992]}"#);

    ring.carousel().arg("done").passes();

    ring.carousel()
        .arg("app.js")
        .passes()
        .stdout_has("Initialized ring");
}
