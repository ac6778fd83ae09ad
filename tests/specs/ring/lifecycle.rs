//! Ring lifecycle specs
//!
//! Verify first-run initialization and slot-by-slot rotation.

use crate::prelude::*;

#[test]
fn first_swap_initializes_a_five_slot_ring() {
    let ring = Ring::empty();
    ring.file("app.js", "console.log('v1')");

    ring.carousel()
        .arg("app.js")
        .passes()
        .stdout_has("Initialized ring")
        .stdout_has("(5 slots)")
        .stdout_has("to slot 0");
}

#[test]
fn swap_reports_where_the_code_went() {
    let ring = Ring::empty();
    ring.file("app.js", "console.log('v1')");

    ring.carousel()
        .arg("app.js")
        .passes()
        .stdout_has("Delivered app.js to slot 0");
}

#[test]
fn second_swap_advances_one_slot() {
    let ring = Ring::empty();
    ring.file("app.js", "console.log('v1')");
    ring.carousel().arg("app.js").passes();

    ring.carousel()
        .arg("app.js")
        .passes()
        .stdout_has("to slot 1")
        .stdout_lacks("Initialized");
}

#[test]
fn sixth_swap_wraps_back_to_slot_zero() {
    let ring = Ring::empty();
    ring.file("app.js", "console.log('v1')");

    for _ in 0..5 {
        ring.carousel().arg("app.js").passes();
    }

    ring.carousel().arg("app.js").passes().stdout_has("to slot 0");
}

#[test]
fn swap_delivers_the_code_to_a_warm_worker() {
    let ring = Ring::empty();
    ring.file("app.js", "console.log('hot')");

    ring.carousel().arg("app.js").passes();

    let received = ring.dir().join("fifo0.received");
    assert!(
        wait_for(SPEC_WAIT_MAX_MS, || received.exists()),
        "worker recorded the payload"
    );
    assert_eq!(
        std::fs::read_to_string(&received).expect("payload"),
        "console.log('hot')"
    );
}

#[test]
fn slots_flag_sizes_a_new_ring() {
    let ring = Ring::empty();
    ring.file("app.js", "x");

    ring.carousel()
        .args(&["app.js", "--slots", "3"])
        .passes()
        .stdout_has("(3 slots)");

    assert_eq!(ring.state()["workers"].as_array().expect("workers").len(), 3);
}

#[test]
fn slots_flag_cannot_resize_an_existing_ring() {
    let ring = Ring::empty();
    ring.file("app.js", "x");
    ring.carousel().arg("app.js").passes();

    // The ring was built with five slots; later invocations rotate it as-is.
    ring.carousel()
        .args(&["app.js", "--slots", "3"])
        .passes()
        .stdout_has("to slot 1");

    assert_eq!(ring.state()["workers"].as_array().expect("workers").len(), 5);
}

#[test]
fn state_survives_between_invocations() {
    let ring = Ring::empty();
    ring.file("app.js", "x");

    ring.carousel().arg("app.js").passes();
    ring.carousel().arg("app.js").passes();

    let state = ring.state();
    assert_eq!(state["locked"], false);
    assert_eq!(state["pointer"], 1);
}

#[test]
fn status_reports_a_missing_ring() {
    let ring = Ring::empty();

    ring.carousel().arg("status").passes().stdout_has("No ring at");
}

#[test]
fn status_describes_a_live_ring() {
    let ring = Ring::empty();
    ring.file("app.js", "x");
    ring.carousel().arg("app.js").passes();

    ring.carousel()
        .arg("status")
        .passes()
        .stdout_has("(5 slots)")
        .stdout_has("locked: no")
        .stdout_has("pointer: slot 0");
}

#[test]
fn status_flags_a_locked_ring() {
    let ring = Ring::empty();
    ring.seed_state(r#"{"locked":true,"pointer":0,"workers":[99991,99992]}"#);

    ring.carousel()
        .arg("status")
        .passes()
        .stdout_has("locked: yes")
        .stdout_has("carousel done");
}
