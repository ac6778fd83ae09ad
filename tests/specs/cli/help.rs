//! CLI help specs

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    let ring = Ring::empty();

    ring.carousel()
        .arg("--help")
        .passes()
        .stdout_has("Usage")
        .stdout_has("carousel");
}

#[test]
fn help_documents_the_flags() {
    let ring = Ring::empty();

    ring.carousel()
        .arg("--help")
        .passes()
        .stdout_has("--ring-dir")
        .stdout_has("--slots")
        .stdout_has("--worker-cmd");
}

#[test]
fn help_documents_the_special_targets() {
    let ring = Ring::empty();

    ring.carousel()
        .arg("--help")
        .passes()
        .stdout_has("done")
        .stdout_has("status");
}

#[test]
fn version_flag_prints_the_version() {
    let ring = Ring::empty();

    ring.carousel().arg("--version").passes().stdout_has("carousel");
}
