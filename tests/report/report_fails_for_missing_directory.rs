use crate::common::command::{before_dir, run_sesdiff_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_fails_for_missing_directory(before_dir: TempDir) {
    run_sesdiff_command(
        before_dir.path(),
        &["report", ".", "no-such-snapshot"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unable to open no-such-snapshot"));
}
