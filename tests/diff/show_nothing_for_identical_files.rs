use crate::common::command::{before_dir, random_text, run_sesdiff_command};
use crate::common::file::write_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_nothing_for_identical_files(before_dir: TempDir, random_text: String) {
    write_files(
        before_dir.path(),
        &[("one.txt", &random_text), ("two.txt", &random_text)],
    );

    run_sesdiff_command(before_dir.path(), &["diff", "one.txt", "two.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
