use crate::common::command::{after_dir, before_dir, random_text, run_sesdiff_command};
use crate::common::file::write_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_nothing_for_identical_snapshots(
    before_dir: TempDir,
    after_dir: TempDir,
    random_text: String,
) {
    let files = [("1.txt", random_text.as_str()), ("a/2.txt", "two\n")];
    write_files(before_dir.path(), &files);
    write_files(after_dir.path(), &files);

    run_sesdiff_command(
        before_dir.path(),
        &[
            "report",
            before_dir.path().to_str().unwrap(),
            after_dir.path().to_str().unwrap(),
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
}
