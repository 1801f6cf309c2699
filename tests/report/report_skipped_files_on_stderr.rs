use crate::common::command::{after_dir, before_dir, run_sesdiff_command};
use crate::common::file::write_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_skipped_files_on_stderr(before_dir: TempDir, after_dir: TempDir) {
    write_files(
        before_dir.path(),
        &[("rewritten.txt", "1\n2\n3\n"), ("touched.txt", "a\nb\n")],
    );
    write_files(
        after_dir.path(),
        &[("rewritten.txt", "4\n5\n6\n"), ("touched.txt", "a\nb\nc\n")],
    );

    run_sesdiff_command(
        before_dir.path(),
        &[
            "report",
            "--max-edit-distance",
            "2",
            before_dir.path().to_str().unwrap(),
            after_dir.path().to_str().unwrap(),
        ],
    )
    .assert()
    .success()
    .stdout("=== touched.txt ===\n+ c\n\n")
    .stderr(predicate::str::contains(
        "skipped rewritten.txt: edit distance exceeds 2",
    ));
}
