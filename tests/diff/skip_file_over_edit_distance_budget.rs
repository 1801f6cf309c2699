use crate::common::command::{before_dir, run_sesdiff_command};
use crate::common::file::write_files;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case("1", false)]
#[case("4", true)]
fn skip_file_over_edit_distance_budget(
    before_dir: TempDir,
    #[case] limit: &str,
    #[case] within_budget: bool,
) {
    write_files(before_dir.path(), &[("a.txt", "a\nb\n"), ("b.txt", "c\nd\n")]);

    let assert = run_sesdiff_command(
        before_dir.path(),
        &["diff", "a.txt", "b.txt", "--max-edit-distance", limit],
    )
    .assert()
    .success();

    if within_budget {
        assert
            .stdout("- a\n- b\n+ c\n+ d\n")
            .stderr(predicate::str::contains("skipped").not());
    } else {
        assert
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "skipped b.txt: edit distance exceeds 1",
            ));
    }
}
