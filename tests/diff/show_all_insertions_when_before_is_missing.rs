use crate::common::command::{before_dir, run_sesdiff_command, stdout_of};
use crate::common::file::write_files;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_all_insertions_when_before_is_missing(before_dir: TempDir) {
    write_files(before_dir.path(), &[("after.txt", "x\ny\n")]);

    let actual_output = stdout_of(&mut run_sesdiff_command(
        before_dir.path(),
        &["diff", "does-not-exist.txt", "after.txt"],
    ));

    pretty_assertions::assert_eq!(actual_output, "+ x\n+ y\n");
}
