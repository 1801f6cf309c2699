use crate::common::command::{before_dir, run_sesdiff_command, stdout_of};
use crate::common::file::write_files;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn strip_carriage_returns_when_requested(before_dir: TempDir) {
    write_files(
        before_dir.path(),
        &[("dos.txt", "one\r\ntwo\r\n"), ("unix.txt", "one\ntwo\nthree\n")],
    );

    let preserved = stdout_of(&mut run_sesdiff_command(
        before_dir.path(),
        &["diff", "dos.txt", "unix.txt"],
    ));
    let stripped = stdout_of(&mut run_sesdiff_command(
        before_dir.path(),
        &["--strip-cr", "diff", "dos.txt", "unix.txt"],
    ));

    pretty_assertions::assert_eq!(
        preserved,
        "- one\r\n- two\r\n+ one\n+ two\n+ three\n"
    );
    pretty_assertions::assert_eq!(stripped, "+ three\n");
}
