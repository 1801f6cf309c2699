use crate::common::command::{after_dir, before_dir, run_sesdiff_command, stdout_of};
use crate::common::file::write_files;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_changed_deleted_and_new_files_in_path_order(
    before_dir: TempDir,
    after_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_files(
        before_dir.path(),
        &[
            ("same.txt", "unchanged\n"),
            ("src/lib.rs", "a\nb\n"),
            ("gone.txt", "bye\n"),
        ],
    );
    write_files(
        after_dir.path(),
        &[
            ("same.txt", "unchanged\n"),
            ("src/lib.rs", "a\nc\n"),
            ("new.txt", "x\ny\nz\n"),
            ("nested/deep.txt", "deep\n"),
        ],
    );

    let expected_output = r#"=== gone.txt ===
- bye

=== src/lib.rs ===
- b
+ c

=== nested/deep.txt ===
+ deep

=== new.txt ===
+ x
+ y
+ z

"#;
    let actual_output = stdout_of(&mut run_sesdiff_command(
        before_dir.path(),
        &[
            "report",
            before_dir.path().to_str().unwrap(),
            after_dir.path().to_str().unwrap(),
        ],
    ));

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
