mod report_changed_deleted_and_new_files_in_path_order;
mod report_fails_for_missing_directory;
mod report_nothing_for_identical_snapshots;
mod report_skipped_files_on_stderr;
