mod show_all_deletions_when_after_is_missing;
mod show_all_insertions_when_before_is_missing;
mod show_nothing_for_identical_files;
mod skip_file_over_edit_distance_budget;
mod strip_carriage_returns_when_requested;
