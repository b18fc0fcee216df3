use assert_fs::TempDir;
use common::{mixed_diff, run_diffkit_command, single_change_diff, work_dir, write_diff_file};
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn files_lists_every_file_in_the_diff(
    work_dir: TempDir,
    mixed_diff: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = write_diff_file(&work_dir, "changes.diff", &mixed_diff);

    let output = run_diffkit_command(work_dir.path(), &["files", path.to_str().unwrap()])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = "M src/app.rs +3 -3 (2 hunks)
A docs/new.md +2 -0 (1 hunk)
D old.txt +0 -1 (1 hunk)
B assets/icon.png (binary)
";
    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}

#[rstest]
fn files_reads_from_stdin(work_dir: TempDir, single_change_diff: String) {
    run_diffkit_command(work_dir.path(), &["files"])
        .write_stdin(single_change_diff)
        .assert()
        .success()
        .stdout("M five.txt +1 -1 (1 hunk)\n");
}

#[rstest]
fn empty_input_reports_no_changes(work_dir: TempDir) {
    run_diffkit_command(work_dir.path(), &["split"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("No changes\n");
}

#[rstest]
fn split_pairs_the_changed_line(
    work_dir: TempDir,
    single_change_diff: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_diffkit_command(work_dir.path(), &["split", "--width", "6"])
        .write_stdin(single_change_diff)
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = "M five.txt
@@ -1,5 +1,5 @@
   1 one    |    1 one
   2 two    |    2 two
   3 old    |    3 new
   4 four   |    4 four
   5 five   |    5 five
";
    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}

#[rstest]
fn split_prints_each_hunk_header(work_dir: TempDir, mixed_diff: String) {
    run_diffkit_command(work_dir.path(), &["split"])
        .write_stdin(mixed_diff)
        .assert()
        .success()
        .stdout(predicate::str::contains("@@ -3,6 +3,7 @@ use std::io;"))
        .stdout(predicate::str::contains("@@ -20,3 +21,2 @@ fn run() {"))
        .stdout(predicate::str::contains("\\ No newline at end of file"))
        .stdout(predicate::str::contains("Binary file not shown"));
}

#[rstest]
fn words_marks_changed_spans(work_dir: TempDir) {
    run_diffkit_command(work_dir.path(), &["words", "foo bar", "foo baz"])
        .assert()
        .success()
        .stdout("- foo [-bar-]\n+ foo {+baz+}\n");
}

#[rstest]
fn words_respects_character_limit(work_dir: TempDir) {
    run_diffkit_command(
        work_dir.path(),
        &["--max-word-chars", "4", "words", "foo bar", "foo baz"],
    )
    .assert()
    .success()
    .stdout("- [-foo bar-]\n+ {+foo baz+}\n");
}

#[rstest]
fn missing_file_is_reported(work_dir: TempDir) {
    run_diffkit_command(work_dir.path(), &["files", "does-not-exist.diff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read diff from"));
}
