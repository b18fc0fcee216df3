use crate::areas::engine::DiffEngine;
use crate::artifacts::diff::file_diff::{Diff, FileDiff};
use colored::{ColoredString, Colorize};
use std::io::Write;

/// Single-letter change status, as in `git diff --name-status` (B for binary)
pub fn file_status(file: &FileDiff) -> char {
    if file.is_binary() {
        'B'
    } else if file.is_new_file() {
        'A'
    } else if file.is_deleted_file() {
        'D'
    } else {
        'M'
    }
}

fn colored_status(status: char) -> ColoredString {
    let status = status.to_string();
    match status.as_str() {
        "A" => status.green(),
        "D" => status.red(),
        "B" => status.magenta(),
        _ => status.yellow(),
    }
}

impl DiffEngine {
    pub fn files(&self, diff: &Diff, writer: &mut dyn Write) -> anyhow::Result<()> {
        if diff.is_empty() {
            writeln!(writer, "No changes")?;
            return Ok(());
        }

        for file in &diff.files {
            let status = colored_status(file_status(file));

            if file.is_binary() {
                writeln!(writer, "{} {} (binary)", status, file.display_path())?;
                continue;
            }

            let hunks = match file.hunks.len() {
                1 => "1 hunk".to_string(),
                n => format!("{n} hunks"),
            };
            writeln!(
                writer,
                "{} {} {} {} ({})",
                status,
                file.display_path(),
                format!("+{}", file.additions()).green(),
                format!("-{}", file.deletions()).red(),
                hunks
            )?;
        }

        Ok(())
    }
}
