use crate::areas::engine::DiffEngine;
use crate::artifacts::diff::file_diff::{Diff, DiffLine, FileDiff};
use crate::artifacts::diff::word_diff::WordSegment;
use crate::commands::porcelain::files::file_status;
use colored::{ColoredString, Colorize};
use std::io::Write;

pub const DEFAULT_SPLIT_WIDTH: usize = 60;

const SEPARATOR: &str = " | ";

#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Characters reserved for the old side's text column
    pub width: usize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_SPLIT_WIDTH,
        }
    }
}

impl DiffEngine {
    pub fn split(
        &self,
        diff: &Diff,
        opts: &SplitOptions,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        if diff.is_empty() {
            writeln!(writer, "No changes")?;
            return Ok(());
        }

        for file in &diff.files {
            self.split_file(file, opts, writer)?;
        }

        Ok(())
    }

    fn split_file(
        &self,
        file: &FileDiff,
        opts: &SplitOptions,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        writeln!(
            writer,
            "{}",
            format!("{} {}", file_status(file), file.display_path()).bold()
        )?;

        if file.is_binary() {
            writeln!(writer, "Binary file not shown")?;
            return Ok(());
        }

        let mut current_hunk = None;
        for row in self.split_view(file) {
            if current_hunk != Some(row.row.hunk_index) {
                current_hunk = Some(row.row.hunk_index);
                if let Some(hunk) = file.hunk_for_row(&row.row) {
                    writeln!(writer, "{}", hunk.header_line().cyan())?;
                }
            }

            let old_cell = render_cell(&row.old_segments, Some(opts.width), |s| s.red());
            let new_cell = render_cell(&row.new_segments, None, |s| s.green());

            writeln!(
                writer,
                "{} {}{}{} {}",
                line_number(row.row.old_line.as_ref().and_then(|l| l.old_line_number)),
                old_cell,
                SEPARATOR,
                line_number(row.row.new_line.as_ref().and_then(|l| l.new_line_number)),
                new_cell
            )?;

            if let Some(note) = missing_newline_note(row.row.old_line.as_ref(), row.row.new_line.as_ref()) {
                writeln!(writer, "{}", note.dimmed())?;
            }
        }

        Ok(())
    }
}

fn line_number(number: Option<usize>) -> String {
    match number {
        Some(number) => format!("{number:>4}"),
        None => " ".repeat(4),
    }
}

fn missing_newline_note(old: Option<&DiffLine>, new: Option<&DiffLine>) -> Option<&'static str> {
    let missing = |line: Option<&DiffLine>| line.is_some_and(|l| !l.has_newline);

    (missing(old) || missing(new)).then_some("\\ No newline at end of file")
}

/// Joins segments, highlighting changed ones, truncated and padded to `width` characters
fn render_cell(
    segments: &[WordSegment],
    width: Option<usize>,
    highlight: impl Fn(&str) -> ColoredString,
) -> String {
    let mut cell = String::new();
    let mut used = 0;

    for segment in segments {
        let text: String = match width {
            Some(width) => segment.text.chars().take(width - used).collect(),
            None => segment.text.clone(),
        };
        used += text.chars().count();

        if segment.is_changed {
            cell.push_str(&highlight(&text).to_string());
        } else {
            cell.push_str(&text);
        }

        if width.is_some_and(|width| used >= width) {
            break;
        }
    }

    if let Some(width) = width {
        cell.push_str(&" ".repeat(width.saturating_sub(used)));
    }

    cell
}
