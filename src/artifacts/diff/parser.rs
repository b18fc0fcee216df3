//! Unified diff text parser
//!
//! Splits `git diff` output into `diff --git` regions and parses each region
//! into a [`FileDiff`]. Parsing never fails: unmatched hunk headers are
//! dropped, unknown body prefixes count as context, and a region without
//! path lines yields empty paths.
//!
//! ## Region grammar
//!
//! ```text
//! diff --git a/<path> b/<path>
//! [new file mode <mode> | deleted file mode <mode> | old mode <mode> | new mode <mode>]
//! [index <oid>..<oid>[ <mode>]]
//! [Binary files <a> and <b> differ]
//! --- a/<path> | /dev/null
//! +++ b/<path> | /dev/null
//! @@ -a[,b] +c[,d] @@[ trailer]
//! (+|-| |\)<content>
//! ```
//!
//! Path lines are only honoured before the first `@@` line of a region, so
//! deleted content starting with `--` is never read as a path.

use crate::artifacts::diff::body_line::BodyLine;
use crate::artifacts::diff::file_diff::{
    Diff, DiffHunk, DiffLine, FileDiff, FileFlags, NULL_PATH,
};
use crate::artifacts::diff::hunk_header::HunkHeader;

const FILE_HEADER_PREFIX: &str = "diff --git";
const HUNK_HEADER_PREFIX: &str = "@@";
const OLD_PATH_PREFIX: &str = "--- ";
const NEW_PATH_PREFIX: &str = "+++ ";
const NEW_FILE_MODE_PREFIX: &str = "new file mode ";
const DELETED_FILE_MODE_PREFIX: &str = "deleted file mode ";
const OLD_MODE_PREFIX: &str = "old mode ";
const NEW_MODE_PREFIX: &str = "new mode ";
const INDEX_PREFIX: &str = "index ";

/// Parses multi-file unified diff text
///
/// Empty input yields an empty [`Diff`]. Text before the first
/// `diff --git` line is ignored.
pub fn parse_diff(raw: &str) -> Diff {
    let mut files = Vec::new();
    let mut region: Option<Vec<&str>> = None;

    for line in raw.split_terminator('\n') {
        if line.starts_with(FILE_HEADER_PREFIX) {
            if let Some(lines) = region.take() {
                files.push(parse_file_region(&lines));
            }
            region = Some(Vec::new());
        }

        match region.as_mut() {
            Some(lines) => lines.push(line),
            None => log::trace!("skipping preamble line outside any file region: {line:?}"),
        }
    }

    if let Some(lines) = region.take() {
        files.push(parse_file_region(&lines));
    }

    log::debug!("parsed {} file(s) from {} bytes of diff text", files.len(), raw.len());

    Diff::new(raw.to_string(), files)
}

/// Parses the lines of one `diff --git` region, header line included
pub fn parse_file_region(lines: &[&str]) -> FileDiff {
    let mut parser = FileRegionParser::default();

    let Some((header, body)) = lines.split_first() else {
        return parser.finish();
    };
    parser.file.header_path = header_path(header);

    for line in body {
        parser.feed(line);
    }

    parser.finish()
}

/// Hunk under construction plus its running line counters
struct OpenHunk {
    hunk: DiffHunk,
    old_line: usize,
    new_line: usize,
}

impl OpenHunk {
    fn new(header: HunkHeader) -> Self {
        Self {
            old_line: header.old_start,
            new_line: header.new_start,
            hunk: DiffHunk::from_header(header),
        }
    }

    fn push(&mut self, body_line: BodyLine) {
        match body_line {
            BodyLine::Addition(content) => {
                self.hunk
                    .lines
                    .push(DiffLine::addition(content, self.new_line));
                self.new_line = self.new_line.saturating_add(1);
            }
            BodyLine::Deletion(content) => {
                self.hunk
                    .lines
                    .push(DiffLine::deletion(content, self.old_line));
                self.old_line = self.old_line.saturating_add(1);
            }
            BodyLine::Context(content) | BodyLine::Unknown(content) => {
                self.hunk
                    .lines
                    .push(DiffLine::context(content, self.old_line, self.new_line));
                self.old_line = self.old_line.saturating_add(1);
                self.new_line = self.new_line.saturating_add(1);
            }
            BodyLine::NoNewlineMarker => {
                if let Some(last) = self.hunk.lines.last_mut() {
                    last.has_newline = false;
                }
            }
        }
    }
}

#[derive(Default)]
struct FileRegionParser {
    file: FileDiff,
    open_hunk: Option<OpenHunk>,
    seen_hunk_header: bool,
    /// Mode from `new file mode`/`deleted file mode`, which outranks the others
    file_mode_locked: bool,
}

impl FileRegionParser {
    fn feed(&mut self, line: &str) {
        if line.starts_with(HUNK_HEADER_PREFIX) {
            self.flush_hunk();
            self.seen_hunk_header = true;

            match HunkHeader::try_parse(line) {
                Some(header) => self.open_hunk = Some(OpenHunk::new(header)),
                None => log::debug!("dropping unparseable hunk header: {line:?}"),
            }
            return;
        }

        if let Some(open_hunk) = self.open_hunk.as_mut() {
            open_hunk.push(BodyLine::classify(line));
            return;
        }

        self.feed_header(line);
    }

    fn feed_header(&mut self, line: &str) {
        if !self.seen_hunk_header {
            if let Some(path) = line.strip_prefix(OLD_PATH_PREFIX) {
                self.file.old_path = normalize_path(path, "a/");
                return;
            }
            if let Some(path) = line.strip_prefix(NEW_PATH_PREFIX) {
                self.file.new_path = normalize_path(path, "b/");
                return;
            }
        }

        if let Some(mode) = line.strip_prefix(NEW_FILE_MODE_PREFIX) {
            self.file.flags |= FileFlags::NEW_FILE;
            self.lock_mode(mode);
        } else if let Some(mode) = line.strip_prefix(DELETED_FILE_MODE_PREFIX) {
            self.file.flags |= FileFlags::DELETED_FILE;
            self.lock_mode(mode);
        } else if let Some(mode) = line.strip_prefix(NEW_MODE_PREFIX) {
            self.offer_mode(mode);
        } else if let Some(mode) = line.strip_prefix(OLD_MODE_PREFIX)
            && self.file.mode.is_none()
        {
            self.offer_mode(mode);
        } else if let Some(index) = line.strip_prefix(INDEX_PREFIX)
            && let Some(mode) = index.split_whitespace().nth(1)
            && self.file.mode.is_none()
        {
            self.offer_mode(mode);
        } else if is_binary_marker(line) {
            self.file.flags |= FileFlags::BINARY;
        }
    }

    fn lock_mode(&mut self, mode: &str) {
        self.file.mode = Some(mode.trim().to_string());
        self.file_mode_locked = true;
    }

    fn offer_mode(&mut self, mode: &str) {
        if !self.file_mode_locked {
            self.file.mode = Some(mode.trim().to_string());
        }
    }

    fn flush_hunk(&mut self) {
        if let Some(open_hunk) = self.open_hunk.take() {
            self.file.hunks.push(open_hunk.hunk);
        }
    }

    fn finish(mut self) -> FileDiff {
        self.flush_hunk();

        if self.file.is_binary() && !self.file.hunks.is_empty() {
            log::debug!(
                "discarding {} hunk(s) of binary file {:?}",
                self.file.hunks.len(),
                self.file.display_path()
            );
            self.file.hunks.clear();
        }

        self.file
    }
}

fn is_binary_marker(line: &str) -> bool {
    line.find("Binary files ")
        .is_some_and(|start| line[start..].contains(" differ"))
}

/// New-side path named by a `diff --git a/<old> b/<new>` line
fn header_path(line: &str) -> String {
    let paths = line
        .strip_prefix(FILE_HEADER_PREFIX)
        .unwrap_or(line)
        .trim();

    match paths.rfind(" b/") {
        Some(idx) => paths[idx + 3..].to_string(),
        None => paths
            .split_whitespace()
            .last()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Strips the `a/`/`b/` prefix and any tab-separated timestamp; `/dev/null` maps to `""`
fn normalize_path(path: &str, side_prefix: &str) -> String {
    let path = path.split('\t').next().unwrap_or_default().trim_end();

    if path == NULL_PATH {
        return String::new();
    }

    path.strip_prefix(side_prefix).unwrap_or(path).to_string()
}
