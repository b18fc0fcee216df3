//! Structured model of a parsed unified diff
//!
//! A [`Diff`] owns one [`FileDiff`] per `diff --git` region, each made of
//! [`DiffHunk`]s whose [`DiffLine`]s carry old/new line numbers.

use crate::artifacts::diff::hunk_header::HunkHeader;
use crate::artifacts::diff::line_aligner::AlignedDiffLine;
use bitflags::bitflags;
use derive_new::new;

/// Path used by git for the missing side of an added or deleted file
pub const NULL_PATH: &str = "/dev/null";

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FileFlags: u8 {
        const BINARY = 0b001;
        const NEW_FILE = 0b010;
        const DELETED_FILE = 0b100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    Context,
    Addition,
    Deletion,
}

/// One content line of a hunk, with its prefix character stripped
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct DiffLine {
    pub line_type: LineType,
    pub content: String,
    pub old_line_number: Option<usize>,
    pub new_line_number: Option<usize>,
    /// False only for the line followed by `\ No newline at end of file`
    #[new(value = "true")]
    pub has_newline: bool,
}

impl DiffLine {
    pub fn context(content: &str, old_line_number: usize, new_line_number: usize) -> Self {
        Self::new(
            LineType::Context,
            content.to_string(),
            Some(old_line_number),
            Some(new_line_number),
        )
    }

    pub fn addition(content: &str, new_line_number: usize) -> Self {
        Self::new(
            LineType::Addition,
            content.to_string(),
            None,
            Some(new_line_number),
        )
    }

    pub fn deletion(content: &str, old_line_number: usize) -> Self {
        Self::new(
            LineType::Deletion,
            content.to_string(),
            Some(old_line_number),
            None,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffHunk {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
    /// Text following the closing `@@`, usually the enclosing function
    pub header: Option<String>,
    pub lines: Vec<DiffLine>,
}

impl DiffHunk {
    pub fn from_header(header: HunkHeader) -> Self {
        Self {
            old_start: header.old_start,
            old_count: header.old_count,
            new_start: header.new_start,
            new_count: header.new_count,
            header: header.trailer,
            lines: Vec::new(),
        }
    }

    /// Renders the `@@ -a,b +c,d @@` line this hunk was parsed from
    pub fn header_line(&self) -> String {
        match &self.header {
            Some(trailer) => format!(
                "@@ -{},{} +{},{} @@ {}",
                self.old_start, self.old_count, self.new_start, self.new_count, trailer
            ),
            None => format!(
                "@@ -{},{} +{},{} @@",
                self.old_start, self.old_count, self.new_start, self.new_count
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileDiff {
    /// Empty for a newly added file
    pub old_path: String,
    /// Empty for a deleted file
    pub new_path: String,
    /// New-side path from the `diff --git` line, used when no `---`/`+++` lines exist
    pub header_path: String,
    pub hunks: Vec<DiffHunk>,
    pub flags: FileFlags,
    pub mode: Option<String>,
}

impl FileDiff {
    pub fn is_binary(&self) -> bool {
        self.flags.contains(FileFlags::BINARY)
    }

    pub fn is_new_file(&self) -> bool {
        self.flags.contains(FileFlags::NEW_FILE)
    }

    pub fn is_deleted_file(&self) -> bool {
        self.flags.contains(FileFlags::DELETED_FILE)
    }

    /// New path, falling back to the old one for deletions and to the
    /// `diff --git` path for binary or mode-only changes
    pub fn display_path(&self) -> &str {
        [&self.new_path, &self.old_path, &self.header_path]
            .into_iter()
            .find(|path| !path.is_empty())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn line_count(&self) -> usize {
        self.hunks.iter().map(|hunk| hunk.lines.len()).sum()
    }

    pub fn additions(&self) -> usize {
        self.count_lines(LineType::Addition)
    }

    pub fn deletions(&self) -> usize {
        self.count_lines(LineType::Deletion)
    }

    /// Owning hunk of an aligned row, for mapping a rendered row back to a range
    pub fn hunk_for_row(&self, row: &AlignedDiffLine) -> Option<&DiffHunk> {
        self.hunks.get(row.hunk_index)
    }

    fn count_lines(&self, line_type: LineType) -> usize {
        self.hunks
            .iter()
            .flat_map(|hunk| hunk.lines.iter())
            .filter(|line| line.line_type == line_type)
            .count()
    }
}

/// A parsed multi-file diff together with the text it came from
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct Diff {
    pub raw: String,
    pub files: Vec<FileDiff>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
