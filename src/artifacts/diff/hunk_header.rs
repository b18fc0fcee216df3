use derive_new::new;
use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for `@@ -a[,b] +c[,d] @@[ trailer]`
const HUNK_HEADER_REGEX: &str = r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(.*)$";

static HUNK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HUNK_HEADER_REGEX).expect("hunk header regex is valid"));

/// Numeric span of a hunk as announced by its `@@` line
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HunkHeader {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
    pub trailer: Option<String>,
}

impl HunkHeader {
    /// Parses a hunk header line, returning `None` when it does not match.
    ///
    /// Omitted counts default to 1, git's shorthand for single-line spans.
    pub fn try_parse(line: &str) -> Option<Self> {
        let caps = HUNK_HEADER.captures(line)?;

        let number = |idx: usize| -> Option<usize> {
            match caps.get(idx) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(1),
            }
        };

        let trailer = caps
            .get(5)
            .map(|m| m.as_str().trim())
            .filter(|trailer| !trailer.is_empty())
            .map(str::to_string);

        Some(Self {
            old_start: number(1)?,
            old_count: number(2)?,
            new_start: number(3)?,
            new_count: number(4)?,
            trailer,
        })
    }
}
