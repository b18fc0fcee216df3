//! Tunable limits for word diffing and cache sizing

/// Strings longer than this (in characters) skip word-level diffing entirely.
pub const DEFAULT_MAX_WORD_DIFF_CHARS: usize = 1000;

/// Both token sequences must be within this length for the exact LCS table.
pub const DEFAULT_EXACT_LCS_MAX_TOKENS: usize = 100;

pub const DEFAULT_ALIGNMENT_CACHE_CAPACITY: usize = 50;
pub const DEFAULT_ALIGNMENT_CACHE_EVICT: usize = 10;
pub const DEFAULT_WORD_DIFF_CACHE_CAPACITY: usize = 200;
pub const DEFAULT_WORD_DIFF_CACHE_EVICT: usize = 50;

/// Engine configuration
///
/// Every threshold the engine applies lives here so callers (and the CLI)
/// can override them without touching the algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    /// Character cap above which a line pair is reported as fully changed
    pub max_word_diff_chars: usize,
    /// Token count cap for the exact dynamic-programming LCS
    pub exact_lcs_max_tokens: usize,
    pub alignment_cache_capacity: usize,
    /// Number of entries dropped when the alignment cache overflows
    pub alignment_cache_evict: usize,
    pub word_diff_cache_capacity: usize,
    /// Number of entries dropped when the word diff cache overflows
    pub word_diff_cache_evict: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_word_diff_chars: DEFAULT_MAX_WORD_DIFF_CHARS,
            exact_lcs_max_tokens: DEFAULT_EXACT_LCS_MAX_TOKENS,
            alignment_cache_capacity: DEFAULT_ALIGNMENT_CACHE_CAPACITY,
            alignment_cache_evict: DEFAULT_ALIGNMENT_CACHE_EVICT,
            word_diff_cache_capacity: DEFAULT_WORD_DIFF_CACHE_CAPACITY,
            word_diff_cache_evict: DEFAULT_WORD_DIFF_CACHE_EVICT,
        }
    }
}

impl DiffConfig {
    pub fn with_max_word_diff_chars(mut self, max_word_diff_chars: usize) -> Self {
        self.max_word_diff_chars = max_word_diff_chars;
        self
    }

    pub fn with_exact_lcs_max_tokens(mut self, exact_lcs_max_tokens: usize) -> Self {
        self.exact_lcs_max_tokens = exact_lcs_max_tokens;
        self
    }

    pub fn with_alignment_cache(mut self, capacity: usize, evict: usize) -> Self {
        self.alignment_cache_capacity = capacity;
        self.alignment_cache_evict = evict;
        self
    }

    pub fn with_word_diff_cache(mut self, capacity: usize, evict: usize) -> Self {
        self.word_diff_cache_capacity = capacity;
        self.word_diff_cache_evict = evict;
        self
    }
}
