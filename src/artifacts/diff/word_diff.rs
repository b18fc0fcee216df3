//! Word-level highlighting inside a changed line pair
//!
//! Both strings are split into maximal runs of whitespace or non-whitespace
//! (whitespace is a token like any other), the runs are matched with
//! [`longest_common_subsequence`], and each side becomes a list of
//! [`WordSegment`]s with changed spans marked. Adjacent tokens with the same
//! state are merged into one segment.

use crate::artifacts::core::config::DiffConfig;
use crate::artifacts::diff::lcs::longest_common_subsequence;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct WordSegment {
    pub text: String,
    pub is_changed: bool,
}

impl WordSegment {
    pub fn unchanged(text: &str) -> Self {
        Self::new(text.to_string(), false)
    }

    pub fn changed(text: &str) -> Self {
        Self::new(text.to_string(), true)
    }
}

/// Parallel segment lists for the old and new string
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct WordDiff {
    pub old: Vec<WordSegment>,
    pub new: Vec<WordSegment>,
}

impl WordDiff {
    /// Word diff with default limits and no caching
    pub fn compare(old: &str, new: &str) -> Self {
        compare_words(old, new, &DiffConfig::default())
    }

    /// One fully changed segment per side
    fn simplified(old: &str, new: &str) -> Self {
        Self::new(vec![WordSegment::changed(old)], vec![WordSegment::changed(new)])
    }
}

/// Splits into maximal all-whitespace / all-non-whitespace runs
pub fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (idx, ch) in s.char_indices() {
        let is_whitespace = ch.is_whitespace();
        match in_whitespace {
            Some(current) if current != is_whitespace => {
                tokens.push(&s[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_whitespace = Some(is_whitespace);
    }

    if start < s.len() {
        tokens.push(&s[start..]);
    }

    tokens
}

/// Word diff of `old` against `new` under the limits in `config`
///
/// Fast paths, in order: identical strings, an empty side, and a side longer
/// than `config.max_word_diff_chars` characters.
pub fn compare_words(old: &str, new: &str, config: &DiffConfig) -> WordDiff {
    if old == new {
        return WordDiff::new(vec![WordSegment::unchanged(old)], vec![WordSegment::unchanged(new)]);
    }

    if old.is_empty() || new.is_empty() {
        let side = |s: &str| {
            if s.is_empty() {
                Vec::new()
            } else {
                vec![WordSegment::changed(s)]
            }
        };
        return WordDiff::new(side(old), side(new));
    }

    let max_chars = config.max_word_diff_chars;
    if old.chars().count() > max_chars || new.chars().count() > max_chars {
        log::trace!("line pair exceeds {max_chars} characters, skipping word diff");
        return WordDiff::simplified(old, new);
    }

    let old_tokens = tokenize(old);
    let new_tokens = tokenize(new);
    let common =
        longest_common_subsequence(&old_tokens, &new_tokens, config.exact_lcs_max_tokens);

    build_segments(&old_tokens, &new_tokens, &common)
}

/// Walks both token lists against the common subsequence with a shared cursor
fn build_segments(old_tokens: &[&str], new_tokens: &[&str], common: &[&str]) -> WordDiff {
    let mut diff = WordDiff::default();
    let (mut i, mut j) = (0, 0);

    for expected in common {
        while i < old_tokens.len() && old_tokens[i] != *expected {
            push_segment(&mut diff.old, old_tokens[i], true);
            i += 1;
        }
        while j < new_tokens.len() && new_tokens[j] != *expected {
            push_segment(&mut diff.new, new_tokens[j], true);
            j += 1;
        }

        if i < old_tokens.len() && j < new_tokens.len() {
            push_segment(&mut diff.old, old_tokens[i], false);
            push_segment(&mut diff.new, new_tokens[j], false);
            i += 1;
            j += 1;
        } else {
            break;
        }
    }

    for token in &old_tokens[i..] {
        push_segment(&mut diff.old, token, true);
    }
    for token in &new_tokens[j..] {
        push_segment(&mut diff.new, token, true);
    }

    diff
}

fn push_segment(segments: &mut Vec<WordSegment>, text: &str, is_changed: bool) {
    match segments.last_mut() {
        Some(last) if last.is_changed == is_changed => last.text.push_str(text),
        _ => segments.push(WordSegment::new(text.to_string(), is_changed)),
    }
}
