use crate::areas::engine::DiffEngine;
use crate::artifacts::diff::word_diff::WordSegment;
use colored::Colorize;
use std::io::Write;

impl DiffEngine {
    /// Prints `- old` and `+ new` with changed spans wrapped in `[-..-]` / `{+..+}`
    pub fn words(&self, old: &str, new: &str, writer: &mut dyn Write) -> anyhow::Result<()> {
        let diff = self.compare_words(old, new);

        writeln!(writer, "- {}", mark_segments(&diff.old, "[-", "-]", true))?;
        writeln!(writer, "+ {}", mark_segments(&diff.new, "{+", "+}", false))?;

        Ok(())
    }
}

fn mark_segments(segments: &[WordSegment], open: &str, close: &str, is_old: bool) -> String {
    segments
        .iter()
        .map(|segment| {
            if !segment.is_changed {
                return segment.text.clone();
            }

            let marked = format!("{open}{}{close}", segment.text);
            if is_old {
                marked.red().to_string()
            } else {
                marked.green().to_string()
            }
        })
        .collect()
}
