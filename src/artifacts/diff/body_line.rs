/// A hunk body line, classified by its leading character
///
/// Content slices exclude the prefix character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyLine<'l> {
    Addition(&'l str),
    Deletion(&'l str),
    Context(&'l str),
    /// `\ No newline at end of file`, attached to the previous line
    NoNewlineMarker,
    /// Anything else; parsed as context
    Unknown(&'l str),
}

impl<'l> BodyLine<'l> {
    pub fn classify(line: &'l str) -> Self {
        let mut chars = line.chars();
        let Some(prefix) = chars.next() else {
            return BodyLine::Unknown("");
        };
        let content = chars.as_str();

        match prefix {
            '+' => BodyLine::Addition(content),
            '-' => BodyLine::Deletion(content),
            ' ' => BodyLine::Context(content),
            '\\' => BodyLine::NoNewlineMarker,
            _ => BodyLine::Unknown(content),
        }
    }
}
