//! Typewriter sequencing: yields the growing prefix of a text, one character
//! per tick.

/// Iterator over the prefixes of `text` shown on successive ticks.
///
/// For `"abc"` it yields `"a"`, `"ab"`, `"abc"`. Prefixes end on `char`
/// boundaries.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }

    /// Text currently on screen.
    pub fn current(&self) -> &str {
        &self.text[..self.shown]
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let rest = self.text.get(self.shown..)?;
        let ch = rest.chars().next()?;
        self.shown += ch.len_utf8();
        Some(self.current().to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.text[self.shown..].chars().count();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Typewriter {}
