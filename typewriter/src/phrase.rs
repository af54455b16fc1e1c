use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// A phrase with its character boundaries precomputed.
///
/// A "character" here is an extended grapheme cluster, so an emoji or a letter
/// with a combining accent is typed and deleted as one unit.
#[derive(Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    // byte offset after each grapheme; `ends[n - 1]` is the end of the
    // n-character prefix
    ends: Vec<usize>,
}

impl Phrase {
    /// Creates a new phrase.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let ends = text
            .grapheme_indices(true)
            .map(|(start, g)| start + g.len())
            .collect();
        Self { text, ends }
    }

    /// The full text of the phrase.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters in the phrase.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Whether the phrase has no characters.
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// The first `chars` characters of the phrase.
    ///
    /// Requests past the end return the whole phrase.
    pub fn prefix(&self, chars: usize) -> &str {
        match chars {
            0 => "",
            n => {
                let end = self
                    .ends
                    .get(n - 1)
                    .copied()
                    .unwrap_or(self.text.len());
                &self.text[..end]
            }
        }
    }
}

impl fmt::Debug for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.text, f)
    }
}

impl From<&str> for Phrase {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Phrase {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&String> for Phrase {
    fn from(value: &String) -> Self {
        Self::new(value.as_str())
    }
}
