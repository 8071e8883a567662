/// A single flashcard: the word being studied and its meaning.
///
/// Fields are always trimmed and non-empty; construct through
/// [`WordEntry::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    meaning: String,
}

impl WordEntry {
    /// Builds an entry from raw text, trimming both fields. Returns `None`
    /// if either side is empty after trimming.
    pub fn new(word: &str, meaning: &str) -> Option<Self> {
        let word = word.trim();
        let meaning = meaning.trim();

        if word.is_empty() || meaning.is_empty() {
            return None;
        }

        Some(WordEntry { word: word.to_string(), meaning: meaning.to_string() })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }
}

/// An ordered word list. Insertion order is file line order; duplicate
/// words are kept as separate cards.
pub type Deck = Vec<WordEntry>;
