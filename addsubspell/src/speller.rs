//! Membership lookup over the expanded word set.

use std::sync::Arc;

use hashbrown::HashSet;
use smol_str::SmolStr;

use crate::dictionary::Dictionary;
use crate::expander::{self, Diagnostic};

/// The complete set of valid word forms after expansion.
///
/// Built once by the expander; read-only afterward, so it is safe to
/// share between concurrent lookup callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<SmolStr>,
}

impl WordSet {
    /// Creates an empty word set.
    pub fn new() -> WordSet {
        WordSet::default()
    }

    pub(crate) fn insert(&mut self, word: SmolStr) {
        self.words.insert(word);
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct word forms.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the word forms in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.words.iter()
    }
}

impl FromIterator<SmolStr> for WordSet {
    fn from_iter<I: IntoIterator<Item = SmolStr>>(iter: I) -> WordSet {
        WordSet {
            words: iter.into_iter().collect(),
        }
    }
}

/// Exact spell checking against a fixed word set.
pub trait Speller {
    /// Returns true if `word` is a known word form, case-sensitively.
    fn is_correct(self: Arc<Self>, word: &str) -> bool;
}

/// Speller backed by an expanded add-sub dictionary.
pub struct AddSubSpeller {
    words: WordSet,
}

impl AddSubSpeller {
    /// Wraps an already-expanded word set.
    pub fn new(words: WordSet) -> Arc<AddSubSpeller> {
        Arc::new(AddSubSpeller { words })
    }

    /// Expands `dictionary` and builds a speller over the result.
    ///
    /// Per-entry expansion failures do not prevent the speller from
    /// being built; they are returned as diagnostics.
    pub fn from_dictionary(dictionary: Dictionary) -> (Arc<AddSubSpeller>, Vec<Diagnostic>) {
        let expansion = expander::expand(dictionary);
        (AddSubSpeller::new(expansion.word_set), expansion.diagnostics)
    }

    /// The word set this speller answers from.
    pub fn word_set(&self) -> &WordSet {
        &self.words
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Speller for AddSubSpeller {
    #[inline]
    fn is_correct(self: Arc<Self>, word: &str) -> bool {
        self.contains(word)
    }
}
