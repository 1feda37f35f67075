//! Deserialized base dictionary: the rule table plus the headword map.

use std::io::{BufReader, Read};
use std::path::Path;

use hashbrown::HashMap;
use serde::Deserialize;
use smol_str::SmolStr;

use crate::types::RuleIndex;

/// Error loading or parsing a dictionary.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// Error opening the dictionary file
    #[error("Failed to open dictionary file '{0}'")]
    File(String, #[source] std::io::Error),

    /// The input is not a valid dictionary JSON document
    #[error("Failed to parse dictionary JSON")]
    Parse(#[from] serde_json::Error),
}

/// One headword's entry in the `words` map.
///
/// The generator tools emit two shapes: the `key` format references
/// rules by index into the rule table, while the `full` format lists
/// every derived form verbatim. An empty list means the headword has
/// no derivations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WordEntry {
    /// Indices into the rule table (`key` format).
    RuleRefs(Vec<RuleIndex>),
    /// Already-derived word forms (`full` format).
    Forms(Vec<SmolStr>),
}

impl WordEntry {
    /// Returns true if this entry derives no further forms.
    pub fn is_empty(&self) -> bool {
        match self {
            WordEntry::RuleRefs(refs) => refs.is_empty(),
            WordEntry::Forms(forms) => forms.is_empty(),
        }
    }
}

/// A base dictionary as emitted by the hunspell-to-JSON generators.
///
/// Transient input: it is consumed by [`crate::expander::expand`] and
/// does not outlive the expansion phase.
#[derive(Debug, Clone, Deserialize)]
pub struct Dictionary {
    /// Raw add-sub rule strings, addressed by index from `words`.
    #[serde(default, alias = "keys")]
    pub key: Vec<SmolStr>,
    /// Headword to rule references (or full forms).
    pub words: HashMap<SmolStr, WordEntry>,
}

impl Dictionary {
    /// Parses a dictionary from a JSON string.
    pub fn from_str(string: &str) -> Result<Dictionary, DictionaryError> {
        Ok(serde_json::from_str(string)?)
    }

    /// Parses a dictionary from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dictionary, DictionaryError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Opens and parses a dictionary JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| DictionaryError::File(path.to_string_lossy().to_string(), e))?;
        Dictionary::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_key_format() {
        let dict = Dictionary::from_str(
            r#"{ "key": ["-s+", "+ing"], "words": { "jump": [1], "and": [] } }"#,
        )
        .unwrap();

        assert_eq!(dict.key.len(), 2);
        assert_eq!(
            dict.words.get("jump"),
            Some(&WordEntry::RuleRefs(vec![1]))
        );
        assert!(dict.words.get("and").unwrap().is_empty());
    }

    #[test]
    fn parse_keys_alias() {
        let dict = Dictionary::from_str(
            r#"{ "keys": ["s:-y+ies"], "words": { "city": [0] } }"#,
        )
        .unwrap();

        assert_eq!(dict.key[0], "s:-y+ies");
    }

    #[test]
    fn parse_full_format() {
        let dict = Dictionary::from_str(
            r#"{ "words": { "jump": ["jumps", "jumping"], "and": [] } }"#,
        )
        .unwrap();

        assert!(dict.key.is_empty());
        assert_eq!(
            dict.words.get("jump"),
            Some(&WordEntry::Forms(vec![
                SmolStr::new("jumps"),
                SmolStr::new("jumping")
            ]))
        );
        // An empty list parses as an (empty) rule reference list.
        assert_eq!(dict.words.get("and"), Some(&WordEntry::RuleRefs(vec![])));
    }

    #[test]
    fn parse_failure() {
        let result = Dictionary::from_str("not json at all");
        assert!(matches!(result, Err(DictionaryError::Parse(_))));
    }

    #[test]
    fn missing_words_field_is_an_error() {
        let result = Dictionary::from_str(r#"{ "key": [] }"#);
        assert!(matches!(result, Err(DictionaryError::Parse(_))));
    }

    #[test]
    fn from_path_missing_file() {
        let result = Dictionary::from_path("/nonexistent/en_US.json");
        assert!(matches!(result, Err(DictionaryError::File(_, _))));
    }

    #[test]
    fn from_path_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "key": ["+s"], "words": { "cat": [0] } }"#)
            .unwrap();

        let dict = Dictionary::from_path(file.path()).unwrap();
        assert_eq!(dict.key[0], "+s");
        assert!(dict.words.contains_key("cat"));
    }
}
