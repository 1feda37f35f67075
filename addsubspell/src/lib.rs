/*! Spell-checking over expanded add-sub dictionaries.

A compact base dictionary maps each headword to the affix rules that
apply to it; this library expands that dictionary into the full set of
valid word forms and answers exact membership queries against it.

The dictionary format is the JSON emitted by the hunspell-to-JSON
generator tools: a `key` table of add-sub rule strings (`-y+ies`,
`+ing`, `p:+un`, …) and a `words` map from headword to the rule
indices that derive further forms from it.

# Usage example

```
use addsubspell::dictionary::Dictionary;
use addsubspell::speller::{AddSubSpeller, Speller};

let dict = Dictionary::from_str(
    r#"{ "key": ["-y+ies", "+ing"], "words": { "city": [0], "jump": [1] } }"#,
).unwrap();

let (speller, diagnostics) = AddSubSpeller::from_dictionary(dict);
assert!(diagnostics.is_empty());
assert!(speller.clone().is_correct("cities"));
assert!(!speller.is_correct("citys"));
```

Expansion happens once at load time; the resulting word set is
read-only and safe to share between lookup callers.
*/

#![warn(missing_docs)]

pub mod case_handling;
pub mod dictionary;
pub mod expander;
pub mod rules;
pub mod speller;

pub(crate) mod types;

pub use self::types::RuleIndex;
