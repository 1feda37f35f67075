//! Add-sub affix rules: the rule table, rule parsing and derivation.
//!
//! A rule string encodes one affix transformation. Suffix rules come
//! as `-X+Y` (strip `X` from the end, append `Y`) or `+Y` (append).
//! Prefix rules come as `X-Y+` (strip `X` from the start, prepend
//! `Y`) or `Y+` (prepend). The newer generator disambiguates the two
//! families with an explicit `s:`/`p:` marker in front of a `-X+Y` or
//! `+Y` body.

use smol_str::SmolStr;

use crate::types::RuleIndex;

/// Error parsing or applying an affix rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The rule string is empty or lacks a required `+` delimiter.
    #[error("Malformed rule '{0}'")]
    MalformedRule(SmolStr),

    /// The text to remove is not present in the word being derived.
    #[error("Affix '{remove}' does not match word '{word}'")]
    AffixMismatch {
        /// the word the rule was applied to
        word: SmolStr,
        /// the removal text that failed to match
        remove: SmolStr,
    },
}

/// The ordered affix rule table of a dictionary.
///
/// Immutable after load. Indices referenced by headwords are checked
/// against the table bounds by the caller; [`RuleTable::get`] returns
/// `None` for an out-of-range index.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<SmolStr>,
}

impl RuleTable {
    /// Wraps the raw rule strings of a dictionary `key` table.
    pub fn new(rules: Vec<SmolStr>) -> RuleTable {
        RuleTable { rules }
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The raw rule string at `index`, if in bounds.
    pub fn get(&self, index: RuleIndex) -> Option<&SmolStr> {
        self.rules.get(index as usize)
    }

    /// Iterates the raw rule strings in table order.
    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.rules.iter()
    }
}

impl From<Vec<SmolStr>> for RuleTable {
    fn from(rules: Vec<SmolStr>) -> RuleTable {
        RuleTable::new(rules)
    }
}

/// One parsed affix operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffixRule {
    /// Append `suffix` to the end of the word.
    Append {
        /// literal characters to append
        suffix: SmolStr,
    },
    /// Strip `remove` from the end of the word, then append `add`.
    ReplaceSuffix {
        /// literal suffix that must terminate the word
        remove: SmolStr,
        /// literal characters to append in its place
        add: SmolStr,
    },
    /// Prepend `prefix` to the start of the word.
    Prepend {
        /// literal characters to prepend
        prefix: SmolStr,
    },
    /// Strip as many characters as `remove` has from the start of the
    /// word, then prepend `add`.
    ///
    /// Prefix removal is positional: the stripped characters are not
    /// required to equal `remove`.
    ReplacePrefix {
        /// removal text; only its character count is applied
        remove: SmolStr,
        /// literal characters to prepend
        add: SmolStr,
    },
}

fn malformed(raw: &str) -> RuleError {
    RuleError::MalformedRule(SmolStr::new(raw))
}

// Shared by the unmarked leading `-`/`+` shapes and the `s:` marker.
fn parse_suffix_family(raw: &str, rule: &str) -> Result<AffixRule, RuleError> {
    if let Some(rest) = rule.strip_prefix('-') {
        let (remove, add) = rest.split_once('+').ok_or_else(|| malformed(raw))?;
        Ok(AffixRule::ReplaceSuffix {
            remove: SmolStr::new(remove),
            add: SmolStr::new(add),
        })
    } else if let Some(rest) = rule.strip_prefix('+') {
        Ok(AffixRule::Append {
            suffix: SmolStr::new(rest),
        })
    } else {
        Err(malformed(raw))
    }
}

// `p:` marker: same `-X+Y` / `+Y` body, applied at the word start.
fn parse_prefix_family(raw: &str, rule: &str) -> Result<AffixRule, RuleError> {
    if let Some(rest) = rule.strip_prefix('-') {
        let (remove, add) = rest.split_once('+').ok_or_else(|| malformed(raw))?;
        Ok(AffixRule::ReplacePrefix {
            remove: SmolStr::new(remove),
            add: SmolStr::new(add),
        })
    } else if let Some(rest) = rule.strip_prefix('+') {
        Ok(AffixRule::Prepend {
            prefix: SmolStr::new(rest),
        })
    } else {
        Err(malformed(raw))
    }
}

// Unmarked prefix shapes `X-Y+` and `Y+`. Text after the closing `+`
// is ignored, as the original format does.
fn parse_prefix_legacy(raw: &str) -> Result<AffixRule, RuleError> {
    match raw.split_once('-') {
        Some((remove, rest)) => {
            let (add, _) = rest.split_once('+').ok_or_else(|| malformed(raw))?;
            Ok(AffixRule::ReplacePrefix {
                remove: SmolStr::new(remove),
                add: SmolStr::new(add),
            })
        }
        None => {
            let (add, _) = raw.split_once('+').ok_or_else(|| malformed(raw))?;
            Ok(AffixRule::Prepend {
                prefix: SmolStr::new(add),
            })
        }
    }
}

impl AffixRule {
    /// Parses one raw rule string into its affix operation.
    ///
    /// Dispatch is total and mutually exclusive: an explicit `s:`/`p:`
    /// family marker wins; otherwise a leading `-` or `+` selects the
    /// suffix family and anything else is parsed as a legacy prefix
    /// rule. Every other shape is [`RuleError::MalformedRule`].
    pub fn parse(raw: &str) -> Result<AffixRule, RuleError> {
        if let Some(rule) = raw.strip_prefix("s:") {
            parse_suffix_family(raw, rule)
        } else if let Some(rule) = raw.strip_prefix("p:") {
            parse_prefix_family(raw, rule)
        } else if raw.starts_with('-') || raw.starts_with('+') {
            parse_suffix_family(raw, raw)
        } else {
            parse_prefix_legacy(raw)
        }
    }

    /// Applies this operation to `word`, producing the derived form.
    ///
    /// Never mutates `word`. Suffix removal requires the removal text
    /// to terminate the word; prefix removal strips by character
    /// count. Either failing is [`RuleError::AffixMismatch`].
    pub fn derive(&self, word: &str) -> Result<SmolStr, RuleError> {
        match self {
            AffixRule::Append { suffix } => Ok(SmolStr::from(format!("{}{}", word, suffix))),
            AffixRule::ReplaceSuffix { remove, add } => {
                match word.strip_suffix(remove.as_str()) {
                    Some(stem) => Ok(SmolStr::from(format!("{}{}", stem, add))),
                    None => Err(RuleError::AffixMismatch {
                        word: SmolStr::new(word),
                        remove: remove.clone(),
                    }),
                }
            }
            AffixRule::Prepend { prefix } => Ok(SmolStr::from(format!("{}{}", prefix, word))),
            AffixRule::ReplacePrefix { remove, add } => {
                let n = remove.chars().count();
                let stem = if n == 0 {
                    word
                } else {
                    match word.char_indices().nth(n) {
                        Some((idx, _)) => &word[idx..],
                        None if word.chars().count() == n => "",
                        None => {
                            return Err(RuleError::AffixMismatch {
                                word: SmolStr::new(word),
                                remove: remove.clone(),
                            })
                        }
                    }
                };
                Ok(SmolStr::from(format!("{}{}", add, stem)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> AffixRule {
        AffixRule::parse(raw).unwrap()
    }

    #[test]
    fn parse_suffix_shapes() {
        assert_eq!(
            parsed("-y+ies"),
            AffixRule::ReplaceSuffix {
                remove: "y".into(),
                add: "ies".into()
            }
        );
        assert_eq!(
            parsed("-s+"),
            AffixRule::ReplaceSuffix {
                remove: "s".into(),
                add: "".into()
            }
        );
        assert_eq!(
            parsed("+ing"),
            AffixRule::Append {
                suffix: "ing".into()
            }
        );
    }

    #[test]
    fn parse_marked_shapes() {
        assert_eq!(
            parsed("s:-y+ies"),
            AffixRule::ReplaceSuffix {
                remove: "y".into(),
                add: "ies".into()
            }
        );
        assert_eq!(
            parsed("p:+un"),
            AffixRule::Prepend { prefix: "un".into() }
        );
        assert_eq!(
            parsed("p:-in+un"),
            AffixRule::ReplacePrefix {
                remove: "in".into(),
                add: "un".into()
            }
        );
    }

    #[test]
    fn parse_legacy_prefix_shapes() {
        assert_eq!(
            parsed("un+"),
            AffixRule::Prepend { prefix: "un".into() }
        );
        assert_eq!(
            parsed("in-un+"),
            AffixRule::ReplacePrefix {
                remove: "in".into(),
                add: "un".into()
            }
        );
    }

    #[test]
    fn parse_malformed() {
        assert!(matches!(
            AffixRule::parse(""),
            Err(RuleError::MalformedRule(_))
        ));
        assert!(matches!(
            AffixRule::parse("-s"),
            Err(RuleError::MalformedRule(_))
        ));
        assert!(matches!(
            AffixRule::parse("s:ing"),
            Err(RuleError::MalformedRule(_))
        ));
        assert!(matches!(
            AffixRule::parse("un-re"),
            Err(RuleError::MalformedRule(_))
        ));
    }

    #[test]
    fn derive_append() {
        assert_eq!(parsed("+ing").derive("jump").unwrap(), "jumping");
        assert_eq!(parsed("+").derive("jump").unwrap(), "jump");
    }

    #[test]
    fn derive_replace_suffix() {
        assert_eq!(parsed("-y+ies").derive("city").unwrap(), "cities");
        assert_eq!(parsed("-s+").derive("cats").unwrap(), "cat");
    }

    #[test]
    fn derive_suffix_strips_from_end_only() {
        // "s" occurs mid-word but the word does not end in it.
        let err = parsed("-s+ed").derive("mishap").unwrap_err();
        assert!(matches!(err, RuleError::AffixMismatch { .. }));
    }

    #[test]
    fn derive_suffix_mismatch() {
        let err = parsed("-y+ies").derive("jump").unwrap_err();
        assert_eq!(
            err,
            RuleError::AffixMismatch {
                word: "jump".into(),
                remove: "y".into()
            }
        );
    }

    #[test]
    fn derive_prefix() {
        assert_eq!(parsed("un+").derive("happy").unwrap(), "unhappy");
        assert_eq!(parsed("p:+un").derive("happy").unwrap(), "unhappy");
        assert_eq!(parsed("in-un+").derive("incapable").unwrap(), "uncapable");
    }

    #[test]
    fn derive_prefix_is_positional() {
        // Strips two characters whatever they are.
        assert_eq!(parsed("in-un+").derive("recapable").unwrap(), "uncapable");
    }

    #[test]
    fn derive_prefix_shorter_word_mismatch() {
        let err = parsed("abc-x+").derive("ab").unwrap_err();
        assert!(matches!(err, RuleError::AffixMismatch { .. }));
        assert_eq!(parsed("ab-x+").derive("ab").unwrap(), "x");
    }

    #[test]
    fn derive_is_char_aware() {
        // Multi-byte characters count as one for the positional strip.
        assert_eq!(parsed("ö-ü+").derive("öl").unwrap(), "ül");
        assert_eq!(parsed("-n+ner").derive("schön").unwrap(), "schöner");
    }

    #[test]
    fn rule_table_bounds() {
        let table = RuleTable::new(vec![SmolStr::new("+s")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0).unwrap(), "+s");
        assert!(table.get(1).is_none());
    }
}
