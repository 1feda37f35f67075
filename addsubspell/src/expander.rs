//! Expands a base dictionary into the full word set.

use smol_str::SmolStr;

use crate::dictionary::{Dictionary, WordEntry};
use crate::rules::{AffixRule, RuleError, RuleTable};
use crate::speller::WordSet;
use crate::types::RuleIndex;

/// One recovered per-entry failure during expansion.
///
/// Diagnostics never abort the build; the affected derivation is
/// skipped and expansion continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A headword references a rule index beyond the table bounds.
    #[error("'{headword}' references rule {index} outside table of {len}")]
    OutOfRangeRuleIndex {
        /// the referencing headword
        headword: SmolStr,
        /// the out-of-range index
        index: RuleIndex,
        /// the rule table length
        len: usize,
    },

    /// A referenced rule string failed to parse.
    #[error("'{headword}': rule {index} is malformed")]
    MalformedRule {
        /// the referencing headword
        headword: SmolStr,
        /// the rule table index
        index: RuleIndex,
        /// the parse failure
        #[source]
        source: RuleError,
    },

    /// A rule's removal text did not match the headword.
    #[error("'{headword}': rule {index} does not apply")]
    AffixMismatch {
        /// the referencing headword
        headword: SmolStr,
        /// the rule table index
        index: RuleIndex,
        /// the mismatch detail
        #[source]
        source: RuleError,
    },
}

/// The outcome of expanding one dictionary.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// Every headword plus every successfully derived form.
    pub word_set: WordSet,
    /// Recovered per-entry failures, in encounter order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Expands `dictionary` into the full set of valid word forms.
///
/// Every headword is inserted; each rule reference contributes one
/// derived form. Duplicate forms are absorbed silently. A bad rule
/// reference skips only that derivation: the failure is logged and
/// collected into [`Expansion::diagnostics`].
pub fn expand(dictionary: Dictionary) -> Expansion {
    let Dictionary { key, words } = dictionary;
    let table = RuleTable::new(key);

    // Parse each table entry once; per-reference failures below
    // reuse the cached result.
    let parsed: Vec<Result<AffixRule, RuleError>> =
        table.iter().map(|raw| AffixRule::parse(raw)).collect();

    let mut word_set = WordSet::new();
    let mut diagnostics = Vec::new();

    for (headword, entry) in words {
        match entry {
            WordEntry::Forms(forms) => {
                for form in forms {
                    word_set.insert(form);
                }
            }
            WordEntry::RuleRefs(refs) => {
                for index in refs {
                    match parsed.get(index as usize) {
                        None => {
                            report(
                                &mut diagnostics,
                                Diagnostic::OutOfRangeRuleIndex {
                                    headword: headword.clone(),
                                    index,
                                    len: table.len(),
                                },
                            );
                        }
                        Some(Err(e)) => {
                            report(
                                &mut diagnostics,
                                Diagnostic::MalformedRule {
                                    headword: headword.clone(),
                                    index,
                                    source: e.clone(),
                                },
                            );
                        }
                        Some(Ok(rule)) => match rule.derive(&headword) {
                            Ok(derived) => word_set.insert(derived),
                            Err(e) => {
                                report(
                                    &mut diagnostics,
                                    Diagnostic::AffixMismatch {
                                        headword: headword.clone(),
                                        index,
                                        source: e,
                                    },
                                );
                            }
                        },
                    }
                }
            }
        }

        word_set.insert(headword);
    }

    Expansion {
        word_set,
        diagnostics,
    }
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    log::warn!("{}", diagnostic);
    diagnostics.push(diagnostic);
}
