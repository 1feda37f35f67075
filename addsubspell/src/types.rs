/// Index into the affix rule table of a dictionary.
pub type RuleIndex = u32;
