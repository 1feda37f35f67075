//! Case folding helpers for caller-level lookup fallbacks.
//!
//! The core lookup is case-sensitive; callers that want the original
//! checker's behavior retry with [`lower_case`] when the exact form
//! is unknown.

use smol_str::SmolStr;

#[inline(always)]
/// Lower-cases every character of `s`.
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
/// Upper-cases every character of `s`.
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
/// Upper-cases the first character of `s`.
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

#[inline(always)]
/// Lower-cases the first character of `s`.
pub fn lower_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_lowercase().collect::<String>() + c.as_str()),
    }
}
