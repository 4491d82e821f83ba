//! @ai:module:intent Rules about the tag word itself: spelling and case
//! @ai:module:layer domain
//! @ai:module:public_api BadTagRule, InvalidCaseRule
//! @ai:module:stateless true

use super::Rule;
use crate::tags::{TagMatcher, CANONICAL_TAG};
use crate::token::Token;

/// @ai:intent Flag discouraged tags such as FIXME, BUG, XXX
#[derive(Debug, Clone, Copy, Default)]
pub struct BadTagRule;

impl Rule for BadTagRule {
    fn code(&self) -> u32 {
        1
    }

    fn name(&self) -> &'static str {
        "bad-tag"
    }

    fn text(&self) -> &'static str {
        "use TODO instead of {tag} for consistency"
    }

    /// Only the first discouraged tag in a comment is reported.
    fn check_comment(&self, comment: &Token, tags: &TagMatcher) -> Option<String> {
        let found = tags.find_bad(comment.text())?;
        Some(format!(
            "use {} instead of {} for consistency",
            CANONICAL_TAG,
            found.tag()
        ))
    }
}

/// @ai:intent Flag tags that are not fully upper-case
#[derive(Debug, Clone, Copy, Default)]
pub struct InvalidCaseRule;

impl Rule for InvalidCaseRule {
    fn code(&self) -> u32 {
        6
    }

    fn name(&self) -> &'static str {
        "invalid-case"
    }

    fn text(&self) -> &'static str {
        "write {good} instead of {bad}"
    }

    fn check_comment(&self, comment: &Token, tags: &TagMatcher) -> Option<String> {
        let found = tags.find(comment.text())?;
        let tag = found.tag();
        if is_upper(tag) {
            return None;
        }
        Some(format!("write {} instead of {}", tag.to_uppercase(), tag))
    }
}

/// @ai:intent Upper-case with at least one cased character
/// @ai:example ("TODO") -> true
/// @ai:example ("ToDo") -> false
/// @ai:effects pure
fn is_upper(tag: &str) -> bool {
    let mut cased = false;
    for c in tag.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
