//! @ai:module:intent Rules about the shape after the tag: author, colon, text, spacing
//! @ai:module:layer domain
//! @ai:module:public_api MissedAuthorRule, MissedColonRule, MissedTextRule, MissedSpaceRule
//! @ai:module:stateless true

use super::Rule;
use crate::tags::TagMatcher;
use crate::token::Token;

/// @ai:intent Require an author as `(name)` or `@name` before the colon
#[derive(Debug, Clone, Copy, Default)]
pub struct MissedAuthorRule;

impl MissedAuthorRule {
    /// @ai:intent Decide whether the part before the colon names an author
    /// @ai:example ("") -> true
    /// @ai:example ("(gram): x") -> true
    /// @ai:example ("(   ): x") -> false
    /// @ai:example ("[name]: x") -> false
    /// @ai:effects pure
    fn has_author(head: &str) -> bool {
        let author = head.split(':').next().unwrap_or_default();
        // Empty means nothing precedes the colon; MissedTextRule reports that case.
        if author.is_empty() {
            return true;
        }
        if let Some(inner) = author.strip_prefix('(').and_then(|a| a.strip_suffix(')')) {
            return !inner.trim().is_empty();
        }
        if let Some(name) = author.strip_prefix('@') {
            return !name.trim().is_empty();
        }
        false
    }
}

impl Rule for MissedAuthorRule {
    fn code(&self) -> u32 {
        2
    }

    fn name(&self) -> &'static str {
        "missed-author"
    }

    fn text(&self) -> &'static str {
        "add author into TODO"
    }

    fn check_comment(&self, comment: &Token, tags: &TagMatcher) -> Option<String> {
        let found = tags.find(comment.text())?;
        fail_unless(Self::has_author(found.head()), self.text())
    }
}

/// @ai:intent Require a colon right after the tag or the author
#[derive(Debug, Clone, Copy, Default)]
pub struct MissedColonRule;

impl Rule for MissedColonRule {
    fn code(&self) -> u32 {
        4
    }

    fn name(&self) -> &'static str {
        "missed-colon"
    }

    fn text(&self) -> &'static str {
        "missed colon in TODO"
    }

    fn check_comment(&self, comment: &Token, tags: &TagMatcher) -> Option<String> {
        let found = tags.find(comment.text())?;
        if !comment.text().contains(':') {
            return Some(self.text().to_string());
        }
        let head = found.head();
        fail_unless(head.starts_with(':') || head.contains("):"), self.text())
    }
}

/// @ai:intent Require explanatory text after the colon
#[derive(Debug, Clone, Copy, Default)]
pub struct MissedTextRule;

impl MissedTextRule {
    /// @ai:example ("") -> false
    /// @ai:example (": x") -> true
    /// @ai:example ("(me):   ") -> false
    /// @ai:example ("no colon at all") -> true
    fn has_text(head: &str) -> bool {
        if head.is_empty() {
            return false;
        }
        if let Some(rest) = head.strip_prefix(':') {
            return !rest.trim().is_empty();
        }
        // A missing colon belongs to MissedColonRule.
        match head.split_once("):") {
            Some((_, tail)) => !tail.trim().is_empty(),
            None => true,
        }
    }
}

impl Rule for MissedTextRule {
    fn code(&self) -> u32 {
        5
    }

    fn name(&self) -> &'static str {
        "missed-text"
    }

    fn text(&self) -> &'static str {
        "missed text in TODO"
    }

    fn check_comment(&self, comment: &Token, tags: &TagMatcher) -> Option<String> {
        let found = tags.find(comment.text())?;
        fail_unless(Self::has_text(found.head()), self.text())
    }
}

/// @ai:intent Require a single space after the colon
#[derive(Debug, Clone, Copy, Default)]
pub struct MissedSpaceRule;

impl Rule for MissedSpaceRule {
    fn code(&self) -> u32 {
        7
    }

    fn name(&self) -> &'static str {
        "missed-space"
    }

    fn text(&self) -> &'static str {
        "missed space after colon in TODO"
    }

    fn check_comment(&self, comment: &Token, tags: &TagMatcher) -> Option<String> {
        let found = tags.find(comment.text())?;
        if !comment.text().contains(' ') {
            return Some(self.text().to_string());
        }
        let head = found.head();
        fail_unless(head.starts_with(": ") || head.contains("): "), self.text())
    }
}

fn fail_unless(ok: bool, text: &str) -> Option<String> {
    if ok {
        None
    } else {
        Some(text.to_string())
    }
}
