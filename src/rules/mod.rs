//! @ai:module:intent Rule trait and the ordered, code-unique rule registry
//! @ai:module:layer domain
//! @ai:module:public_api Rule, RuleRegistry, builtin_rules
//! @ai:module:depends_on token, finding, tags, error
//! @ai:module:stateless true

mod format;
mod link;
mod tag;

pub use format::{MissedAuthorRule, MissedColonRule, MissedSpaceRule, MissedTextRule};
pub use link::MissedLinkRule;
pub use tag::{BadTagRule, InvalidCaseRule};

use crate::error::{Error, Result};
use crate::finding::Finding;
use crate::tags::{TagMatcher, Vocabulary};
use crate::token::Token;
use std::fmt;

/// @ai:intent One independent check over a token sequence
/// @ai:invariant code is unique within a registry and never changes
pub trait Rule: Send + Sync {
    /// Stable numeric code, rendered as `T00<code>`.
    fn code(&self) -> u32;

    /// Short kebab-case name for listings.
    fn name(&self) -> &'static str;

    /// Message text reported when the rule fails.
    fn text(&self) -> &'static str;

    /// @ai:intent Inspect a single comment token
    /// @ai:post Some(text) reports a finding at the token, None passes
    /// @ai:effects pure
    fn check_comment(&self, _comment: &Token, _tags: &TagMatcher) -> Option<String> {
        None
    }

    /// @ai:intent Run the rule over a whole token sequence
    /// @ai:post findings are in token order
    /// @ai:effects pure
    fn evaluate(&self, tokens: &[Token], tags: &TagMatcher) -> Vec<Finding> {
        tokens
            .iter()
            .filter(|token| token.is_comment())
            .filter_map(|token| {
                self.check_comment(token, tags)
                    .map(|text| Finding::at(token, self.code(), text))
            })
            .collect()
    }
}

/// @ai:intent The fixed, ordered list of built-in rules
/// @ai:effects pure
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(BadTagRule),
        Box::new(MissedAuthorRule),
        Box::new(MissedLinkRule::new()),
        Box::new(MissedColonRule),
        Box::new(MissedTextRule),
        Box::new(InvalidCaseRule),
        Box::new(MissedSpaceRule),
    ]
}

/// @ai:intent Ordered rules sharing one compiled tag matcher
/// @ai:invariant no two rules share a code
/// @ai:thread_safe true (read-only after construction)
pub struct RuleRegistry {
    tags: TagMatcher,
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// @ai:intent Build a registry, rejecting duplicate codes
    /// @ai:post on error nothing is registered
    /// @ai:effects pure
    pub fn new(tags: TagMatcher, rules: Vec<Box<dyn Rule>>) -> Result<Self> {
        let mut registry = Self {
            tags,
            rules: Vec::with_capacity(rules.len()),
        };
        for rule in rules {
            registry.register(rule)?;
        }
        Ok(registry)
    }

    /// @ai:intent Registry with every built-in rule over a vocabulary
    /// @ai:effects pure
    pub fn builtin(vocabulary: &Vocabulary) -> Result<Self> {
        Self::new(TagMatcher::new(vocabulary)?, builtin_rules())
    }

    /// @ai:intent Append a rule unless its code is taken
    /// @ai:post on error the registry is unchanged
    pub fn register(&mut self, rule: Box<dyn Rule>) -> Result<()> {
        if self.get(rule.code()).is_some() {
            return Err(Error::DuplicateRuleCode(rule.code()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// @ai:intent Drop rules whose code is in `codes`
    pub fn without(mut self, codes: &[u32]) -> Self {
        self.rules.retain(|rule| !codes.contains(&rule.code()));
        self
    }

    pub fn get(&self, code: u32) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.code() == code)
            .map(|rule| rule.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn codes(&self) -> Vec<u32> {
        self.iter().map(|rule| rule.code()).collect()
    }

    pub fn tags(&self) -> &TagMatcher {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self {
            tags: TagMatcher::default(),
            rules: builtin_rules(),
        }
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("codes", &self.codes())
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn comment_lines(lines: &[&str]) -> Vec<Token> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| Token::comment(idx + 1, 1, *line))
        .collect()
}
