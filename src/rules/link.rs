//! @ai:module:intent Require an issue link or ticket code for each TODO, across continuation lines
//! @ai:module:layer domain
//! @ai:module:public_api MissedLinkRule
//! @ai:module:stateless true

use super::Rule;
use crate::finding::Finding;
use crate::tags::TagMatcher;
use crate::token::Token;
use regex::Regex;

/// @ai:intent Flag annotation groups without a URL, issue code or ticket number
/// @ai:effects pure
#[derive(Debug, Clone)]
pub struct MissedLinkRule {
    issue: Regex,
    ticket: Regex,
}

impl MissedLinkRule {
    pub fn new() -> Self {
        Self {
            // EIQ-911
            issue: Regex::new(r"[A-Z]{1,6}-?\d+").expect("Invalid regex"),
            // #911
            ticket: Regex::new(r"\s#\d+").expect("Invalid regex"),
        }
    }

    /// @ai:intent Decide whether a group's joined text references an issue
    /// @ai:example ("# TODO: see https://x/1") -> true
    /// @ai:example ("# TODO: lowercase lol-911") -> false
    /// @ai:effects pure
    fn has_link(&self, group: &str) -> bool {
        group.contains("http://")
            || group.contains("https://")
            || self.issue.is_match(group)
            || self.ticket.is_match(group)
    }

    /// @ai:intent Split the token stream into annotation groups
    /// @ai:post one group per tagged comment, continuation comments appended
    /// @ai:effects pure
    fn groups<'a>(&self, tokens: &'a [Token], tags: &TagMatcher) -> Vec<(&'a Token, String)> {
        let mut groups = Vec::new();
        let mut current: Option<(&Token, Vec<&str>)> = None;

        for token in tokens {
            if token.is_line_break() {
                continue;
            }

            // code resumed, the comment run is over
            if !token.is_comment() {
                if let Some((start, lines)) = current.take() {
                    groups.push((start, lines.join("\n")));
                }
                continue;
            }

            if tags.find(token.text()).is_some() {
                if let Some((start, lines)) = current.take() {
                    groups.push((start, lines.join("\n")));
                }
                current = Some((token, vec![token.text()]));
                continue;
            }

            if let Some((_, lines)) = current.as_mut() {
                lines.push(token.text());
            }
        }

        if let Some((start, lines)) = current {
            groups.push((start, lines.join("\n")));
        }

        groups
    }
}

impl Default for MissedLinkRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for MissedLinkRule {
    fn code(&self) -> u32 {
        3
    }

    fn name(&self) -> &'static str {
        "missed-link"
    }

    fn text(&self) -> &'static str {
        "add link on issue into TODO"
    }

    fn evaluate(&self, tokens: &[Token], tags: &TagMatcher) -> Vec<Finding> {
        self.groups(tokens, tags)
            .into_iter()
            .filter(|(_, group)| !self.has_link(group))
            .map(|(start, _)| Finding::at(start, self.code(), self.text()))
            .collect()
    }
}
