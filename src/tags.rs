//! @ai:module:intent Tag vocabulary and the shared tag matching primitive
//! @ai:module:layer domain
//! @ai:module:public_api Vocabulary, TagMatcher, TagMatch, CANONICAL_TAG, ALL_TAGS, BAD_TAGS
//! @ai:module:stateless true

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// The spelling every discouraged tag should be rewritten to.
pub const CANONICAL_TAG: &str = "TODO";

pub const ALL_TAGS: &[&str] = &["TODO", "FIXME", "BUG", "XXX"];
pub const BAD_TAGS: &[&str] = &["FIXME", "BUG", "XXX"];

/// @ai:intent The two tunable tag lists
/// @ai:invariant every bad tag is also a recognized tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tags: Vec<String>,
    bad_tags: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            tags: ALL_TAGS.iter().map(|t| t.to_string()).collect(),
            bad_tags: BAD_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// @ai:intent Build a validated vocabulary
    /// @ai:pre tags is non-empty and includes TODO
    /// @ai:post every bad tag appears in tags (case-insensitive); TODO is never a bad tag
    /// @ai:effects pure
    pub fn new(tags: Vec<String>, bad_tags: Vec<String>) -> Result<Self> {
        if tags.iter().all(|t| t.trim().is_empty()) {
            return Err(Error::Config("tag list must not be empty".to_string()));
        }
        if let Some(tag) = tags.iter().chain(bad_tags.iter()).find(|t| t.trim().is_empty()) {
            return Err(Error::Config(format!("blank tag {:?}", tag)));
        }
        // bad-tag messages tell the reader to write TODO instead
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(CANONICAL_TAG)) {
            return Err(Error::Config(format!(
                "tag list must include {}",
                CANONICAL_TAG
            )));
        }
        if bad_tags.iter().any(|t| t.eq_ignore_ascii_case(CANONICAL_TAG)) {
            return Err(Error::Config(format!(
                "{} cannot be a bad tag",
                CANONICAL_TAG
            )));
        }
        for bad in &bad_tags {
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(bad)) {
                return Err(Error::Config(format!(
                    "bad tag {} is not in the tag list",
                    bad
                )));
            }
        }
        Ok(Self { tags, bad_tags })
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn bad_tags(&self) -> &[String] {
        &self.bad_tags
    }
}

/// @ai:intent A tag found in a comment, with the offset right after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'t> {
    text: &'t str,
    tag: &'t str,
    end: usize,
}

impl<'t> TagMatch<'t> {
    /// Literal tag text as written, e.g. `ToDo`.
    pub fn tag(&self) -> &'t str {
        self.tag
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// @ai:intent Text after the tag with surrounding whitespace stripped
    /// @ai:example ("# TODO(me): x") -> "(me): x"
    /// @ai:effects pure
    pub fn head(&self) -> &'t str {
        self.text[self.end..].trim()
    }
}

/// @ai:intent Compiled `#\s*(TAG)` searches over the vocabulary
#[derive(Debug, Clone)]
pub struct TagMatcher {
    all: Regex,
    bad: Option<Regex>,
}

impl TagMatcher {
    /// @ai:intent Compile both searches once for a vocabulary
    /// @ai:effects pure
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let bad = if vocabulary.bad_tags().is_empty() {
            None
        } else {
            Some(compile(vocabulary.bad_tags())?)
        };
        Ok(Self {
            all: compile(vocabulary.tags())?,
            bad,
        })
    }

    /// @ai:intent Find the first recognized tag in a comment
    /// @ai:example ("# ToDo: bad") -> Some(tag = "ToDo")
    /// @ai:example ("# plain comment") -> None
    /// @ai:effects pure
    pub fn find<'t>(&self, text: &'t str) -> Option<TagMatch<'t>> {
        search(&self.all, text)
    }

    /// @ai:intent Find the first discouraged tag in a comment
    /// @ai:effects pure
    pub fn find_bad<'t>(&self, text: &'t str) -> Option<TagMatch<'t>> {
        self.bad.as_ref().and_then(|re| search(re, text))
    }
}

impl Default for TagMatcher {
    fn default() -> Self {
        // Built-in tags are plain words, compilation cannot fail.
        Self::new(&Vocabulary::default()).expect("built-in tag vocabulary compiles")
    }
}

fn compile(tags: &[String]) -> Result<Regex> {
    let alternation = tags
        .iter()
        .map(|t| regex::escape(t.trim()))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"#\s*({})", alternation);
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

fn search<'t>(re: &Regex, text: &'t str) -> Option<TagMatch<'t>> {
    let captures = re.captures(text)?;
    let whole = captures.get(0)?;
    let tag = captures.get(1)?;
    Some(TagMatch {
        text,
        tag: tag.as_str(),
        end: whole.end(),
    })
}
