//! @ai:module:intent TODO annotation checker library
//! @ai:module:layer infrastructure
//! @ai:module:public_api checker, config, error, finding, language, linter, output, rules, tags, token, tokenizer
//! @ai:module:stateless true
//!
//! # todocheck
//!
//! Flags stylistic and completeness defects in TODO-like comments: discouraged
//! tags, wrong case, missing author, colon, text, spacing and issue link.
//!
//! ## Example
//!
//! ```rust
//! use todocheck::{Checker, RuleRegistry};
//!
//! let registry = RuleRegistry::default();
//! let checker = Checker::from_source(&registry, "x = 1  # FIXME(gram): drop ABC-12\n").unwrap();
//! let messages: Vec<String> = checker.get_errors().iter().map(|f| f.message()).collect();
//! assert_eq!(messages, vec!["T001: use TODO instead of FIXME for consistency"]);
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod finding;
pub mod language;
pub mod linter;
pub mod output;
pub mod rules;
pub mod tags;
pub mod token;
pub mod tokenizer;

pub use checker::{Checker, Input, PluginId, Report};
pub use config::LintConfig;
pub use error::{Error, Result};
pub use finding::{Finding, PREFIX};
pub use language::{detect_language, is_supported_file, Language};
pub use linter::{
    lint_directory, lint_file, lint_input, lint_paths, lint_source, lint_stdin, FileFinding,
    InputFailure, LintResult,
};
pub use output::{format_lint_result, format_rules, OutputFormat};
pub use rules::{builtin_rules, Rule, RuleRegistry};
pub use tags::{TagMatch, TagMatcher, Vocabulary};
pub use token::{Position, Token, TokenKind};
pub use tokenizer::tokenize;
