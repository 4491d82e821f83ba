//! @ai:module:intent Feed one token sequence through every registered rule
//! @ai:module:layer application
//! @ai:module:public_api Checker, Input, Report, PluginId
//! @ai:module:depends_on rules, tokenizer, token, finding, error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::finding::Finding;
use crate::rules::RuleRegistry;
use crate::token::Token;
use crate::tokenizer::tokenize;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// @ai:intent Where source text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// @ai:intent Resolve a filename, treating absent, `-` and `stdin` as standard input
    /// @ai:example (None) -> Stdin
    /// @ai:example (Some("-")) -> Stdin
    /// @ai:example (Some("a.py")) -> File("a.py")
    /// @ai:effects pure
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None | Some("-") | Some("stdin") => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
        }
    }

    /// @ai:intent Name used when reporting, `stdin` for standard input
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => "stdin".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// @ai:intent Read the whole input as text
    /// @ai:effects fs:read, io:stdin
    pub fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(Error::StdinRead)?;
                Ok(buffer)
            }
            Input::File(path) => read_file(path),
        }
    }
}

/// @ai:effects fs:read
pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// @ai:intent Identity attached to every report for host integrations
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PluginId {
    pub name: &'static str,
    pub version: &'static str,
}

/// @ai:intent One finding in the `(row, col, message, plugin)` host shape
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    pub row: usize,
    pub col: usize,
    pub message: String,
    pub plugin: PluginId,
}

/// @ai:intent One analysis pass over a fixed token sequence
/// @ai:invariant tokens are computed once at construction
#[derive(Debug)]
pub struct Checker<'r> {
    registry: &'r RuleRegistry,
    tokens: Vec<Token>,
}

impl<'r> Checker<'r> {
    pub const NAME: &'static str = "todocheck";
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// @ai:intent Check an already tokenized sequence
    /// @ai:effects pure
    pub fn from_tokens(registry: &'r RuleRegistry, tokens: Vec<Token>) -> Self {
        Self { registry, tokens }
    }

    /// @ai:intent Tokenize source text and check it
    /// @ai:effects pure
    pub fn from_source(registry: &'r RuleRegistry, source: &str) -> Result<Self> {
        Ok(Self::from_tokens(registry, tokenize(source)?))
    }

    /// @ai:intent Read a file or stdin, tokenize it and check it
    /// @ai:effects fs:read, io:stdin
    pub fn from_input(registry: &'r RuleRegistry, input: &Input) -> Result<Self> {
        Self::from_source(registry, &input.read()?)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn plugin() -> PluginId {
        PluginId {
            name: Self::NAME,
            version: Self::VERSION,
        }
    }

    /// @ai:intent Collect findings rule by rule in registration order
    /// @ai:post within a rule, findings keep that rule's discovery order
    /// @ai:idempotent true
    /// @ai:effects pure
    pub fn get_errors(&self) -> Vec<Finding> {
        let tags = self.registry.tags();
        self.registry
            .iter()
            .flat_map(|rule| rule.evaluate(&self.tokens, tags))
            .collect()
    }

    /// @ai:intent Findings tagged with the plugin identity
    /// @ai:effects pure
    pub fn run(&self) -> Vec<Report> {
        let plugin = Self::plugin();
        self.get_errors()
            .into_iter()
            .map(|finding| {
                let (row, col, message) = finding.into_triple();
                Report {
                    row,
                    col,
                    message,
                    plugin,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn codes(source: &str) -> Vec<u32> {
        let registry = RuleRegistry::default();
        let checker = Checker::from_source(&registry, source).unwrap();
        checker.get_errors().iter().map(|f| f.code).collect()
    }

    #[test]
    fn test_well_formed_todo_is_clean() {
        assert!(codes("x = 1  # TODO(gram): drop this ABC-12\n").is_empty());
        assert!(codes("# TODO(gram): see https://example.com/issues/3\n").is_empty());
    }

    #[test]
    fn test_rule_major_order() {
        assert_eq!(codes("# fixme\n# todo\n"), vec![1, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7]);
    }

    #[test]
    fn test_idempotent() {
        let registry = RuleRegistry::default();
        let checker = Checker::from_source(&registry, "# ToDo:x\ny = 2 # BUG\n").unwrap();
        assert_eq!(checker.get_errors(), checker.get_errors());
    }

    #[test]
    fn test_run_attaches_plugin() {
        let registry = RuleRegistry::default();
        let checker = Checker::from_source(&registry, "# FIXME(me): x ABC-1\n").unwrap();
        let reports = checker.run();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].row, 1);
        assert_eq!(reports[0].col, 1);
        assert_eq!(
            reports[0].message,
            "T001: use TODO instead of FIXME for consistency"
        );
        assert_eq!(reports[0].plugin.name, "todocheck");
    }

    #[test]
    fn test_injected_tokens() {
        let registry = RuleRegistry::default();
        let tokens = vec![Token::comment(7, 9, "# TODO:")];
        let checker = Checker::from_tokens(&registry, tokens);
        let findings = checker.get_errors();

        assert!(findings.iter().all(|f| f.row == 7 && f.col == 9));
        assert!(findings.iter().any(|f| f.code == 5));
    }

    #[test]
    fn test_input_from_name() {
        assert_eq!(Input::from_name(None), Input::Stdin);
        assert_eq!(Input::from_name(Some("-")), Input::Stdin);
        assert_eq!(Input::from_name(Some("stdin")), Input::Stdin);
        assert_eq!(
            Input::from_name(Some("a.py")),
            Input::File(PathBuf::from("a.py"))
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::with_suffix(".py").unwrap();
        writeln!(file, "1 # TODO(author): i am ok EIQ-911").unwrap();

        let registry = RuleRegistry::default();
        let input = Input::File(file.path().to_path_buf());
        let checker = Checker::from_input(&registry, &input).unwrap();
        assert!(checker.get_errors().is_empty());
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let registry = RuleRegistry::default();
        let input = Input::File(PathBuf::from("/definitely/not/here.py"));
        let err = Checker::from_input(&registry, &input).unwrap_err();
        assert!(err.is_unreadable_input());
    }
}
