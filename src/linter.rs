//! @ai:module:intent Lint files, directories and stdin for TODO annotation defects
//! @ai:module:layer application
//! @ai:module:public_api lint_source, lint_file, lint_directory, lint_stdin, lint_paths, LintResult, FileFinding, InputFailure
//! @ai:module:depends_on checker, rules, language, error
//! @ai:module:stateless true

use crate::checker::{Checker, Input};
use crate::error::{Error, Result};
use crate::finding::Finding;
use crate::language::detect_language;
use crate::rules::RuleRegistry;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// @ai:intent A finding tied to the file it was found in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileFinding {
    pub path: String,
    pub row: usize,
    pub col: usize,
    pub code: String,
    pub message: String,
}

impl FileFinding {
    fn new(path: &str, finding: Finding) -> Self {
        Self {
            path: path.to_string(),
            row: finding.row,
            col: finding.col,
            code: finding.code_name(),
            message: finding.message(),
        }
    }
}

/// @ai:intent An input that could not be read or tokenized
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputFailure {
    pub path: String,
    pub reason: String,
    pub unreadable: bool,
}

/// @ai:intent Result of linting one or more inputs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LintResult {
    pub files_checked: usize,
    pub findings: Vec<FileFinding>,
    pub failures: Vec<InputFailure>,
}

impl LintResult {
    /// @ai:intent Check if linting passed (no findings, every input readable)
    pub fn passed(&self) -> bool {
        self.findings.is_empty() && self.failures.is_empty()
    }

    /// @ai:intent Merge another lint result into this one
    pub fn merge(&mut self, other: LintResult) {
        self.files_checked += other.files_checked;
        self.findings.extend(other.findings);
        self.failures.extend(other.failures);
    }

    fn failed(name: &str, err: &Error) -> Self {
        Self {
            failures: vec![InputFailure {
                path: name.to_string(),
                reason: err.to_string(),
                unreadable: err.is_unreadable_input(),
            }],
            ..Default::default()
        }
    }
}

/// @ai:intent Lint in-memory source text reported under `name`
/// @ai:effects pure
pub fn lint_source(name: &str, source: &str, registry: &RuleRegistry) -> Result<LintResult> {
    let checker = Checker::from_source(registry, source)?;
    let findings = checker
        .get_errors()
        .into_iter()
        .map(|finding| FileFinding::new(name, finding))
        .collect();

    Ok(LintResult {
        files_checked: 1,
        findings,
        failures: Vec::new(),
    })
}

/// @ai:intent Lint a file or stdin
/// @ai:effects fs:read, io:stdin
pub fn lint_input(input: &Input, registry: &RuleRegistry) -> Result<LintResult> {
    let name = input.display_name();
    tracing::debug!("Checking {}", name);
    lint_source(&name, &input.read()?, registry)
}

/// @ai:intent Lint a single file
/// @ai:effects fs:read
pub fn lint_file(path: &Path, registry: &RuleRegistry) -> Result<LintResult> {
    lint_input(&Input::File(path.to_path_buf()), registry)
}

/// @ai:intent Lint standard input
/// @ai:effects io:stdin
pub fn lint_stdin(registry: &RuleRegistry) -> Result<LintResult> {
    lint_input(&Input::Stdin, registry)
}

/// @ai:intent Lint all supported files in a directory
/// @ai:post unreadable files and directories are recorded as failures, the walk continues
/// @ai:effects fs:read
pub fn lint_directory(path: &Path, registry: &RuleRegistry) -> LintResult {
    let mut result = LintResult::default();

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let name = e.path().unwrap_or(path).display().to_string();
                tracing::warn!("Skipping {}: {}", name, e);
                result.merge(LintResult::failed(&name, &Error::Walk(e)));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let file_path = entry.path();

        if let Some(language) = detect_language(file_path) {
            tracing::debug!("Found {} file {}", language.name(), file_path.display());
            match lint_file(file_path, registry) {
                Ok(file_result) => result.merge(file_result),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", file_path.display(), e);
                    result.merge(LintResult::failed(&file_path.display().to_string(), &e));
                }
            }
        }
    }

    result
}

/// @ai:intent Lint a mix of files, directories and `-` for stdin
/// @ai:effects fs:read, io:stdin
pub fn lint_paths(paths: &[String], registry: &RuleRegistry) -> LintResult {
    let mut result = LintResult::default();

    for name in paths {
        let input = Input::from_name(Some(name));
        let outcome = match &input {
            Input::File(path) if path.is_dir() => Ok(lint_directory(path, registry)),
            _ => lint_input(&input, registry),
        };
        match outcome {
            Ok(r) => result.merge(r),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", input.display_name(), e);
                result.merge(LintResult::failed(&input.display_name(), &e));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_lint_bad_tag() {
        let mut file = NamedTempFile::with_suffix(".py").unwrap();
        writeln!(file, "1 # FIXME(me): inline ABC-1").unwrap();

        let result = lint_file(file.path(), &RuleRegistry::default()).unwrap();

        assert_eq!(result.files_checked, 1);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].code, "T001");
        assert_eq!(result.findings[0].col, 3);
        assert!(!result.passed());
    }

    #[test]
    fn test_lint_clean_file() {
        let mut file = NamedTempFile::with_suffix(".py").unwrap();
        writeln!(file, "# TODO(author): i am ok #12\nx = 1").unwrap();

        let result = lint_file(file.path(), &RuleRegistry::default()).unwrap();

        assert!(result.passed());
    }

    #[test]
    fn test_lint_directory_skips_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.py"), "# TODO: no author\n").unwrap();
        std::fs::write(dir.path().join("b.rs"), "// TODO: ignored\n").unwrap();
        std::fs::write(dir.path().join("c.sh"), "echo hi # XXX\n").unwrap();

        let result = lint_directory(dir.path(), &RuleRegistry::default());

        assert_eq!(result.files_checked, 1);
        assert!(result.findings.iter().all(|f| f.path.ends_with("a.py")));
        assert!(!result.findings.is_empty());
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_lint_directory_leaves_yaml_and_shell_alone() {
        let dir = tempfile::tempdir().unwrap();
        // an apostrophe in YAML prose would open a Python string
        std::fs::write(
            dir.path().join("ci.yml"),
            "name: it's a build\n# FIXME: flaky\n",
        )
        .unwrap();
        // `$#` is an argument count in shell, not a comment
        std::fs::write(dir.path().join("run.sh"), "echo $# args\n").unwrap();

        let result = lint_directory(dir.path(), &RuleRegistry::default());

        assert_eq!(result.files_checked, 0);
        assert!(result.passed());
    }

    #[test]
    fn test_lint_directory_missing_root_is_unreadable() {
        let result = lint_directory(Path::new("/no/such/dir"), &RuleRegistry::default());

        assert_eq!(result.files_checked, 0);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].path, "/no/such/dir");
        assert!(result.failures[0].unreadable);
        assert!(!result.passed());
    }

    #[test]
    fn test_lint_directory_records_tokenize_failure() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.py"), "x = '''\n").unwrap();
        std::fs::write(dir.path().join("fine.py"), "x = 1\n").unwrap();

        let result = lint_directory(dir.path(), &RuleRegistry::default());

        assert_eq!(result.files_checked, 1);
        assert_eq!(result.failures.len(), 1);
        assert!(!result.failures[0].unreadable);
        assert!(!result.passed());
    }

    #[test]
    fn test_lint_paths_missing_file() {
        let paths = vec!["/no/such/file.py".to_string()];
        let result = lint_paths(&paths, &RuleRegistry::default());

        assert_eq!(result.failures.len(), 1);
        assert!(result.failures[0].unreadable);
    }
}
