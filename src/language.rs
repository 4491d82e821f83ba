//! @ai:module:intent Recognize Python source files by extension
//! @ai:module:layer domain
//! @ai:module:public_api Language, detect_language, is_supported_file
//! @ai:module:stateless true
//!
//! Only Python is recognized: the tokenizer follows Python's string and
//! comment lexing, which would misread `'` in YAML prose or `$#` in shell.

use std::path::Path;

/// @ai:intent A language whose sources the tokenizer lexes correctly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
}

const ALL_LANGUAGES: [Language; 1] = [Language::Python];

impl Language {
    /// @ai:intent Get file extensions for this language
    /// @ai:effects pure
    pub fn extensions(&self) -> &[&str] {
        match self {
            Language::Python => &["py", "pyi"],
        }
    }

    /// @ai:intent Get language name as string
    /// @ai:effects pure
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
        }
    }
}

/// @ai:intent Detect the language from a file path
/// @ai:post result is Some if extension is recognized
/// @ai:example ("test.py") -> Some(Python)
/// @ai:example ("deploy.sh") -> None
/// @ai:example ("test.rs") -> None
/// @ai:effects pure
pub fn detect_language(path: &Path) -> Option<Language> {
    let ext = path.extension()?.to_str()?;
    ALL_LANGUAGES
        .into_iter()
        .find(|lang| lang.extensions().contains(&ext))
}

/// @ai:intent Check if a file should be linted based on extension
/// @ai:effects pure
pub fn is_supported_file(path: &Path) -> bool {
    detect_language(path).is_some()
}
