//! @ai:module:intent Define the finding record produced by rules
//! @ai:module:layer domain
//! @ai:module:public_api Finding, PREFIX
//! @ai:module:stateless true

use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Family marker shared by every rule code; `T00` + `1` renders `T001`.
pub const PREFIX: &str = "T00";

/// @ai:intent One reported defect at a source position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub row: usize,
    pub col: usize,
    pub code: u32,
    pub text: String,
}

impl Finding {
    pub fn new(row: usize, col: usize, code: u32, text: impl Into<String>) -> Self {
        Self {
            row,
            col,
            code,
            text: text.into(),
        }
    }

    /// @ai:intent Position a finding at the start of the triggering token
    /// @ai:effects pure
    pub fn at(token: &Token, code: u32, text: impl Into<String>) -> Self {
        Self::new(token.start_row(), token.start_col(), code, text)
    }

    /// @ai:intent Render the stable `<prefix><code>: <text>` message
    /// @ai:example (code 4, "missed colon in TODO") -> "T004: missed colon in TODO"
    /// @ai:effects pure
    pub fn message(&self) -> String {
        format!("{}{}: {}", PREFIX, self.code, self.text)
    }

    /// @ai:intent Short identifier such as `T003`
    pub fn code_name(&self) -> String {
        format!("{}{}", PREFIX, self.code)
    }

    /// @ai:intent Destructure into the `(row, col, message)` triple hosts expect
    pub fn into_triple(self) -> (usize, usize, String) {
        let message = self.message();
        (self.row, self.col, message)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let finding = Finding::new(3, 5, 1, "use TODO instead of FIXME for consistency");
        assert_eq!(
            finding.message(),
            "T001: use TODO instead of FIXME for consistency"
        );
        assert_eq!(finding.to_string(), finding.message());
        assert_eq!(finding.code_name(), "T001");
    }

    #[test]
    fn test_into_triple() {
        let finding = Finding::new(2, 1, 5, "missed text in TODO");
        assert_eq!(
            finding.into_triple(),
            (2, 1, "T005: missed text in TODO".to_string())
        );
    }
}
