//! Error types for the GLEAM loader and binder.

use thiserror::Error;

/// Errors produced while binding a template or loading bytecode text.
///
/// Every variant carries the 1-based source line it was found on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// A non-label line does not start with a recognizable mnemonic.
    #[error("line {line}: malformed line '{text}'")]
    MalformedLine { line: usize, text: String },

    /// A label name is declared on more than one line.
    #[error("line {line}: duplicate label '{label}'")]
    DuplicateLabel { line: usize, label: String },

    /// A `<name>` placeholder has no value in the argument map.
    #[error("line {line}: unbound argument '{name}'")]
    UnboundArgument { line: usize, name: String },

    /// A bound value cannot be written as a single bytecode token.
    #[error("line {line}: argument '{name}' has unrepresentable value '{value}'")]
    UnrepresentableArgument {
        line: usize,
        name: String,
        value: String,
    },
}

impl AsmError {
    /// The source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            AsmError::MalformedLine { line, .. }
            | AsmError::DuplicateLabel { line, .. }
            | AsmError::UnboundArgument { line, .. }
            | AsmError::UnrepresentableArgument { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_malformed_line() {
        let e = AsmError::MalformedLine {
            line: 3,
            text: "42 PUSH".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: malformed line '42 PUSH'");
    }

    #[test]
    fn error_display_duplicate_label() {
        let e = AsmError::DuplicateLabel {
            line: 9,
            label: "end".to_string(),
        };
        assert_eq!(e.to_string(), "line 9: duplicate label 'end'");
    }

    #[test]
    fn error_display_unbound_argument() {
        let e = AsmError::UnboundArgument {
            line: 1,
            name: "block".to_string(),
        };
        assert_eq!(e.to_string(), "line 1: unbound argument 'block'");
    }

    #[test]
    fn error_display_unrepresentable_argument() {
        let e = AsmError::UnrepresentableArgument {
            line: 2,
            name: "who".to_string(),
            value: "a b".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "line 2: argument 'who' has unrepresentable value 'a b'"
        );
    }

    #[test]
    fn line_accessor() {
        let e = AsmError::UnboundArgument {
            line: 12,
            name: "x".to_string(),
        };
        assert_eq!(e.line(), 12);
    }
}
