//! GLEAM assembler: loading, binding and rendering bytecode text.
//!
//! The text format is one instruction or label per line:
//!
//! ```text
//! <block>          # placeholder, replaced by the binder
//! STORE 0
//! LOAD 0
//! TIMESTAMP
//! PUSH 2
//! MOD
//! JNZ odd
//! PUSH 0
//! RETURN
//! odd:             # label marker
//! PUSH 1
//! RETURN
//! ```
//!
//! # Usage
//!
//! ```
//! use std::collections::BTreeMap;
//! use gleam_assembler::{compile, render};
//!
//! let mut args = BTreeMap::new();
//! args.insert("amount".to_string(), "42".to_string());
//!
//! let program = compile("<amount>\nRETURN\n", &args).unwrap();
//! assert_eq!(render(&program), "PUSHARG 42\nRETURN\n");
//! ```

pub mod error;

mod binder;
mod disassembler;
mod lexer;
mod parser;

pub use disassembler::render;
pub use error::AsmError;

use gleam_common::Program;
use std::collections::BTreeMap;

/// Load bytecode text into a program.
///
/// Returns the first error encountered.
pub fn load(text: &str) -> Result<Program, AsmError> {
    parser::parse_program(text)
}

/// Bind a template's `<name>` placeholders to argument values.
///
/// The result is bound bytecode text, ready for [`load`] or for writing to
/// a staged file.
pub fn bind(template: &str, args: &BTreeMap<String, String>) -> Result<String, AsmError> {
    binder::bind_template(template, args)
}

/// Check that a template loads once its placeholders are bound.
///
/// Catches malformed lines and duplicate labels at deploy time, before
/// any argument values are known.
pub fn check_template(template: &str) -> Result<(), AsmError> {
    parser::parse_template(template).map(|_| ())
}

/// Bind a template and load the result.
pub fn compile(template: &str, args: &BTreeMap<String, String>) -> Result<Program, AsmError> {
    load(&bind(template, args)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gleam_common::{Instruction, Line};

    #[test]
    fn load_minimal() {
        let program = load("PUSH 5\nPUSH 2\nSUB\nRETURN\n").unwrap();
        assert_eq!(program.len(), 4);
        assert_eq!(
            program.get(0),
            Some(&Line::Instr(Instruction::new("PUSH", vec!["5".to_string()])))
        );
    }

    #[test]
    fn load_without_trailing_newline() {
        let program = load("PUSH 1\nRETURN").unwrap();
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn render_then_load_is_identity() {
        let text = "# doubles its input\n<x>\n  PUSH 2  \nMUL\ndone:\nRETURN\n";
        let mut args = BTreeMap::new();
        args.insert("x".to_string(), "21".to_string());
        let first = compile(text, &args).unwrap();
        let second = load(&render(&first)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn render_is_canonical() {
        let program = load("  PUSH   1   # one\n\nend:\nRETURN").unwrap();
        assert_eq!(render(&program), "PUSH 1\nend:\nRETURN\n");
    }

    #[test]
    fn compile_reports_unbound_before_loading() {
        let err = compile("<a>\n99 bad\n", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, AsmError::UnboundArgument { line: 1, .. }));
    }

    #[test]
    fn check_template_accepts_placeholders() {
        assert_eq!(check_template("<to>\nSTORE 0\nend:\nRETURN\n"), Ok(()));
    }

    #[test]
    fn check_template_rejects_malformed_lines() {
        let err = check_template("<to>\nend: RETURN\n").unwrap_err();
        assert!(matches!(err, AsmError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn check_template_rejects_duplicate_labels() {
        let err = check_template("a:\n<x>\na:\n").unwrap_err();
        assert_eq!(
            err,
            AsmError::DuplicateLabel {
                line: 3,
                label: "a".to_string()
            }
        );
    }

    #[test]
    fn error_reports_correct_line() {
        let err = load("PUSH 1\n\n: nope\n").unwrap_err();
        assert_eq!(err.line(), 3);
    }
}
