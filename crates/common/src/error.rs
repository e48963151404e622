//! Errors raised while assembling a [`Program`](crate::Program).

use thiserror::Error;

/// Errors that occur when building a program from its lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// The same label name marks two lines.
    #[error("duplicate label '{label}' at index {at} (first defined at index {first})")]
    DuplicateLabel {
        label: String,
        first: usize,
        at: usize,
    },
}
