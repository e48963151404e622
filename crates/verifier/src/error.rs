//! Verification errors for the GLEAM verifier.
//!
//! Every error except `ProgramTooLarge` includes a program index (`at`).
//! The verifier collects ALL errors, not just the first.

use thiserror::Error;

/// Errors found during static verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    // --- Limits ---
    /// Program exceeds maximum size.
    #[error("program too large: {size} lines (max 65536)")]
    ProgramTooLarge { size: usize },

    // --- Structural ---
    /// The mnemonic is not in the opcode table.
    #[error("unknown opcode '{mnemonic}' at instruction {at}")]
    UnknownOpcode { at: usize, mnemonic: String },

    /// An opcode that takes an argument was given none.
    #[error("{opcode} expects an argument at instruction {at}")]
    MissingArgument { at: usize, opcode: &'static str },

    /// More argument tokens than the opcode reads.
    #[error("{opcode} takes {expected} argument(s), found {found} at instruction {at}")]
    ExtraArguments {
        at: usize,
        opcode: &'static str,
        expected: usize,
        found: usize,
    },

    /// PUSH literal is not a 64-bit integer.
    #[error("invalid integer literal '{token}' at instruction {at}")]
    InvalidLiteral { at: usize, token: String },

    /// LOAD/STORE address is not a non-negative integer.
    #[error("invalid memory address '{token}' for {opcode} at instruction {at}")]
    InvalidAddress {
        at: usize,
        opcode: &'static str,
        token: String,
    },

    // --- Labels ---
    /// Jump target is not a label of the program.
    #[error("unresolved label '{label}' at instruction {at}")]
    UnresolvedLabel { at: usize, label: String },

    // --- Reachability ---
    /// Instruction can never execute.
    #[error("unreachable instruction at {at}")]
    UnreachableInstruction { at: usize },
}

impl VerifyError {
    /// Program index the error refers to, if any.
    pub fn at(&self) -> Option<usize> {
        match self {
            VerifyError::ProgramTooLarge { .. } => None,
            VerifyError::UnknownOpcode { at, .. }
            | VerifyError::MissingArgument { at, .. }
            | VerifyError::ExtraArguments { at, .. }
            | VerifyError::InvalidLiteral { at, .. }
            | VerifyError::InvalidAddress { at, .. }
            | VerifyError::UnresolvedLabel { at, .. }
            | VerifyError::UnreachableInstruction { at } => Some(*at),
        }
    }
}
