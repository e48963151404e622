//! Limits checking for GLEAM programs.

use crate::error::VerifyError;
use gleam_common::Program;

/// Maximum program size in lines (labels and instructions).
pub const MAX_PROGRAM_SIZE: usize = 65_536;

/// Run the limits check.
pub fn check_limits(program: &Program) -> Vec<VerifyError> {
    let mut errors = Vec::new();

    if program.len() > MAX_PROGRAM_SIZE {
        errors.push(VerifyError::ProgramTooLarge {
            size: program.len(),
        });
    }

    errors
}
