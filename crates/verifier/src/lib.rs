//! GLEAM verifier: static analysis for loaded programs.
//!
//! The verifier checks a `Program` BEFORE execution. It collects ALL
//! errors (not just the first) and returns them. The interpreter never
//! requires a verified program; this is an optional gate for tools that
//! want to reject bad bytecode before spending gas on it.
//!
//! # Usage
//!
//! ```
//! use gleam_common::{Instruction, Line, Program};
//! use gleam_verifier::verify;
//!
//! let program = Program::new(vec![
//!     Line::Instr(Instruction::new("PUSH", vec!["42".to_string()])),
//!     Line::Instr(Instruction::new("RETURN", vec![])),
//! ])
//! .unwrap();
//!
//! assert!(verify(&program).is_ok());
//! ```
//!
//! # Passes
//!
//! 1. **Limits**: program size
//! 2. **Structural**: known opcodes, argument counts, literal shapes
//! 3. **Labels**: jump targets exist
//! 4. **Reachability**: dead code detection

pub mod error;
pub mod labels;
pub mod limits;
pub mod reachability;
pub mod structural;

pub use error::VerifyError;

use gleam_common::Program;

/// Verify a program.
///
/// Returns `Ok(())` if the program passes all checks, or
/// `Err(Vec<VerifyError>)` with all errors found.
///
/// Reachability runs only when the earlier passes found nothing, since an
/// unknown opcode or missing label makes the control-flow graph unreliable.
pub fn verify(program: &Program) -> Result<(), Vec<VerifyError>> {
    let mut all_errors = Vec::new();

    // Pass 1: Limits
    all_errors.extend(limits::check_limits(program));

    // Pass 2: Structural
    all_errors.extend(structural::check_structural(program));

    // Pass 3: Labels
    all_errors.extend(labels::check_labels(program));

    // Pass 4: Reachability
    if all_errors.is_empty() {
        all_errors.extend(reachability::check_reachability(program));
    }

    if all_errors.is_empty() {
        Ok(())
    } else {
        Err(all_errors)
    }
}
