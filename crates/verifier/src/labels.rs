//! Jump target resolution.

use crate::error::VerifyError;
use gleam_common::Program;

/// Report every JUMP/JZ/JNZ whose target is not a label of the program.
pub fn check_labels(program: &Program) -> Vec<VerifyError> {
    program
        .instructions()
        .filter(|(_, instr)| instr.opcode().is_some_and(|op| op.is_jump()))
        .filter_map(|(at, instr)| {
            let label = instr.arg(0)?;
            match program.label_index(label) {
                Some(_) => None,
                None => Some(VerifyError::UnresolvedLabel {
                    at,
                    label: label.to_string(),
                }),
            }
        })
        .collect()
}
