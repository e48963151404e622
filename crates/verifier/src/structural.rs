//! Structural validation pass for GLEAM programs.
//!
//! Checks each instruction on its own: the mnemonic is known, the argument
//! count matches the opcode's arity, and literal arguments have the shape
//! the interpreter will coerce them to.

use crate::error::VerifyError;
use gleam_common::{Instruction, Opcode, Program};

/// Run the structural validation pass.
pub fn check_structural(program: &Program) -> Vec<VerifyError> {
    let mut errors = Vec::new();
    for (at, instr) in program.instructions() {
        check_instruction(at, instr, &mut errors);
    }
    errors
}

fn check_instruction(at: usize, instr: &Instruction, errors: &mut Vec<VerifyError>) {
    let Some(opcode) = instr.opcode() else {
        errors.push(VerifyError::UnknownOpcode {
            at,
            mnemonic: instr.mnemonic.clone(),
        });
        return;
    };

    let expected = opcode.arity();
    let found = instr.args.len();
    if found < expected {
        errors.push(VerifyError::MissingArgument {
            at,
            opcode: opcode.mnemonic(),
        });
        return;
    }
    if found > expected {
        errors.push(VerifyError::ExtraArguments {
            at,
            opcode: opcode.mnemonic(),
            expected,
            found,
        });
    }

    let Some(token) = instr.arg(0) else {
        return;
    };
    match opcode {
        Opcode::Push if token.parse::<i64>().is_err() => {
            errors.push(VerifyError::InvalidLiteral {
                at,
                token: token.to_string(),
            });
        }
        Opcode::Load | Opcode::Store if token.parse::<u64>().is_err() => {
            errors.push(VerifyError::InvalidAddress {
                at,
                opcode: opcode.mnemonic(),
                token: token.to_string(),
            });
        }
        _ => {}
    }
}
