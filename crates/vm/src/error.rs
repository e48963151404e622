//! Runtime errors for the GLEAM VM.
//!
//! Every error includes the program index (`at`) of the instruction that
//! failed. All of them end the evaluation; none is retried.

use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// The mnemonic is not in the opcode table.
    #[error("unknown opcode '{mnemonic}' at instruction {at}")]
    UnknownOpcode { at: usize, mnemonic: String },

    /// Pop on an empty stack.
    #[error("stack underflow at instruction {at}")]
    StackUnderflow { at: usize },

    /// Jump target is not a label of the program.
    #[error("unknown label '{label}' at instruction {at}")]
    UnknownLabel { at: usize, label: String },

    /// The next instruction costs more gas than is left.
    #[error("out of gas at instruction {at}: {opcode} costs {required}, {remaining} remaining")]
    OutOfGas {
        at: usize,
        opcode: &'static str,
        required: u64,
        remaining: u64,
    },

    /// An opcode that takes an argument was given none.
    #[error("{opcode} expects an argument at instruction {at}")]
    MissingArgument { at: usize, opcode: &'static str },

    /// An argument token could not be coerced to what the opcode needs.
    #[error("invalid argument '{token}' for {opcode} at instruction {at}")]
    InvalidArgument {
        at: usize,
        opcode: &'static str,
        token: String,
    },

    /// An operand has the wrong kind for the opcode.
    #[error("type mismatch at instruction {at}: {opcode} cannot take {found}")]
    TypeMismatch {
        at: usize,
        opcode: &'static str,
        found: &'static str,
    },

    /// DIV or MOD with a zero divisor.
    #[error("division by zero at instruction {at}")]
    DivisionByZero { at: usize },

    /// TIMESTAMP could not read the block reference.
    #[error("invalid block reference at instruction {at}: {reason}")]
    InvalidBlock { at: usize, reason: String },
}

impl VmError {
    /// Program index of the failing instruction.
    pub fn at(&self) -> usize {
        match self {
            VmError::UnknownOpcode { at, .. }
            | VmError::StackUnderflow { at }
            | VmError::UnknownLabel { at, .. }
            | VmError::OutOfGas { at, .. }
            | VmError::MissingArgument { at, .. }
            | VmError::InvalidArgument { at, .. }
            | VmError::TypeMismatch { at, .. }
            | VmError::DivisionByZero { at }
            | VmError::InvalidBlock { at, .. } => *at,
        }
    }

    /// True if the program ran out of budget rather than being invalid.
    pub fn is_out_of_gas(&self) -> bool {
        matches!(self, VmError::OutOfGas { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            VmError::StackUnderflow { at: 4 }.to_string(),
            "stack underflow at instruction 4"
        );
        assert_eq!(
            VmError::OutOfGas {
                at: 2,
                opcode: "ADD",
                required: 3,
                remaining: 1
            }
            .to_string(),
            "out of gas at instruction 2: ADD costs 3, 1 remaining"
        );
        assert_eq!(
            VmError::UnknownLabel {
                at: 0,
                label: "nowhere".to_string()
            }
            .to_string(),
            "unknown label 'nowhere' at instruction 0"
        );
    }

    #[test]
    fn out_of_gas_is_distinguishable() {
        let gas = VmError::OutOfGas {
            at: 0,
            opcode: "PUSH",
            required: 3,
            remaining: 0,
        };
        assert!(gas.is_out_of_gas());
        assert!(!VmError::DivisionByZero { at: 0 }.is_out_of_gas());
    }

    #[test]
    fn at_accessor() {
        let e = VmError::UnknownOpcode {
            at: 9,
            mnemonic: "HALT".to_string(),
        };
        assert_eq!(e.at(), 9);
    }
}
