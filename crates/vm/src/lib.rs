//! GLEAM virtual machine: a gas-metered stack interpreter.
//!
//! The VM is a stack-based machine with:
//! - An operand stack of [`Value`]s
//! - Sparse, address-keyed memory where unwritten cells read as `Undefined`
//! - A gas budget charged per instruction before its effect is committed
//! - A [`Host`] that answers `TIMESTAMP` and receives `PRINT` output
//!
//! # Usage
//!
//! ```
//! use gleam_common::{Instruction, Line, Program, Value};
//! use gleam_vm::{run, Outcome};
//!
//! let program = Program::new(vec![
//!     Line::Instr(Instruction::new("PUSH", vec!["42".to_string()])),
//!     Line::Instr(Instruction::new("RETURN", vec![])),
//! ])
//! .unwrap();
//!
//! let outcome = run(&program, 100).unwrap();
//! assert_eq!(outcome, Outcome::Returned(Value::Int(42)));
//! ```

pub mod error;
pub mod execute;
pub mod host;
pub mod machine;

pub use error::VmError;
pub use host::{Host, HostError, NullHost};
pub use machine::{Outcome, DEFAULT_GAS_LIMIT, VM};

use gleam_common::Program;

/// Evaluate a program once against a host.
///
/// Every call runs on a fresh VM: empty stack, empty memory, `pc = 0` and
/// the full `gas_limit`.
///
/// # Errors
///
/// Returns [`VmError`] if execution fails (unknown opcode, stack
/// underflow, unknown label, out of gas, etc.).
pub fn evaluate(
    program: &Program,
    gas_limit: u64,
    host: &mut dyn Host,
) -> Result<Outcome, VmError> {
    VM::new(program, gas_limit, host).evaluate()
}

/// Evaluate a program with no ledger attached.
///
/// `TIMESTAMP` fails with [`VmError::InvalidBlock`]; `PRINT` output goes to
/// the `gleam::print` tracing target.
pub fn run(program: &Program, gas_limit: u64) -> Result<Outcome, VmError> {
    evaluate(program, gas_limit, &mut NullHost)
}

