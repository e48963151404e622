//! VM state management: stack, memory, program counter, gas.

use crate::error::VmError;
use crate::host::Host;
use gleam_common::{Program, Value};
use std::collections::BTreeMap;

/// Gas budget used when the caller does not choose one.
pub const DEFAULT_GAS_LIMIT: u64 = 1000;

/// How an evaluation ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// RETURN popped this value.
    Returned(Value),
    /// The program counter ran past the last line without a RETURN.
    EndOfProgram,
}

impl Outcome {
    /// The returned value, if RETURN was reached.
    pub fn returned(&self) -> Option<&Value> {
        match self {
            Outcome::Returned(value) => Some(value),
            Outcome::EndOfProgram => None,
        }
    }

    /// The value a caller sees: the returned value, or `Undefined`.
    pub fn into_value(self) -> Value {
        match self {
            Outcome::Returned(value) => value,
            Outcome::EndOfProgram => Value::Undefined,
        }
    }
}

/// The GLEAM virtual machine.
///
/// A VM borrows one program and one host. Every call to
/// [`VM::evaluate`] starts from an empty stack, empty memory, `pc = 0` and
/// the full gas limit; nothing carries over between calls.
pub struct VM<'a> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    /// Ledger services for TIMESTAMP and PRINT.
    pub(crate) host: &'a mut dyn Host,
    /// Operand stack.
    pub(crate) stack: Vec<Value>,
    /// Sparse memory. Unwritten addresses read as `Undefined`.
    pub(crate) memory: BTreeMap<u64, Value>,
    /// Program counter (line index).
    pub(crate) pc: usize,
    /// Budget for one evaluation.
    pub(crate) gas_limit: u64,
    /// Gas left in the current evaluation.
    pub(crate) gas_remaining: u64,
}

impl<'a> VM<'a> {
    /// Create a new VM for the given program.
    pub fn new(program: &'a Program, gas_limit: u64, host: &'a mut dyn Host) -> Self {
        Self {
            program,
            host,
            stack: Vec::new(),
            memory: BTreeMap::new(),
            pc: 0,
            gas_limit,
            gas_remaining: gas_limit,
        }
    }

    /// Clear all execution state back to the initial `Running(0, gas_limit)`.
    pub(crate) fn reset(&mut self) {
        self.stack.clear();
        self.memory.clear();
        self.pc = 0;
        self.gas_remaining = self.gas_limit;
    }

    /// The operand stack, bottom first.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// The value stored at `addr`, or `Undefined`.
    pub fn memory(&self, addr: u64) -> Value {
        self.memory.get(&addr).cloned().unwrap_or(Value::Undefined)
    }

    /// Current program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Gas left after the last step.
    pub fn gas_remaining(&self) -> u64 {
        self.gas_remaining
    }

    /// Gas consumed so far in the current evaluation.
    pub fn gas_used(&self) -> u64 {
        self.gas_limit - self.gas_remaining
    }

    /// Push a value onto the stack.
    pub(crate) fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Pop a value from the stack.
    pub(crate) fn pop(&mut self) -> Result<Value, VmError> {
        self.stack
            .pop()
            .ok_or(VmError::StackUnderflow { at: self.pc })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;

    #[test]
    fn fresh_vm_state() {
        let program = Program::new(vec![]).unwrap();
        let mut host = NullHost;
        let vm = VM::new(&program, 50, &mut host);
        assert!(vm.stack().is_empty());
        assert_eq!(vm.pc(), 0);
        assert_eq!(vm.gas_remaining(), 50);
        assert_eq!(vm.gas_used(), 0);
        assert_eq!(vm.memory(0), Value::Undefined);
    }

    #[test]
    fn pop_empty_is_underflow() {
        let program = Program::new(vec![]).unwrap();
        let mut host = NullHost;
        let mut vm = VM::new(&program, 0, &mut host);
        assert_eq!(vm.pop(), Err(VmError::StackUnderflow { at: 0 }));
    }

    #[test]
    fn outcome_value() {
        assert_eq!(Outcome::Returned(Value::Int(1)).into_value(), Value::Int(1));
        assert_eq!(Outcome::EndOfProgram.into_value(), Value::Undefined);
        assert_eq!(Outcome::EndOfProgram.returned(), None);
    }
}
