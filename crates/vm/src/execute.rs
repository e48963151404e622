//! Main execution loop and opcode dispatch for the GLEAM VM.

use crate::error::VmError;
use crate::machine::{Outcome, VM};
use gleam_common::{Instruction, Line, Opcode, Value};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// What the loop does after an instruction's effect.
enum Flow {
    /// Advance to the next line.
    Next,
    /// Continue after the marker line at this index.
    Jump(usize),
    /// Stop with a result.
    Return(Value),
}

impl<'a> VM<'a> {
    /// Execute the program until RETURN, the end of the program, or an error.
    pub fn evaluate(&mut self) -> Result<Outcome, VmError> {
        self.reset();
        debug!(
            lines = self.program.len(),
            gas_limit = self.gas_limit,
            "evaluation started"
        );

        let result = self.run_loop();
        match &result {
            Ok(outcome) => debug!(gas_used = self.gas_used(), ?outcome, "evaluation finished"),
            Err(e) => debug!(gas_used = self.gas_used(), error = %e, "evaluation failed"),
        }
        result
    }

    fn run_loop(&mut self) -> Result<Outcome, VmError> {
        let program = self.program;

        loop {
            let instr = match program.get(self.pc) {
                None => return Ok(Outcome::EndOfProgram),
                Some(Line::Label(_)) => {
                    self.pc += 1;
                    continue;
                }
                Some(Line::Instr(instr)) => instr,
            };

            let opcode = instr.opcode().ok_or_else(|| VmError::UnknownOpcode {
                at: self.pc,
                mnemonic: instr.mnemonic.clone(),
            })?;

            let cost = opcode.gas_cost();
            if cost > self.gas_remaining {
                return Err(VmError::OutOfGas {
                    at: self.pc,
                    opcode: opcode.mnemonic(),
                    required: cost,
                    remaining: self.gas_remaining,
                });
            }

            trace!(pc = self.pc, %opcode, gas = self.gas_remaining, "step");
            let flow = self.execute_one(opcode, instr)?;
            self.gas_remaining -= cost;

            match flow {
                Flow::Next => self.pc += 1,
                // The marker itself is a no-op, so resume on the line after it.
                Flow::Jump(target) => self.pc = target + 1,
                Flow::Return(value) => return Ok(Outcome::Returned(value)),
            }
        }
    }

    fn execute_one(&mut self, opcode: Opcode, instr: &Instruction) -> Result<Flow, VmError> {
        match opcode {
            // Arithmetic
            Opcode::Add => self.exec_arith(opcode, |y, x| Ok(y.wrapping_add(x))),
            Opcode::Sub => self.exec_arith(opcode, |y, x| Ok(y.wrapping_sub(x))),
            Opcode::Mul => self.exec_arith(opcode, |y, x| Ok(y.wrapping_mul(x))),
            Opcode::Div => self.exec_arith(opcode, |y, x| nonzero(x).map(|x| y.wrapping_div(x))),
            Opcode::Mod => self.exec_arith(opcode, |y, x| nonzero(x).map(|x| y.wrapping_rem(x))),

            // Logic
            Opcode::Lt => self.exec_ordering(opcode, Ordering::is_lt),
            Opcode::Gt => self.exec_ordering(opcode, Ordering::is_gt),
            Opcode::Eq => {
                let x = self.pop()?;
                let y = self.pop()?;
                self.push(Value::from(x == y));
                Ok(Flow::Next)
            }
            Opcode::IsZero => {
                let x = self.pop()?;
                self.push(Value::from(x.is_zero()));
                Ok(Flow::Next)
            }

            // Stack and memory
            Opcode::Push => {
                let token = self.arg(opcode, instr)?;
                let n = token.parse::<i64>().map_err(|_| self.invalid(opcode, token))?;
                self.push(Value::Int(n));
                Ok(Flow::Next)
            }
            Opcode::PushArg => {
                let token = self.arg(opcode, instr)?;
                self.push(Value::from_literal(token));
                Ok(Flow::Next)
            }
            Opcode::Pop => {
                self.pop()?;
                Ok(Flow::Next)
            }
            Opcode::Load => {
                let addr = self.address(opcode, instr)?;
                let value = self.memory(addr);
                self.push(value);
                Ok(Flow::Next)
            }
            Opcode::Store => {
                let addr = self.address(opcode, instr)?;
                let x = self.pop()?;
                self.memory.insert(addr, x);
                Ok(Flow::Next)
            }

            // Control flow
            Opcode::Jump => Ok(Flow::Jump(self.label(opcode, instr)?)),
            Opcode::Jz => {
                let target = self.label(opcode, instr)?;
                let x = self.pop()?;
                Ok(if x.is_zero() { Flow::Jump(target) } else { Flow::Next })
            }
            Opcode::Jnz => {
                let target = self.label(opcode, instr)?;
                let x = self.pop()?;
                Ok(if x.is_zero() { Flow::Next } else { Flow::Jump(target) })
            }
            Opcode::Return => Ok(Flow::Return(self.pop()?)),

            // Environment
            Opcode::Timestamp => {
                let serialized = match self.pop()? {
                    Value::Text(s) => s,
                    other => return Err(self.mismatch(opcode, &other)),
                };
                let timestamp = self
                    .host
                    .block_timestamp(&serialized)
                    .map_err(|e| VmError::InvalidBlock {
                        at: self.pc,
                        reason: e.to_string(),
                    })?;
                self.push(Value::Int(timestamp));
                Ok(Flow::Next)
            }

            // Diagnostics. Never fatal: PRINT emits values without an
            // integer reading unchanged.
            Opcode::Print => {
                let x = self.pop()?;
                match x.coerce_int() {
                    Some(n) => self.host.print(&Value::Int(n)),
                    None => self.host.print(&x),
                }
                Ok(Flow::Next)
            }
            Opcode::PrintArg => {
                let x = self.pop()?;
                self.host.print(&x);
                Ok(Flow::Next)
            }
        }
    }

    // ---- Operand helpers ----

    /// Pop x, pop y, push `op(y, x)`. Both operands must be integers.
    /// `op` returns `Err` only for a zero divisor.
    fn exec_arith(
        &mut self,
        opcode: Opcode,
        op: fn(i64, i64) -> Result<i64, ()>,
    ) -> Result<Flow, VmError> {
        let x = self.pop()?;
        let y = self.pop()?;
        let (y, x) = match (&y, &x) {
            (Value::Int(y), Value::Int(x)) => (*y, *x),
            (Value::Int(_), other) | (other, _) => return Err(self.mismatch(opcode, other)),
        };
        let result = op(y, x).map_err(|()| VmError::DivisionByZero { at: self.pc })?;
        self.push(Value::Int(result));
        Ok(Flow::Next)
    }

    /// Pop x, pop y, push 1 if `x.cmp(y)` satisfies `pred` else 0.
    /// Integers compare numerically, text lexicographically.
    fn exec_ordering(&mut self, opcode: Opcode, pred: fn(Ordering) -> bool) -> Result<Flow, VmError> {
        let x = self.pop()?;
        let y = self.pop()?;
        let ordering = match (&x, &y) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Int(_) | Value::Text(_), other) | (other, _) => {
                return Err(self.mismatch(opcode, other))
            }
        };
        self.push(Value::from(pred(ordering)));
        Ok(Flow::Next)
    }

    fn arg<'i>(&self, opcode: Opcode, instr: &'i Instruction) -> Result<&'i str, VmError> {
        instr.arg(0).ok_or(VmError::MissingArgument {
            at: self.pc,
            opcode: opcode.mnemonic(),
        })
    }

    fn address(&self, opcode: Opcode, instr: &Instruction) -> Result<u64, VmError> {
        let token = self.arg(opcode, instr)?;
        token.parse::<u64>().map_err(|_| self.invalid(opcode, token))
    }

    fn label(&self, opcode: Opcode, instr: &Instruction) -> Result<usize, VmError> {
        let name = self.arg(opcode, instr)?;
        self.program
            .label_index(name)
            .ok_or_else(|| VmError::UnknownLabel {
                at: self.pc,
                label: name.to_string(),
            })
    }

    fn invalid(&self, opcode: Opcode, token: &str) -> VmError {
        VmError::InvalidArgument {
            at: self.pc,
            opcode: opcode.mnemonic(),
            token: token.to_string(),
        }
    }

    fn mismatch(&self, opcode: Opcode, found: &Value) -> VmError {
        VmError::TypeMismatch {
            at: self.pc,
            opcode: opcode.mnemonic(),
            found: found.kind(),
        }
    }
}

/// A divisor, or `Err` if it is zero.
fn nonzero(x: i64) -> Result<i64, ()> {
    if x == 0 {
        Err(())
    } else {
        Ok(x)
    }
}
