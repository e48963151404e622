//! Instructions and program lines.
//!
//! An instruction keeps its mnemonic and argument tokens as text. Tokens
//! are coerced to integers, addresses or label names by the opcode that
//! consumes them, so a program can be loaded before anyone decides which
//! mnemonics are valid.

use crate::opcode::Opcode;
use std::fmt;

/// A single GLEAM instruction: a mnemonic plus its argument tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// The operation name as written in the source.
    pub mnemonic: String,
    /// Whitespace-separated argument tokens, in order.
    pub args: Vec<String>,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(mnemonic: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            args,
        }
    }

    /// Resolve the mnemonic against the opcode table.
    pub fn opcode(&self) -> Option<Opcode> {
        Opcode::from_mnemonic(&self.mnemonic)
    }

    /// Argument token at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mnemonic)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// One entry of a loaded program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    /// A jump target marker. Executing it does nothing.
    Label(String),
    /// An executable instruction.
    Instr(Instruction),
}

impl Line {
    /// The instruction on this line, if it is not a label.
    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            Line::Instr(instr) => Some(instr),
            Line::Label(_) => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Label(name) => write!(f, "{name}:"),
            Line::Instr(instr) => write!(f, "{instr}"),
        }
    }
}
