//! GLEAM common types.
//!
//! This crate provides the data structures shared by the loader, the
//! interpreter and the verifier:
//!
//! - [`Opcode`]: the closed opcode table with gas costs
//! - [`Instruction`] and [`Line`]: one parsed line of bytecode
//! - [`Program`]: lines plus the resolved label map
//! - [`Value`]: runtime values on the stack and in memory
//! - [`ProgramError`]: errors from building a program

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod value;

// Re-export commonly used types at the crate root.
pub use error::ProgramError;
pub use instruction::{Instruction, Line};
pub use opcode::Opcode;
pub use program::Program;
pub use value::Value;
