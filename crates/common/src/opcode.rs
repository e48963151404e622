//! Opcode table for the GLEAM instruction set.
//!
//! The table is closed: every mnemonic the interpreter understands is a
//! variant of [`Opcode`], and its gas cost and arity are fixed by a `match`
//! rather than looked up in a mutable map.

/// Identifies the operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Arithmetic
    /// Pop x, pop y, push x + y.
    Add,
    /// Pop x, pop y, push y - x.
    Sub,
    /// Pop x, pop y, push x * y.
    Mul,
    /// Pop x, pop y, push y / x.
    Div,
    /// Pop x, pop y, push y mod x.
    Mod,

    // Logic
    /// Pop x, pop y, push 1 if x < y else 0.
    Lt,
    /// Pop x, pop y, push 1 if x > y else 0.
    Gt,
    /// Pop x, pop y, push 1 if x = y else 0.
    Eq,
    /// Pop x, push 1 if x = 0 else 0.
    IsZero,

    // Stack and memory
    /// Push an integer literal.
    Push,
    /// Push a bound argument value.
    PushArg,
    /// Discard the top of the stack.
    Pop,
    /// Push memory[n].
    Load,
    /// Pop x, memory[n] = x.
    Store,

    // Control flow
    /// Unconditional jump to a label.
    Jump,
    /// Pop x, jump to a label if x = 0.
    Jz,
    /// Pop x, jump to a label if x != 0.
    Jnz,
    /// Pop x and end evaluation with x as the result.
    Return,

    // Environment
    /// Pop a serialized block, push its timestamp.
    Timestamp,

    // Diagnostics
    /// Pop x and emit it as an integer.
    Print,
    /// Pop x and emit it unchanged.
    PrintArg,
}

/// All opcodes, in table order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 21] = [
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Mod,
    Opcode::Lt,
    Opcode::Gt,
    Opcode::Eq,
    Opcode::IsZero,
    Opcode::Push,
    Opcode::PushArg,
    Opcode::Pop,
    Opcode::Load,
    Opcode::Store,
    Opcode::Jump,
    Opcode::Jz,
    Opcode::Jnz,
    Opcode::Return,
    Opcode::Timestamp,
    Opcode::Print,
    Opcode::PrintArg,
];

impl Opcode {
    /// Resolve a mnemonic. Mnemonics are case-sensitive.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        let op = match mnemonic {
            "ADD" => Opcode::Add,
            "SUB" => Opcode::Sub,
            "MUL" => Opcode::Mul,
            "DIV" => Opcode::Div,
            "MOD" => Opcode::Mod,
            "LT" => Opcode::Lt,
            "GT" => Opcode::Gt,
            "EQ" => Opcode::Eq,
            "ISZERO" => Opcode::IsZero,
            "PUSH" => Opcode::Push,
            "PUSHARG" => Opcode::PushArg,
            "POP" => Opcode::Pop,
            "LOAD" => Opcode::Load,
            "STORE" => Opcode::Store,
            "JUMP" => Opcode::Jump,
            "JZ" => Opcode::Jz,
            "JNZ" => Opcode::Jnz,
            "RETURN" => Opcode::Return,
            "TIMESTAMP" => Opcode::Timestamp,
            "PRINT" => Opcode::Print,
            "PRINTARG" => Opcode::PrintArg,
            _ => return None,
        };
        Some(op)
    }

    /// The text mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Lt => "LT",
            Opcode::Gt => "GT",
            Opcode::Eq => "EQ",
            Opcode::IsZero => "ISZERO",
            Opcode::Push => "PUSH",
            Opcode::PushArg => "PUSHARG",
            Opcode::Pop => "POP",
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Jump => "JUMP",
            Opcode::Jz => "JZ",
            Opcode::Jnz => "JNZ",
            Opcode::Return => "RETURN",
            Opcode::Timestamp => "TIMESTAMP",
            Opcode::Print => "PRINT",
            Opcode::PrintArg => "PRINTARG",
        }
    }

    /// Gas charged each time this opcode executes.
    pub fn gas_cost(&self) -> u64 {
        match self {
            Opcode::Add | Opcode::Sub => 3,
            Opcode::Mul | Opcode::Div | Opcode::Mod => 5,
            Opcode::Lt | Opcode::Gt | Opcode::Eq | Opcode::IsZero => 3,
            Opcode::Push | Opcode::PushArg => 3,
            Opcode::Pop => 2,
            Opcode::Load | Opcode::Store => 3,
            Opcode::Jump => 8,
            Opcode::Jz | Opcode::Jnz => 10,
            Opcode::Timestamp => 5,
            Opcode::Return | Opcode::Print | Opcode::PrintArg => 0,
        }
    }

    /// Number of argument tokens the opcode reads.
    pub fn arity(&self) -> usize {
        match self {
            Opcode::Push
            | Opcode::PushArg
            | Opcode::Load
            | Opcode::Store
            | Opcode::Jump
            | Opcode::Jz
            | Opcode::Jnz => 1,
            _ => 0,
        }
    }

    /// Returns true for opcodes whose argument names a label.
    pub fn is_jump(&self) -> bool {
        matches!(self, Opcode::Jump | Opcode::Jz | Opcode::Jnz)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonic_roundtrip_all_opcodes() {
        for &op in &ALL_OPCODES {
            assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
        }
    }

    #[test]
    fn unknown_mnemonic() {
        assert_eq!(Opcode::from_mnemonic("HALT"), None);
        assert_eq!(Opcode::from_mnemonic(""), None);
    }

    #[test]
    fn mnemonics_are_case_sensitive() {
        assert_eq!(Opcode::from_mnemonic("add"), None);
        assert_eq!(Opcode::from_mnemonic("Push"), None);
    }

    #[test]
    fn gas_table() {
        let expected = [
            ("ADD", 3),
            ("SUB", 3),
            ("MUL", 5),
            ("DIV", 5),
            ("MOD", 5),
            ("LT", 3),
            ("GT", 3),
            ("EQ", 3),
            ("ISZERO", 3),
            ("PUSH", 3),
            ("PUSHARG", 3),
            ("POP", 2),
            ("LOAD", 3),
            ("STORE", 3),
            ("JUMP", 8),
            ("JZ", 10),
            ("JNZ", 10),
            ("RETURN", 0),
            ("TIMESTAMP", 5),
            ("PRINT", 0),
            ("PRINTARG", 0),
        ];
        assert_eq!(expected.len(), ALL_OPCODES.len());
        for (mnemonic, cost) in expected {
            let op = Opcode::from_mnemonic(mnemonic).unwrap();
            assert_eq!(op.gas_cost(), cost, "gas cost of {mnemonic}");
        }
    }

    #[test]
    fn arity_of_argument_opcodes() {
        assert_eq!(Opcode::Push.arity(), 1);
        assert_eq!(Opcode::Jnz.arity(), 1);
        assert_eq!(Opcode::Add.arity(), 0);
        assert_eq!(Opcode::Return.arity(), 0);
    }

    #[test]
    fn only_jumps_are_jumps() {
        let jumps: Vec<_> = ALL_OPCODES.iter().filter(|op| op.is_jump()).collect();
        assert_eq!(jumps, [&Opcode::Jump, &Opcode::Jz, &Opcode::Jnz]);
    }
}
