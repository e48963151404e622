//! Reachability analysis for GLEAM programs.
//!
//! Execution starts at index 0. Every instruction must be reachable from
//! there by fall-through or by a jump edge. Unreachable label markers are
//! not reported; unreachable instructions are errors.

use crate::error::VerifyError;
use gleam_common::{Line, Opcode, Program};

/// Run the reachability check.
pub fn check_reachability(program: &Program) -> Vec<VerifyError> {
    let reachable = reachable_lines(program);

    program
        .instructions()
        .filter(|(at, _)| !reachable[*at])
        .map(|(at, _)| VerifyError::UnreachableInstruction { at })
        .collect()
}

/// Mark every line reachable from index 0.
fn reachable_lines(program: &Program) -> Vec<bool> {
    let len = program.len();
    let mut reachable = vec![false; len];
    let mut worklist = Vec::new();
    if len > 0 {
        worklist.push(0);
    }

    while let Some(pc) = worklist.pop() {
        if reachable[pc] {
            // Already visited (loop prevention)
            continue;
        }
        reachable[pc] = true;

        for next in successors(program, pc) {
            if next < len && !reachable[next] {
                worklist.push(next);
            }
        }
    }

    reachable
}

/// Indices control may move to after executing line `pc`.
fn successors(program: &Program, pc: usize) -> Vec<usize> {
    let instr = match program.get(pc) {
        Some(Line::Instr(instr)) => instr,
        Some(Line::Label(_)) => return vec![pc + 1],
        None => return Vec::new(),
    };
    let target = instr.arg(0).and_then(|label| program.label_index(label));

    match instr.opcode() {
        // Unknown opcodes fail at run time; nothing follows them.
        None | Some(Opcode::Return) => Vec::new(),
        Some(Opcode::Jump) => target.into_iter().collect(),
        Some(Opcode::Jz | Opcode::Jnz) => std::iter::once(pc + 1).chain(target).collect(),
        Some(_) => vec![pc + 1],
    }
}
