//! Renderer: [`Program`] → canonical bytecode text.
//!
//! Output is flat text, one line per program entry: `name:` for labels,
//! `MNEMONIC arg ...` for instructions. No indentation, no comments, no
//! blank lines. This is the format written to staged `.gleam` files.

use gleam_common::Program;

/// Render a program as canonical bytecode text.
///
/// Loading the output yields an identical program
/// (`load(render(program)) == program`).
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    for line in program.lines() {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}
