//! Bytecode loader: text → [`Program`].

use crate::error::AsmError;
use crate::lexer::{classify, is_identifier, RawLine};
use gleam_common::{Instruction, Line, Program, ProgramError};

/// Parse bytecode text into a program.
///
/// Blank and comment-only lines are dropped, so program indices count only
/// labels and instructions. The label map is complete before this returns.
pub(crate) fn parse_program(text: &str) -> Result<Program, AsmError> {
    parse(text, false)
}

/// Parse an unbound template. Each `<name>` line stands for the single
/// `PUSHARG` the binder will put in its place.
pub(crate) fn parse_template(text: &str) -> Result<Program, AsmError> {
    parse(text, true)
}

fn parse(text: &str, placeholders: bool) -> Result<Program, AsmError> {
    let mut lines = Vec::new();
    // Source line number of each entry in `lines`, for error reporting.
    let mut origins = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_num = idx + 1;
        let line = match classify(raw) {
            RawLine::Blank => continue,
            RawLine::Label(name) => Line::Label(name.to_string()),
            RawLine::Placeholder(name) if placeholders => Line::Instr(Instruction::new(
                "PUSHARG",
                vec![format!("<{name}>")],
            )),
            RawLine::Placeholder(_) => {
                return Err(malformed(line_num, raw));
            }
            RawLine::Words(words) => {
                let (mnemonic, args) = match words.split_first() {
                    Some((first, rest)) if is_identifier(first) => (*first, rest),
                    _ => return Err(malformed(line_num, raw)),
                };
                Line::Instr(Instruction::new(
                    mnemonic,
                    args.iter().map(|a| a.to_string()).collect(),
                ))
            }
        };
        lines.push(line);
        origins.push(line_num);
    }

    Program::new(lines).map_err(|e| match e {
        ProgramError::DuplicateLabel { label, at, .. } => AsmError::DuplicateLabel {
            line: origins[at],
            label,
        },
    })
}

fn malformed(line: usize, raw: &str) -> AsmError {
    AsmError::MalformedLine {
        line,
        text: raw.trim().to_string(),
    }
}
