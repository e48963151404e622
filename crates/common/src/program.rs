//! Program representation for GLEAM bytecode.
//!
//! A program is an ordered sequence of [`Line`]s plus a map from label name
//! to the index of its marker line. The map is built once, in
//! [`Program::new`], and never changes afterwards.

use crate::error::ProgramError;
use crate::instruction::{Instruction, Line};
use std::collections::BTreeMap;

/// A loaded GLEAM program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    lines: Vec<Line>,
    labels: BTreeMap<String, usize>,
}

impl Program {
    /// Create a program from its lines, resolving every label marker.
    pub fn new(lines: Vec<Line>) -> Result<Self, ProgramError> {
        let mut labels = BTreeMap::new();
        for (at, line) in lines.iter().enumerate() {
            if let Line::Label(name) = line {
                if let Some(&first) = labels.get(name) {
                    return Err(ProgramError::DuplicateLabel {
                        label: name.clone(),
                        first,
                        at,
                    });
                }
                labels.insert(name.clone(), at);
            }
        }
        Ok(Self { lines, labels })
    }

    /// All lines, in order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The line at index `pc`.
    pub fn get(&self, pc: usize) -> Option<&Line> {
        self.lines.get(pc)
    }

    /// Index of the marker line for `label`.
    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.labels.get(label).copied()
    }

    /// Label names and their marker indices, sorted by name.
    pub fn labels(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels.iter().map(|(name, &at)| (name.as_str(), at))
    }

    /// Instructions with their indices, skipping label markers.
    pub fn instructions(&self) -> impl Iterator<Item = (usize, &Instruction)> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(at, line)| line.instruction().map(|instr| (at, instr)))
    }

    /// Number of lines, labels included.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the program has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
