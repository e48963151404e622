//! The VM host backed by ledger data.

use crate::block::Block;
use gleam_common::Value;
use gleam_vm::{Host, HostError};
use tracing::info;

/// Answers `TIMESTAMP` by decoding serialized blocks and records
/// `PRINT`/`PRINTARG` output.
#[derive(Debug, Default)]
pub struct LedgerHost {
    printed: Vec<Value>,
}

impl LedgerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values printed so far, in order.
    pub fn printed(&self) -> &[Value] {
        &self.printed
    }
}

impl Host for LedgerHost {
    fn block_timestamp(&self, serialized: &str) -> Result<i64, HostError> {
        Ok(Block::timestamp_of(serialized)?)
    }

    fn print(&mut self, value: &Value) {
        info!(target: "gleam::print", %value, "contract output");
        self.printed.push(value.clone());
    }
}
