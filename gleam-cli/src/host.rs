//! Host used by `gleam run`.

use gleam_common::Value;
use gleam_ledger::Block;
use gleam_vm::{Host, HostError};

/// Reads block timestamps from serialized blocks and writes PRINT output
/// to stderr, one value per line.
#[derive(Debug, Default)]
pub struct CliHost;

impl Host for CliHost {
    fn block_timestamp(&self, serialized: &str) -> Result<i64, HostError> {
        Ok(Block::timestamp_of(serialized)?)
    }

    fn print(&mut self, value: &Value) {
        eprintln!("{value}");
    }
}
