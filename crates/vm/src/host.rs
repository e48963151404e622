//! The VM's view of the ledger it runs inside.
//!
//! The interpreter never parses blocks or writes diagnostics itself. The
//! two opcodes that reach outside the VM, `TIMESTAMP` and `PRINT`/`PRINTARG`,
//! go through a [`Host`].

use gleam_common::Value;
use thiserror::Error;
use tracing::info;

/// A host could not answer a request from the VM.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HostError(pub String);

/// Services the ledger provides to a running program.
pub trait Host {
    /// Decode a serialized block reference and return its timestamp.
    fn block_timestamp(&self, serialized: &str) -> Result<i64, HostError>;

    /// Emit a PRINT/PRINTARG value on the diagnostic stream.
    fn print(&mut self, value: &Value) {
        info!(target: "gleam::print", %value, "contract output");
    }
}

/// A host with no ledger behind it. `TIMESTAMP` always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl Host for NullHost {
    fn block_timestamp(&self, _serialized: &str) -> Result<i64, HostError> {
        Err(HostError("no ledger attached".to_string()))
    }
}
