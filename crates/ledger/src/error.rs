//! Errors raised by the ledger stand-in.

use crate::registry::ContractId;
use gleam_assembler::AsmError;
use gleam_vm::{HostError, VmError};
use thiserror::Error;

/// Errors from deploying or calling a contract.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The contract template could not be bound or loaded.
    #[error("contract bytecode: {0}")]
    Asm(#[from] AsmError),

    /// Evaluation failed.
    #[error("contract execution: {0}")]
    Vm(#[from] VmError),

    /// No contract with this id is registered on the block.
    #[error("unknown contract {0}")]
    UnknownContract(ContractId),

    /// The call ended without RETURN, or returned `undefined`.
    #[error("contract {0} produced no return value")]
    NoReturnValue(ContractId),

    /// A serialized block reference could not be decoded.
    #[error("invalid block: {0}")]
    InvalidBlock(String),

    /// A ledger structure could not be encoded.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<LedgerError> for HostError {
    fn from(e: LedgerError) -> Self {
        HostError(e.to_string())
    }
}
