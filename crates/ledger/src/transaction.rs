//! Transactions posted by a client.

use crate::error::LedgerError;
use crate::registry::ContractId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A payment to an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub address: String,
    pub amount: u64,
}

/// What a transaction does beyond moving funds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxPayload {
    /// Register a bytecode template.
    Deploy { bytecode: String },
    /// Invoke a registered contract with bound arguments.
    Call {
        args: BTreeMap<String, String>,
        contract: ContractId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Address of the posting client.
    pub from: String,
    pub outputs: Vec<Output>,
    pub fee: u64,
    pub payload: TxPayload,
}

impl Transaction {
    /// Hex-encoded blake3 hash of the transaction's JSON encoding.
    pub fn id(&self) -> Result<String, LedgerError> {
        let data = serde_json::to_vec(self)?;
        Ok(blake3::hash(&data).to_hex().to_string())
    }
}
