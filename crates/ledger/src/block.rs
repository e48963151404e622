//! Blocks: the unit of ledger history the VM can ask about.
//!
//! A contract never sees a `Block` directly. It receives one as a
//! serialized text argument and asks the host for its timestamp.

use crate::error::LedgerError;
use crate::registry::ContractRegistry;
use serde::{Deserialize, Serialize};

/// A block in the chain, with the contracts registered as of this block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Distance from genesis.
    pub height: u64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Hash of the previous block; `None` for genesis.
    pub prev_hash: Option<String>,
    /// Address credited for producing the block.
    pub reward_addr: Option<String>,
    /// Deployed contracts, copied forward from the previous block.
    pub contracts: ContractRegistry,
}

impl Block {
    /// The first block of a chain. It has no parent and no contracts.
    pub fn genesis(timestamp: i64) -> Self {
        Self {
            height: 0,
            timestamp,
            prev_hash: None,
            reward_addr: None,
            contracts: ContractRegistry::new(),
        }
    }

    /// A child of `prev`. The contract registry carries over unchanged.
    pub fn extend(
        prev: &Block,
        reward_addr: impl Into<String>,
        timestamp: i64,
    ) -> Result<Self, LedgerError> {
        Ok(Self {
            height: prev.height + 1,
            timestamp,
            prev_hash: Some(prev.hash()?),
            reward_addr: Some(reward_addr.into()),
            contracts: prev.contracts.clone(),
        })
    }

    /// Hex-encoded blake3 hash of the block's JSON encoding.
    pub fn hash(&self) -> Result<String, LedgerError> {
        let data = serde_json::to_vec(self)?;
        Ok(blake3::hash(&data).to_hex().to_string())
    }

    /// Encode the block as a single whitespace-free token.
    ///
    /// The result can be bound to a template placeholder and handed to
    /// `TIMESTAMP`.
    pub fn serialize(&self) -> Result<String, LedgerError> {
        Ok(hex::encode(serde_json::to_vec(self)?))
    }

    /// Decode a block produced by [`Block::serialize`].
    pub fn deserialize(serialized: &str) -> Result<Self, LedgerError> {
        let bytes = hex::decode(serialized.trim())
            .map_err(|e| LedgerError::InvalidBlock(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| LedgerError::InvalidBlock(e.to_string()))
    }

    /// Timestamp of a serialized block. This is what `TIMESTAMP` reads.
    pub fn timestamp_of(serialized: &str) -> Result<i64, LedgerError> {
        Ok(Self::deserialize(serialized)?.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_block() {
        let block = Block::genesis(1_000);
        assert_eq!(block.height, 0);
        assert_eq!(block.prev_hash, None);
        assert!(block.contracts.is_empty());
    }

    #[test]
    fn extend_links_and_copies_contracts() {
        let mut genesis = Block::genesis(1_000);
        let id = genesis.contracts.deploy("PUSH 1\nRETURN");
        let next = Block::extend(&genesis, "minnie", 2_000).unwrap();
        assert_eq!(next.height, 1);
        assert_eq!(next.prev_hash, Some(genesis.hash().unwrap()));
        assert_eq!(next.contracts.get(id), Some("PUSH 1\nRETURN"));
    }

    #[test]
    fn hash_changes_with_content() {
        let hash = |t| Block::genesis(t).hash().unwrap();
        assert_ne!(hash(1), hash(2));
        assert_eq!(hash(1), hash(1));
        assert_eq!(hash(1).len(), 64);
    }

    #[test]
    fn timestamp_of_serialized_block() {
        let text = Block::genesis(77).serialize().unwrap();
        assert_eq!(Block::timestamp_of(&text).unwrap(), 77);
        assert!(matches!(
            Block::timestamp_of("7b"),
            Err(LedgerError::InvalidBlock(_))
        ));
    }

    #[test]
    fn serialized_form_is_one_token() {
        let mut block = Block::genesis(42);
        block.contracts.deploy("<a>\nSTORE 0\nLOAD 0\nRETURN\n");
        let text = block.serialize().unwrap();
        assert!(!text.is_empty());
        assert!(!text.contains(char::is_whitespace));
        assert!(!text.contains('#'));
        assert_eq!(Block::deserialize(&text).unwrap(), block);
    }

    #[test]
    fn deserialize_rejects_garbage() {
        assert!(matches!(
            Block::deserialize("not-hex"),
            Err(LedgerError::InvalidBlock(_))
        ));
        // Valid hex, not a block.
        assert!(matches!(
            Block::deserialize(&hex::encode("{}")),
            Err(LedgerError::InvalidBlock(_))
        ));
    }
}
