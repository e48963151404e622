//! GLEAM ledger: a minimal in-memory chain for deploying and calling
//! contracts.
//!
//! This crate supplies what the VM needs from the outside world: a
//! per-block [`ContractRegistry`], a serializable [`Block`] whose
//! timestamp contracts can read, and a [`Client`] that binds, evaluates
//! and pays out contract calls.
//!
//! # Usage
//!
//! ```
//! use std::collections::BTreeMap;
//! use gleam_ledger::{Block, CallRequest, Client, DEFAULT_TX_FEE};
//!
//! let mut alice = Client::new("Alice", "alice", Block::genesis(0));
//! let id = alice
//!     .post_deploy(vec![], "<to>\nRETURN\n", DEFAULT_TX_FEE)
//!     .unwrap();
//!
//! let mut args = BTreeMap::new();
//! args.insert("to".to_string(), "bob".to_string());
//! let tx = alice
//!     .post_call(vec![], CallRequest::new(id, args, 100), DEFAULT_TX_FEE)
//!     .unwrap();
//! assert_eq!(tx.outputs[0].address, "bob");
//! ```

pub mod block;
pub mod client;
pub mod error;
pub mod host;
pub mod registry;
pub mod transaction;

pub use block::Block;
pub use client::{CallRequest, Client, DEFAULT_TX_FEE};
pub use error::LedgerError;
pub use host::LedgerHost;
pub use registry::{ContractId, ContractRegistry};
pub use transaction::{Output, Transaction, TxPayload};
