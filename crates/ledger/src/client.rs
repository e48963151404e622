//! A ledger client that deploys and calls contracts.

use crate::block::Block;
use crate::error::LedgerError;
use crate::host::LedgerHost;
use crate::registry::ContractId;
use crate::transaction::{Output, Transaction, TxPayload};
use gleam_common::Value;
use gleam_vm::{Outcome, DEFAULT_GAS_LIMIT};
use std::collections::BTreeMap;
use tracing::debug;

/// Fee charged when the caller does not choose one.
pub const DEFAULT_TX_FEE: u64 = 1;

/// Parameters of a contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    /// Placeholder bindings for the contract template.
    pub args: BTreeMap<String, String>,
    /// Amount paid to the address the contract returns.
    pub amount: u64,
    pub contract: ContractId,
    /// Gas budget for the evaluation.
    pub gas_limit: u64,
}

impl CallRequest {
    /// A call with the default gas limit.
    pub fn new(contract: ContractId, args: BTreeMap<String, String>, amount: u64) -> Self {
        Self {
            args,
            amount,
            contract,
            gas_limit: DEFAULT_GAS_LIMIT,
        }
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }
}

/// A participant on the ledger.
///
/// The client works against its own view of the latest block. Deploys
/// register templates on that block; calls read templates from it.
#[derive(Debug, Clone)]
pub struct Client {
    name: String,
    address: String,
    last_block: Block,
    posted: Vec<Transaction>,
}

impl Client {
    pub fn new(name: impl Into<String>, address: impl Into<String>, last_block: Block) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            last_block,
            posted: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// The client's view of the latest block.
    pub fn last_block(&self) -> &Block {
        &self.last_block
    }

    /// Adopt a newer block as the latest.
    pub fn receive_block(&mut self, block: Block) {
        debug!(client = %self.name, height = block.height, "new last block");
        self.last_block = block;
    }

    /// Transactions posted so far, oldest first.
    pub fn posted(&self) -> &[Transaction] {
        &self.posted
    }

    /// Register `template` on the last block and post a deploy transaction.
    ///
    /// A template that would not load once bound is rejected, and nothing
    /// is registered or posted.
    pub fn post_deploy(
        &mut self,
        outputs: Vec<Output>,
        template: &str,
        fee: u64,
    ) -> Result<ContractId, LedgerError> {
        gleam_assembler::check_template(template)?;

        self.post(Transaction {
            from: self.address.clone(),
            outputs,
            fee,
            payload: TxPayload::Deploy {
                bytecode: template.to_string(),
            },
        })?;
        let id = self.last_block.contracts.deploy(template);
        debug!(client = %self.name, contract = %id, "contract deployed");
        Ok(id)
    }

    /// Evaluate a contract and post a call transaction paying its result.
    ///
    /// The template is bound to `request.args`, loaded, and evaluated on a
    /// fresh VM. The returned value becomes the address of a new output
    /// worth `request.amount`. Any failure posts nothing.
    pub fn post_call(
        &mut self,
        mut outputs: Vec<Output>,
        request: CallRequest,
        fee: u64,
    ) -> Result<&Transaction, LedgerError> {
        let id = request.contract;
        let template = self
            .last_block
            .contracts
            .get(id)
            .ok_or(LedgerError::UnknownContract(id))?;
        let program = gleam_assembler::compile(template, &request.args)?;

        let mut host = LedgerHost::new();
        let outcome = gleam_vm::evaluate(&program, request.gas_limit, &mut host)?;
        let address = match outcome {
            Outcome::Returned(Value::Undefined) | Outcome::EndOfProgram => {
                return Err(LedgerError::NoReturnValue(id))
            }
            Outcome::Returned(value) => value.to_string(),
        };
        debug!(client = %self.name, contract = %id, %address, "contract called");

        outputs.push(Output {
            address,
            amount: request.amount,
        });
        self.post(Transaction {
            from: self.address.clone(),
            outputs,
            fee,
            payload: TxPayload::Call {
                args: request.args,
                contract: id,
            },
        })
    }

    fn post(&mut self, tx: Transaction) -> Result<&Transaction, LedgerError> {
        let id = tx.id()?;
        debug!(client = %self.name, %id, "transaction posted");
        self.posted.push(tx);
        Ok(&self.posted[self.posted.len() - 1])
    }
}
