//! The append-only contract registry carried by each block.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a contract in the registry. Ids are sequential from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(pub u64);

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deployed bytecode templates, indexed by [`ContractId`].
///
/// There is no removal: a contract stays registered on every later block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractRegistry {
    templates: Vec<String>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a template and return its id.
    pub fn deploy(&mut self, template: impl Into<String>) -> ContractId {
        let id = ContractId(self.templates.len() as u64);
        self.templates.push(template.into());
        id
    }

    /// The template stored under `id`, byte-identical to what was deployed.
    pub fn get(&self, id: ContractId) -> Option<&str> {
        let index = usize::try_from(id.0).ok()?;
        self.templates.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// All contracts in deployment order.
    pub fn iter(&self) -> impl Iterator<Item = (ContractId, &str)> {
        self.templates
            .iter()
            .enumerate()
            .map(|(i, t)| (ContractId(i as u64), t.as_str()))
    }
}
