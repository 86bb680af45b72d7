use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node in a clearing network topology.
///
/// Nodes are numbered from zero. In a star topology node 0 is the CCP
/// and nodes `1..=n` are the intermediaries; in a complete topology every
/// node `0..n` is an intermediary.
///
/// # Examples
///
/// ```
/// use ccp_novation::core::node::NodeId;
///
/// let hub = NodeId::new(0);
/// let bank = NodeId::new(3);
/// assert!(hub < bank);
/// assert_eq!(bank.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Create a node identifier from its position in the topology.
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the position of this node in the topology.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

/// What a node stands for in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// The central counterparty at the hub of a star.
    Ccp,
    /// A financial intermediary (dealer, clearing member).
    Intermediary,
}

impl NodeRole {
    /// True for the CCP.
    pub fn is_hub(&self) -> bool {
        matches!(self, NodeRole::Ccp)
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Ccp => write!(f, "CCP"),
            NodeRole::Intermediary => write!(f, "Intermediary"),
        }
    }
}
