use crate::core::error::{require_at_least, NovationError, Result};
use crate::core::link_math::{bilateral_links, ccp_links};
use crate::core::node::{NodeId, NodeRole};
use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a clearing network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    /// Every intermediary faces every other one bilaterally.
    Complete,
    /// Every intermediary faces only the CCP.
    Star,
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyKind::Complete => write!(f, "complete"),
            TopologyKind::Star => write!(f, "star"),
        }
    }
}

/// Logical nodes and undirected edges of a clearing network.
///
/// Carries no layout. Positions are left to whatever draws the network;
/// the only rendering hint is which node, if any, is the hub.
///
/// # Examples
///
/// ```
/// use ccp_novation::graph::topology::{build_complete_topology, build_star_topology};
///
/// let mesh = build_complete_topology(5).unwrap();
/// let star = build_star_topology(5).unwrap();
/// assert_eq!(mesh.edge_count(), 10);
/// assert_eq!(star.edge_count(), 5);
/// assert_eq!(star.node_count(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    kind: TopologyKind,
    graph: UnGraph<NodeRole, ()>,
    hub: Option<NodeIndex>,
}

impl Topology {
    /// Whether this is the bilateral mesh or the CCP star.
    pub fn kind(&self) -> TopologyKind {
        self.kind
    }

    /// The CCP node of a star; `None` for a complete topology.
    pub fn hub(&self) -> Option<NodeId> {
        self.hub.map(|ix| NodeId::new(ix.index()))
    }

    /// Number of nodes, the CCP included.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of direct counterparty links.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All node identifiers in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.graph
            .node_indices()
            .map(|ix| NodeId::new(ix.index()))
            .collect()
    }

    /// All edges as `(low, high)` pairs, sorted.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges: Vec<(NodeId, NodeId)> = self
            .graph
            .edge_references()
            .map(|e| {
                let (a, b) = (e.source().index(), e.target().index());
                (NodeId::new(a.min(b)), NodeId::new(a.max(b)))
            })
            .collect();
        edges.sort();
        edges
    }

    /// Role of `node`, or `None` if it is not in the topology.
    pub fn role(&self, node: NodeId) -> Option<NodeRole> {
        self.graph.node_weight(NodeIndex::new(node.index())).copied()
    }

    /// Number of counterparties `node` faces directly.
    pub fn degree(&self, node: NodeId) -> usize {
        if node.index() >= self.node_count() {
            return 0;
        }
        self.graph.neighbors(NodeIndex::new(node.index())).count()
    }

    /// Whether `a` and `b` face each other directly, in either order.
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        if a.index() >= self.node_count() || b.index() >= self.node_count() {
            return false;
        }
        self.graph
            .find_edge(NodeIndex::new(a.index()), NodeIndex::new(b.index()))
            .is_some()
    }

    /// Plain, serialisable view for a charting collaborator.
    pub fn data(&self) -> TopologyData {
        TopologyData {
            kind: self.kind,
            hub: self.hub(),
            nodes: self
                .graph
                .node_indices()
                .map(|ix| TopologyNode {
                    id: NodeId::new(ix.index()),
                    role: self.graph[ix],
                })
                .collect(),
            edges: self.edges(),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== {} topology: {} nodes, {} edges ===",
            self.kind,
            self.node_count(),
            self.edge_count()
        )?;
        if let Some(hub) = self.hub() {
            writeln!(f, "Hub (CCP): node {}", hub)?;
        }
        for (a, b) in self.edges() {
            writeln!(f, "  {} -- {}", a, b)?;
        }
        Ok(())
    }
}

/// A node as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyNode {
    pub id: NodeId,
    pub role: NodeRole,
}

/// Serialisable snapshot of a [`Topology`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyData {
    pub kind: TopologyKind,
    pub hub: Option<NodeId>,
    pub nodes: Vec<TopologyNode>,
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Largest node or edge count a builder will allocate.
///
/// Well inside petgraph's `u32` index space; a complete topology reaches it
/// at roughly 5,800 intermediaries.
pub const MAX_TOPOLOGY_ELEMENTS: u64 = 1 << 24;

fn check_capacity(n: i64, nodes: u64, edges: u64) -> Result<()> {
    if nodes > MAX_TOPOLOGY_ELEMENTS || edges > MAX_TOPOLOGY_ELEMENTS {
        return Err(NovationError::invalid_argument(
            "n",
            n,
            format!(
                "topology would need more than {} nodes or edges",
                MAX_TOPOLOGY_ELEMENTS
            ),
        ));
    }
    Ok(())
}

/// Every intermediary `0..n` linked to every other: the bilateral world.
///
/// Enumerates each unordered pair `{i, j}`, `i < j`, exactly once. No
/// self-loops.
pub fn build_complete_topology(n: i64) -> Result<Topology> {
    require_at_least("n", n, 0)?;
    let edge_total = bilateral_links(n)?;
    check_capacity(n, n as u64, edge_total)?;

    let size = n as usize;
    let mut graph: UnGraph<NodeRole, ()> = UnGraph::with_capacity(size, edge_total as usize);
    let nodes: Vec<NodeIndex> = (0..size)
        .map(|_| graph.add_node(NodeRole::Intermediary))
        .collect();
    for (i, &a) in nodes.iter().enumerate() {
        for &b in &nodes[i + 1..] {
            graph.add_edge(a, b, ());
        }
    }

    debug!(
        "built complete topology: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(Topology {
        kind: TopologyKind::Complete,
        graph,
        hub: None,
    })
}

/// Node 0 is the CCP; intermediaries `1..=n` each link only to it.
pub fn build_star_topology(n: i64) -> Result<Topology> {
    require_at_least("n", n, 0)?;
    let edge_total = ccp_links(n)?;
    check_capacity(n, edge_total + 1, edge_total)?;

    let spokes = n as usize;
    let mut graph: UnGraph<NodeRole, ()> = UnGraph::with_capacity(spokes + 1, spokes);
    let hub = graph.add_node(NodeRole::Ccp);
    for _ in 0..spokes {
        let spoke = graph.add_node(NodeRole::Intermediary);
        graph.add_edge(hub, spoke, ());
    }

    debug!(
        "built star topology: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(Topology {
        kind: TopologyKind::Star,
        graph,
        hub: Some(hub),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_complete_five() {
        let topo = build_complete_topology(5).unwrap();
        assert_eq!(topo.kind(), TopologyKind::Complete);
        assert_eq!(topo.node_count(), 5);
        assert_eq!(topo.edge_count(), 10);
        assert_eq!(topo.hub(), None);
        for node in topo.nodes() {
            assert_eq!(topo.degree(node), 4);
            assert_eq!(topo.role(node), Some(NodeRole::Intermediary));
        }
    }

    #[test]
    fn test_complete_edges_are_unique_pairs() {
        let topo = build_complete_topology(6).unwrap();
        let edges = topo.edges();
        let unique: HashSet<_> = edges.iter().collect();
        assert_eq!(unique.len(), edges.len());
        assert!(edges.iter().all(|(a, b)| a < b));
        assert_eq!(edges.first(), Some(&(NodeId::new(0), NodeId::new(1))));
        assert_eq!(edges.last(), Some(&(NodeId::new(4), NodeId::new(5))));
    }

    #[test]
    fn test_complete_degenerate_sizes() {
        let empty = build_complete_topology(0).unwrap();
        assert_eq!(empty.node_count(), 0);
        assert_eq!(empty.edge_count(), 0);

        let single = build_complete_topology(1).unwrap();
        assert_eq!(single.node_count(), 1);
        assert_eq!(single.edge_count(), 0);
    }

    #[test]
    fn test_star_five() {
        let topo = build_star_topology(5).unwrap();
        assert_eq!(topo.kind(), TopologyKind::Star);
        assert_eq!(topo.node_count(), 6);
        assert_eq!(topo.edge_count(), 5);

        let hub = topo.hub().unwrap();
        assert_eq!(hub, NodeId::new(0));
        assert_eq!(topo.role(hub), Some(NodeRole::Ccp));
        assert_eq!(topo.degree(hub), 5);

        for k in 1..=5 {
            let spoke = NodeId::new(k);
            assert_eq!(topo.role(spoke), Some(NodeRole::Intermediary));
            assert_eq!(topo.degree(spoke), 1);
            assert!(topo.contains_edge(hub, spoke));
            assert!(topo.contains_edge(spoke, hub));
        }
        assert!(!topo.contains_edge(NodeId::new(1), NodeId::new(2)));
    }

    #[test]
    fn test_star_zero_is_lone_hub() {
        let topo = build_star_topology(0).unwrap();
        assert_eq!(topo.node_count(), 1);
        assert_eq!(topo.edge_count(), 0);
        assert_eq!(topo.hub(), Some(NodeId::new(0)));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(build_complete_topology(-1).is_err());
        assert!(build_star_topology(-1).is_err());
    }

    #[test]
    fn test_oversized_complete_rejected() {
        // 92,681 intermediaries still fit petgraph's indices but not memory.
        for n in [6_000, 92_681, 200_000] {
            let err = build_complete_topology(n).unwrap_err();
            assert_eq!(err.argument_name(), "n");
        }
    }

    #[test]
    fn test_oversized_star_rejected() {
        assert!(build_star_topology(MAX_TOPOLOGY_ELEMENTS as i64).is_err());
        assert!(build_star_topology(i64::MAX).is_err());
    }

    #[test]
    fn test_out_of_range_queries() {
        let topo = build_star_topology(2).unwrap();
        assert_eq!(topo.role(NodeId::new(9)), None);
        assert_eq!(topo.degree(NodeId::new(9)), 0);
        assert!(!topo.contains_edge(NodeId::new(0), NodeId::new(9)));
    }

    #[test]
    fn test_data_snapshot() {
        let data = build_star_topology(3).unwrap().data();
        assert_eq!(data.kind, TopologyKind::Star);
        assert_eq!(data.hub, Some(NodeId::new(0)));
        assert_eq!(data.nodes.len(), 4);
        assert_eq!(data.nodes[0].role, NodeRole::Ccp);
        assert_eq!(data.edges.len(), 3);

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["kind"], "star");
        assert_eq!(json["nodes"][0]["role"], "ccp");
        assert_eq!(json["edges"][0], serde_json::json!([0, 1]));
    }
}
