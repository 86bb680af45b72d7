use crate::core::error::Result;
use crate::core::link_math::LinkCount;
use crate::graph::topology::{
    build_complete_topology, build_star_topology, Topology, TopologyData,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The "before CCP" and "after CCP" networks for the same intermediaries.
///
/// The link counts and both topologies are derived from the same `N`, so
/// the mesh always has `bilateral` edges and the star `ccp` edges.
///
/// # Examples
///
/// ```
/// use ccp_novation::graph::comparison::NetworkComparison;
///
/// let cmp = NetworkComparison::new(5).unwrap();
/// assert_eq!(cmp.links().bilateral, 10);
/// assert_eq!(cmp.bilateral().edge_count(), 10);
/// assert_eq!(cmp.cleared().edge_count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkComparison {
    links: LinkCount,
    bilateral: Topology,
    cleared: Topology,
}

impl NetworkComparison {
    pub fn new(n: i64) -> Result<Self> {
        let links = LinkCount::for_intermediaries(n)?;
        let bilateral = build_complete_topology(n)?;
        let cleared = build_star_topology(n)?;
        debug_assert_eq!(bilateral.edge_count() as u64, links.bilateral);
        debug_assert_eq!(cleared.edge_count() as u64, links.ccp);
        Ok(Self {
            links,
            bilateral,
            cleared,
        })
    }

    pub fn links(&self) -> &LinkCount {
        &self.links
    }

    /// Every intermediary facing every other one.
    pub fn bilateral(&self) -> &Topology {
        &self.bilateral
    }

    /// Every intermediary facing only the CCP.
    pub fn cleared(&self) -> &Topology {
        &self.cleared
    }

    pub fn data(&self) -> NetworkComparisonData {
        NetworkComparisonData {
            links: self.links,
            links_saved: self.links.links_saved(),
            reduction_percent: self.links.reduction_percent(),
            bilateral: self.bilateral.data(),
            cleared: self.cleared.data(),
        }
    }
}

impl fmt::Display for NetworkComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Risk Network Comparison ===")?;
        writeln!(f, "Intermediaries:   {}", self.links.intermediaries)?;
        writeln!(f, "Bilateral links:  {}", self.links.bilateral)?;
        writeln!(f, "CCP links:        {}", self.links.ccp)?;
        writeln!(f, "Links saved:      {}", self.links.links_saved())?;
        writeln!(f, "Reduction:        {:.1}%", self.links.reduction_percent())?;
        writeln!(f, "\n{}", self.links)
    }
}

/// Serialisable form of a [`NetworkComparison`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkComparisonData {
    pub links: LinkCount,
    pub links_saved: u64,
    pub reduction_percent: f64,
    pub bilateral: TopologyData,
    pub cleared: TopologyData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::topology::TopologyKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_comparison_five() {
        let cmp = NetworkComparison::new(5).unwrap();
        assert_eq!(cmp.links().bilateral, 10);
        assert_eq!(cmp.links().ccp, 5);
        assert_eq!(cmp.bilateral().kind(), TopologyKind::Complete);
        assert_eq!(cmp.bilateral().node_count(), 5);
        assert_eq!(cmp.cleared().kind(), TopologyKind::Star);
        assert_eq!(cmp.cleared().node_count(), 6);
    }

    #[test]
    fn test_comparison_data() {
        let data = NetworkComparison::new(10).unwrap().data();
        assert_eq!(data.links.bilateral, 45);
        assert_eq!(data.links_saved, 35);
        assert_abs_diff_eq!(data.reduction_percent, 77.777, epsilon = 0.001);
        assert_eq!(data.bilateral.edges.len(), 45);
        assert_eq!(data.cleared.edges.len(), 10);
    }

    #[test]
    fn test_comparison_rejects_negative() {
        assert!(NetworkComparison::new(-2).is_err());
    }

    #[test]
    fn test_comparison_display() {
        let text = NetworkComparison::new(4).unwrap().to_string();
        assert!(text.contains("Bilateral links:  6"));
        assert!(text.contains("CCP links:        4"));
        assert!(text.contains("Reduction:        33.3%"));
    }
}
