use crate::core::error::{require_at_least, NovationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of direct bilateral relationships among `n` intermediaries.
///
/// Every pair of intermediaries faces each other once: `n(n-1)/2`.
///
/// # Examples
///
/// ```
/// use ccp_novation::core::link_math::bilateral_links;
///
/// assert_eq!(bilateral_links(5).unwrap(), 10);
/// assert_eq!(bilateral_links(1).unwrap(), 0);
/// assert!(bilateral_links(-1).is_err());
/// ```
pub fn bilateral_links(n: i64) -> Result<u64> {
    require_at_least("n", n, 0)?;
    let n = n as u128;
    // n * (n - 1) is always even, so the division is exact.
    let links = n * n.saturating_sub(1) / 2;
    u64::try_from(links).map_err(|_| {
        NovationError::invalid_argument("n", n, "bilateral link count exceeds u64")
    })
}

/// Number of direct relationships once a CCP is interposed: one per intermediary.
pub fn ccp_links(n: i64) -> Result<u64> {
    require_at_least("n", n, 0)?;
    Ok(n as u64)
}

/// Bilateral versus CCP link counts for the same set of intermediaries.
///
/// Never stored independently of `N`; always recomputed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCount {
    pub intermediaries: u64,
    pub bilateral: u64,
    pub ccp: u64,
}

impl LinkCount {
    /// Compute both counts for `n` intermediaries.
    ///
    /// Fails with `InvalidArgument` when `n` is negative.
    pub fn for_intermediaries(n: i64) -> Result<Self> {
        Ok(Self {
            bilateral: bilateral_links(n)?,
            ccp: ccp_links(n)?,
            intermediaries: n as u64,
        })
    }

    /// Relationships removed by clearing through the CCP.
    ///
    /// Zero for `N < 3`, where the star has at least as many links as the mesh.
    pub fn links_saved(&self) -> u64 {
        self.bilateral.saturating_sub(self.ccp)
    }

    /// Links saved as a percentage of the bilateral count.
    pub fn reduction_percent(&self) -> f64 {
        if self.bilateral == 0 {
            return 0.0;
        }
        self.links_saved() as f64 * 100.0 / self.bilateral as f64
    }
}

impl fmt::Display for LinkCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Without a CCP, there are N(N-1)/2 = {} bilateral links.",
            self.bilateral
        )?;
        write!(f, "With a CCP, there are only N = {} links.", self.ccp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bilateral_small_values() {
        assert_eq!(bilateral_links(0).unwrap(), 0);
        assert_eq!(bilateral_links(1).unwrap(), 0);
        assert_eq!(bilateral_links(2).unwrap(), 1);
        assert_eq!(bilateral_links(5).unwrap(), 10);
        assert_eq!(bilateral_links(20).unwrap(), 190);
    }

    #[test]
    fn test_ccp_links_identity() {
        assert_eq!(ccp_links(0).unwrap(), 0);
        assert_eq!(ccp_links(2).unwrap(), 2);
        assert_eq!(ccp_links(5).unwrap(), 5);
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            bilateral_links(-3),
            Err(NovationError::InvalidArgument { name: "n", .. })
        ));
        assert!(matches!(
            ccp_links(-1),
            Err(NovationError::InvalidArgument { name: "n", .. })
        ));
    }

    #[test]
    fn test_bilateral_overflow_rejected() {
        assert!(bilateral_links(i64::MAX).is_err());
        // 2^31 * (2^32 - 1) still fits in a u64.
        assert_eq!(bilateral_links(1 << 32).unwrap(), (1u64 << 31) * ((1u64 << 32) - 1));
    }

    #[test]
    fn test_link_count_five() {
        let count = LinkCount::for_intermediaries(5).unwrap();
        assert_eq!(count.bilateral, 10);
        assert_eq!(count.ccp, 5);
        assert_eq!(count.links_saved(), 5);
        assert_relative_eq!(count.reduction_percent(), 50.0);
    }

    #[test]
    fn test_link_count_two_saves_nothing() {
        let count = LinkCount::for_intermediaries(2).unwrap();
        assert_eq!(count.bilateral, 1);
        assert_eq!(count.ccp, 2);
        assert_eq!(count.links_saved(), 0);
        assert_relative_eq!(count.reduction_percent(), 0.0);
    }

    #[test]
    fn test_link_count_display() {
        let text = LinkCount::for_intermediaries(5).unwrap().to_string();
        assert!(text.contains("N(N-1)/2 = 10"));
        assert!(text.contains("N = 5"));
    }
}
