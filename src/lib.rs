//! # ccp-novation
//!
//! Data core for explaining central counterparty (CCP) clearing and the
//! novation of derivatives trades.
//!
//! Everything here is a pure function of its arguments. A presentation
//! shell reads user input, calls into this crate, and hands the returned
//! plain data to whatever charting layer it uses.
//!
//! ## Architecture
//!
//! - **core** — Link counting, node identifiers and the error type
//! - **narrative** — The fixed four-step novation walkthrough
//! - **series** — Synthetic, linearly decaying risk exposure over time
//! - **graph** — Complete (bilateral) and star (CCP) network topologies
//! - **shell** — Page identifiers, widget ranges and per-page data

pub mod core;
pub mod graph;
pub mod narrative;
pub mod series;
pub mod shell;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::error::{NovationError, Result};
    pub use crate::core::link_math::{bilateral_links, ccp_links, LinkCount};
    pub use crate::core::node::{NodeId, NodeRole};
    pub use crate::graph::comparison::NetworkComparison;
    pub use crate::graph::topology::{
        build_complete_topology, build_star_topology, Topology, TopologyKind,
    };
    pub use crate::narrative::novation::{
        generate_novation_steps, novation_step, DiagramState, NovationStep,
    };
    pub use crate::series::risk_exposure::{
        generate_hypothetical_risk_exposure, generate_risk_exposure_with, RiskExposureConfig,
        RiskObservation,
    };
    pub use crate::shell::inputs::{InputRange, ShellInputs};
    pub use crate::shell::page::{render_page, Page, PageContent};
}
