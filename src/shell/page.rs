use crate::core::error::{NovationError, Result};
use crate::graph::comparison::{NetworkComparison, NetworkComparisonData};
use crate::narrative::novation::{novation_step, NovationStep, NOVATION_STEP_COUNT};
use crate::series::risk_exposure::{generate_hypothetical_risk_exposure, RiskObservation};
use crate::shell::inputs::ShellInputs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The pages offered in the shell's navigation, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Overview,
    NovationAnimator,
    RiskNetwork,
    RiskTrends,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Overview,
        Page::NovationAnimator,
        Page::RiskNetwork,
        Page::RiskTrends,
    ];

    /// Navigation label.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::NovationAnimator => "Novation Process Animator",
            Page::RiskNetwork => "Risk Network Visualizer",
            Page::RiskTrends => "Hypothetical Risk Trends",
        }
    }

    /// Short identifier used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::NovationAnimator => "novation",
            Page::RiskNetwork => "network",
            Page::RiskTrends => "trends",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for Page {
    type Err = NovationError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| {
                page.slug().eq_ignore_ascii_case(wanted)
                    || page.title().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                NovationError::invalid_argument(
                    "page",
                    wanted,
                    "expected one of overview, novation, network, trends",
                )
            })
    }
}

/// A concept shown on the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub term: String,
    pub definition: String,
}

/// Static content of the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewContent {
    pub bilateral_formula: String,
    pub ccp_formula: String,
    pub concepts: Vec<Concept>,
    /// Sources listed under the navigation.
    pub references: Vec<String>,
}

impl OverviewContent {
    pub fn new() -> Self {
        let concept = |term: &str, definition: &str| Concept {
            term: term.to_string(),
            definition: definition.to_string(),
        };
        Self {
            bilateral_formula: "Bilateral Links = N(N-1)/2".to_string(),
            ccp_formula: "CCP Links = N".to_string(),
            concepts: vec![
                concept(
                    "Central Clearing",
                    "A post-trade mechanism where a Central Counterparty (CCP) steps in \
                     between the original counterparties, becoming the buyer to every \
                     seller and the seller to every buyer.",
                ),
                concept(
                    "Swap Execution Facility (SEF)",
                    "A trading platform where derivatives, particularly swaps, are executed.",
                ),
                concept(
                    "Novation",
                    "The legal process by which the original bilateral contract is \
                     discharged and replaced by two new contracts, each against the CCP.",
                ),
                concept(
                    "Counterparty Credit Risk Reduction",
                    "Instead of each participant facing every other participant \
                     bilaterally, they only face the CCP.",
                ),
            ],
            references: vec![
                "[1] Section 'Central Clearing' & Exhibit 6: Central Clearing for Interest \
                 Rate Swaps, Derivatives.pdf."
                    .to_string(),
                "[2] Training - Data Innovations, https://www.datainnovations.com/training."
                    .to_string(),
            ],
        }
    }
}

impl Default for OverviewContent {
    fn default() -> Self {
        Self::new()
    }
}

/// What a page displays, as plain data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageContent {
    Overview(OverviewContent),
    NovationAnimator {
        step: NovationStep,
        total_steps: u32,
    },
    RiskNetwork(NetworkComparisonData),
    RiskTrends {
        observations: Vec<RiskObservation>,
    },
}

impl PageContent {
    pub fn page(&self) -> Page {
        match self {
            PageContent::Overview(_) => Page::Overview,
            PageContent::NovationAnimator { .. } => Page::NovationAnimator,
            PageContent::RiskNetwork(_) => Page::RiskNetwork,
            PageContent::RiskTrends { .. } => Page::RiskTrends,
        }
    }
}

/// Build the data for `page` from the current widget values.
///
/// Inputs are clamped to their widget ranges first, as the shell would.
pub fn render_page(page: Page, inputs: &ShellInputs) -> Result<PageContent> {
    let inputs = inputs.clamped();
    debug!("rendering page {:?} with {:?}", page, inputs);
    match page {
        Page::Overview => Ok(PageContent::Overview(OverviewContent::new())),
        Page::NovationAnimator => Ok(PageContent::NovationAnimator {
            step: novation_step(inputs.novation_step)?,
            total_steps: NOVATION_STEP_COUNT,
        }),
        Page::RiskNetwork => Ok(PageContent::RiskNetwork(
            NetworkComparison::new(inputs.intermediaries)?.data(),
        )),
        Page::RiskTrends => Ok(PageContent::RiskTrends {
            observations: generate_hypothetical_risk_exposure(inputs.periods)?,
        }),
    }
}

impl fmt::Display for PageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.page())?;
        match self {
            PageContent::Overview(overview) => {
                for concept in &overview.concepts {
                    writeln!(f, "* {}: {}", concept.term, concept.definition)?;
                }
                writeln!(f, "\n{}", overview.bilateral_formula)?;
                writeln!(f, "{}", overview.ccp_formula)?;
                writeln!(f, "\nReferences")?;
                for reference in &overview.references {
                    writeln!(f, "{}", reference)?;
                }
                Ok(())
            }
            PageContent::NovationAnimator { step, total_steps } => {
                writeln!(f, "({} of {})", step.step_number, total_steps)?;
                writeln!(f, "{}", step)
            }
            PageContent::RiskNetwork(data) => {
                writeln!(f, "Intermediaries:   {}", data.links.intermediaries)?;
                writeln!(
                    f,
                    "Without a CCP, there are N(N-1)/2 = {} bilateral links.",
                    data.links.bilateral
                )?;
                writeln!(f, "With a CCP, there are only N = {} links.", data.links.ccp)?;
                writeln!(
                    f,
                    "Links saved:      {} ({:.1}%)",
                    data.links_saved, data.reduction_percent
                )
            }
            PageContent::RiskTrends { observations } => {
                writeln!(f, "Idx  Date        Score")?;
                for obs in observations {
                    writeln!(f, "{}", obs)?;
                }
                Ok(())
            }
        }
    }
}
