//! The fixed walkthrough of how a trade moves from execution to clearing.

use crate::core::error::{NovationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker telling a renderer which diagram to draw for a step.
///
/// Markers are opaque tokens: some steps carry a number, some a short
/// name. Renderers match on both variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiagramState {
    Numeric(i64),
    Named(String),
}

impl DiagramState {
    pub fn named(token: impl Into<String>) -> Self {
        DiagramState::Named(token.into())
    }
}

impl fmt::Display for DiagramState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramState::Numeric(n) => write!(f, "{}", n),
            DiagramState::Named(token) => write!(f, "{}", token),
        }
    }
}

/// One step of the novation narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovationStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub diagram_state: DiagramState,
}

impl fmt::Display for NovationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  {}", self.description)?;
        write!(f, "  [diagram: {}]", self.diagram_state)
    }
}

/// Number of steps in the narrative.
pub const NOVATION_STEP_COUNT: u32 = 4;

/// The four steps from SEF execution to ongoing CCP risk management.
///
/// Always returns the same sequence, numbered 1 through 4.
///
/// # Examples
///
/// ```
/// use ccp_novation::narrative::novation::generate_novation_steps;
///
/// let steps = generate_novation_steps();
/// let numbers: Vec<u32> = steps.iter().map(|s| s.step_number).collect();
/// assert_eq!(numbers, vec![1, 2, 3, 4]);
/// assert_eq!(steps, generate_novation_steps());
/// ```
pub fn generate_novation_steps() -> Vec<NovationStep> {
    vec![
        NovationStep {
            step_number: 1,
            title: "Step 1: Trade Executed on SEF".to_string(),
            description: "A new derivatives trade is executed on a Swap Execution Facility \
                (SEF) between two parties, Party A and Party B. This initiates the clearing \
                process and forms the original bilateral contract."
                .to_string(),
            diagram_state: DiagramState::Numeric(1),
        },
        NovationStep {
            step_number: 2,
            title: "Step 2: Submission to Central Counterparty (CCP)".to_string(),
            description: "The executed trade details are electronically submitted by both \
                Party A and Party B (or their clearing members) to the Central Counterparty \
                (CCP) for clearing eligibility assessment and acceptance."
                .to_string(),
            diagram_state: DiagramState::named("submission"),
        },
        NovationStep {
            step_number: 3,
            title: "Step 3: Novation and Contract Replacement".to_string(),
            description: "Upon acceptance by the CCP, the original bilateral trade between \
                Party A and Party B is extinguished. Through novation, two new contracts are \
                created: one between Party A and the CCP, and another between Party B and \
                the CCP. The CCP becomes the buyer to every seller and the seller to every \
                buyer."
                .to_string(),
            diagram_state: DiagramState::Numeric(3),
        },
        NovationStep {
            step_number: 4,
            title: "Step 4: Ongoing Risk Management by CCP".to_string(),
            description: "The CCP monitors and manages the risk of the cleared contracts: \
                daily mark-to-market, collection of initial and variation margin, and \
                default management procedures that protect the integrity of the market."
                .to_string(),
            diagram_state: DiagramState::named("risk_management"),
        },
    ]
}

/// A single step, as selected by the animator's step control.
pub fn novation_step(step_number: i64) -> Result<NovationStep> {
    if !(1..=NOVATION_STEP_COUNT as i64).contains(&step_number) {
        return Err(NovationError::invalid_argument(
            "step_number",
            step_number,
            format!("must be between 1 and {}", NOVATION_STEP_COUNT),
        ));
    }
    generate_novation_steps()
        .into_iter()
        .find(|step| step.step_number as i64 == step_number)
        .ok_or_else(|| {
            NovationError::invalid_argument("step_number", step_number, "no such step")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_sequential_steps() {
        let steps = generate_novation_steps();
        assert_eq!(steps.len(), NOVATION_STEP_COUNT as usize);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number as usize, i + 1);
            assert!(!step.title.trim().is_empty());
            assert!(!step.description.trim().is_empty());
            if let DiagramState::Named(token) = &step.diagram_state {
                assert!(!token.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_first_step_is_sef_execution() {
        let steps = generate_novation_steps();
        let title = steps[0].title.to_lowercase();
        let description = steps[0].description.to_lowercase();
        assert!(title.contains("step 1"));
        assert!(title.contains("trade executed"));
        assert!(title.contains("sef"));
        assert!(description.contains("sef"));
    }

    #[test]
    fn test_narrative_mentions_novation_and_ccp() {
        let text: String = generate_novation_steps()
            .iter()
            .map(|s| format!("{} {}", s.title, s.description).to_lowercase())
            .collect();
        assert!(text.contains("novation"));
        assert!(text.contains("ccp"));
    }

    #[test]
    fn test_mixed_diagram_markers() {
        let markers: Vec<DiagramState> = generate_novation_steps()
            .into_iter()
            .map(|s| s.diagram_state)
            .collect();
        assert_eq!(
            markers,
            vec![
                DiagramState::Numeric(1),
                DiagramState::named("submission"),
                DiagramState::Numeric(3),
                DiagramState::named("risk_management"),
            ]
        );
    }

    #[test]
    fn test_diagram_state_serializes_untagged() {
        let json = serde_json::to_string(&vec![
            DiagramState::Numeric(3),
            DiagramState::named("submission"),
        ])
        .unwrap();
        assert_eq!(json, r#"[3,"submission"]"#);

        let back: Vec<DiagramState> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0], DiagramState::Numeric(3));
    }

    #[test]
    fn test_single_step_lookup() {
        let step = novation_step(3).unwrap();
        assert!(step.title.contains("Novation"));
        assert!(novation_step(0).is_err());
        assert!(novation_step(5).is_err());
    }
}
