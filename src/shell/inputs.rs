use serde::{Deserialize, Serialize};

/// Bounds and initial value of a numeric input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRange {
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

impl InputRange {
    pub const fn new(min: i64, max: i64, default: i64) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Number of financial intermediaries on the risk network page.
pub const INTERMEDIARIES: InputRange = InputRange::new(2, 20, 5);

/// Months shown on the risk trend page.
pub const PERIODS: InputRange = InputRange::new(12, 60, 24);

/// Step selected on the novation animator.
pub const NOVATION_STEP: InputRange = InputRange::new(1, 4, 1);

/// Everything the shell's widgets currently hold.
///
/// Passed explicitly into each page so the core never reads ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellInputs {
    pub intermediaries: i64,
    pub periods: i64,
    pub novation_step: i64,
}

impl ShellInputs {
    /// Pull every value into its widget's range.
    pub fn clamped(&self) -> Self {
        Self {
            intermediaries: INTERMEDIARIES.clamp(self.intermediaries),
            periods: PERIODS.clamp(self.periods),
            novation_step: NOVATION_STEP.clamp(self.novation_step),
        }
    }
}

impl Default for ShellInputs {
    fn default() -> Self {
        Self {
            intermediaries: INTERMEDIARIES.default,
            periods: PERIODS.default,
            novation_step: NOVATION_STEP.default,
        }
    }
}
