//! Step tags in the global assembly order.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ModuleError;

/// Tag reserved for the final step, which belongs to the whole model.
pub const FINAL_STEP_TAG: &str = "M";

/// Position of a module in the full assembly sequence.
///
/// # Example
///
/// ```
/// use mesh_modules::Step;
///
/// assert_eq!(Step::Index(4).to_string(), "4");
/// assert_eq!(Step::Final.to_string(), "M");
/// assert_eq!("M".parse::<Step>().unwrap(), Step::Final);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StepRepr", into = "StepRepr"))]
pub enum Step {
    /// An intermediate step.
    Index(usize),
    /// The final step of the model.
    Final,
}

impl Step {
    /// Check whether this is the final step.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Final)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Final => f.write_str(FINAL_STEP_TAG),
        }
    }
}

impl FromStr for Step {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == FINAL_STEP_TAG {
            return Ok(Self::Final);
        }
        trimmed
            .parse()
            .map(Self::Index)
            .map_err(|_| ModuleError::ParseStep {
                input: s.to_string(),
            })
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StepRepr {
    Index(usize),
    Tag(String),
}

#[cfg(feature = "serde")]
impl TryFrom<StepRepr> for Step {
    type Error = ModuleError;

    fn try_from(repr: StepRepr) -> Result<Self, Self::Error> {
        match repr {
            StepRepr::Index(i) => Ok(Self::Index(i)),
            StepRepr::Tag(tag) => tag.parse(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Step> for StepRepr {
    fn from(step: Step) -> Self {
        match step {
            Step::Index(i) => Self::Index(i),
            Step::Final => Self::Tag(FINAL_STEP_TAG.to_string()),
        }
    }
}
