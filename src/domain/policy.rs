//! Arithmetic policy for the occurrence counter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::{NodeError, NodeResult};

/// How the occurrence counter behaves at the edges of `u32`.
///
/// `Wrap` keeps plain unsigned wraparound: decrementing zero yields
/// `u32::MAX`. `Saturate` clamps at both ends. `Checked` refuses the step
/// and leaves the count untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    #[default]
    Wrap,
    Saturate,
    Checked,
}

impl CountPolicy {
    /// Count after one increment under this policy.
    pub fn increment(self, count: u32) -> NodeResult<u32> {
        match self {
            CountPolicy::Wrap => Ok(count.wrapping_add(1)),
            CountPolicy::Saturate => Ok(count.saturating_add(1)),
            CountPolicy::Checked => count.checked_add(1).ok_or(NodeError::CountOverflow),
        }
    }

    /// Count after one decrement under this policy.
    pub fn decrement(self, count: u32) -> NodeResult<u32> {
        match self {
            CountPolicy::Wrap => Ok(count.wrapping_sub(1)),
            CountPolicy::Saturate => Ok(count.saturating_sub(1)),
            CountPolicy::Checked => count.checked_sub(1).ok_or(NodeError::CountUnderflow),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CountPolicy::Wrap => "wrap",
            CountPolicy::Saturate => "saturate",
            CountPolicy::Checked => "checked",
        }
    }
}

impl fmt::Display for CountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountPolicy {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(CountPolicy::Wrap),
            "saturate" => Ok(CountPolicy::Saturate),
            "checked" => Ok(CountPolicy::Checked),
            _ => Err(NodeError::UnknownCountPolicy(s.to_string())),
        }
    }
}
