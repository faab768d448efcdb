//! Subscription tiers.
//!
//! Tiers form a strict ladder (Free < Standard < Professional < Enterprise).
//! Access checks are a single rank comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription tier gating domain and resource visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    #[serde(alias = "free", alias = "FREE")]
    Free,
    #[serde(alias = "standard", alias = "STANDARD")]
    Standard,
    #[serde(alias = "professional", alias = "PROFESSIONAL")]
    Professional,
    #[serde(alias = "enterprise", alias = "ENTERPRISE")]
    Enterprise,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Free,
        Tier::Standard,
        Tier::Professional,
        Tier::Enterprise,
    ];

    /// Ordinal rank used for access comparisons.
    pub fn rank(self) -> u8 {
        match self {
            Tier::Free => 0,
            Tier::Standard => 1,
            Tier::Professional => 2,
            Tier::Enterprise => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Standard => "Standard",
            Tier::Professional => "Professional",
            Tier::Enterprise => "Enterprise",
        }
    }

    /// Next tier up the ladder; `None` at Enterprise.
    pub fn next(self) -> Option<Tier> {
        match self {
            Tier::Free => Some(Tier::Standard),
            Tier::Standard => Some(Tier::Professional),
            Tier::Professional => Some(Tier::Enterprise),
            Tier::Enterprise => None,
        }
    }

    /// Distance between two tiers on the ladder.
    pub fn distance(self, other: Tier) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Standard
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Tier::Free),
            "standard" => Ok(Tier::Standard),
            "professional" => Ok(Tier::Professional),
            "enterprise" => Ok(Tier::Enterprise),
            other => Err(format!(
                "Invalid tier: {} (must be 'free', 'standard', 'professional' or 'enterprise')",
                other
            )),
        }
    }
}

/// Grant access iff `rank(tier) >= rank(required)`.
pub fn validate_tier_access(tier: Tier, required: Tier) -> bool {
    tier.rank() >= required.rank()
}

/// Human-readable upgrade hint, or `None` when `current` already suffices.
pub fn upgrade_path(current: Tier, required: Tier) -> Option<String> {
    if validate_tier_access(current, required) {
        return None;
    }
    Some(format!("Upgrade from {} to {} tier", current, required))
}
