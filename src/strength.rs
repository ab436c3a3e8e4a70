//! Strength classification - maps a candidate's character count to a tier.

use serde::{Deserialize, Serialize};

/// Strength tier shown by the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Position of the indicator bar that belongs to this tier.
    pub fn index(self) -> usize {
        match self {
            PasswordStrength::Weak => 0,
            PasswordStrength::Medium => 1,
            PasswordStrength::Strong => 2,
        }
    }

    /// Default indicator text for this tier.
    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Too weak",
            PasswordStrength::Medium => "Could be stronger",
            PasswordStrength::Strong => "Strong Password!",
        }
    }
}

/// Length thresholds separating the three tiers.
///
/// A candidate with `n` characters is:
/// - `Weak` if `n < medium_min`
/// - `Medium` if `medium_min <= n < strong_min`
/// - `Strong` if `n >= strong_min`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthThresholds {
    pub medium_min: usize,
    pub strong_min: usize,
}

impl StrengthThresholds {
    pub const DEFAULT_MEDIUM_MIN: usize = 10;
    pub const DEFAULT_STRONG_MIN: usize = 20;

    /// Classifies `candidate` by its number of characters (not bytes).
    pub fn classify(&self, candidate: &str) -> PasswordStrength {
        let n = candidate.chars().count();
        if n >= self.strong_min {
            PasswordStrength::Strong
        } else if n >= self.medium_min {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Weak
        }
    }

    /// Checks `1 <= medium_min < strong_min`.
    pub fn validate(&self) -> Result<(), String> {
        if self.medium_min == 0 {
            return Err("medium_min must be at least 1".to_string());
        }
        if self.medium_min >= self.strong_min {
            return Err(format!(
                "medium_min ({}) must be lower than strong_min ({})",
                self.medium_min, self.strong_min
            ));
        }
        Ok(())
    }
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            medium_min: Self::DEFAULT_MEDIUM_MIN,
            strong_min: Self::DEFAULT_STRONG_MIN,
        }
    }
}

/// Classifies `candidate` with the default thresholds (9 / 19 / 20).
pub fn classify_strength(candidate: &str) -> PasswordStrength {
    StrengthThresholds::default().classify(candidate)
}
