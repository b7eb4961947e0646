//! Score-to-tier rules used by the predictive-insights widgets.

use serde::{Deserialize, Serialize};

/// Tier for churn and burnout scores in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Normal,
    High,
    Critical,
}

impl RiskLevel {
    pub const CRITICAL_AT: f64 = 0.8;
    pub const HIGH_AT: f64 = 0.6;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::CRITICAL_AT {
            RiskLevel::Critical
        } else if score >= Self::HIGH_AT {
            RiskLevel::High
        } else {
            RiskLevel::Normal
        }
    }

    /// Number of `scores` that fall in this tier.
    pub fn count<I>(self, scores: I) -> usize
    where
        I: IntoIterator<Item = f64>,
    {
        scores
            .into_iter()
            .filter(|&score| Self::from_score(score) == self)
            .count()
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Normal => "NORMAL",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// Tier for per-cell no-show and lateness probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapRisk {
    Low,
    Medium,
    High,
}

impl HeatmapRisk {
    pub const HIGH_AT: f64 = 0.2;
    pub const MEDIUM_AT: f64 = 0.1;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_AT {
            HeatmapRisk::High
        } else if score >= Self::MEDIUM_AT {
            HeatmapRisk::Medium
        } else {
            HeatmapRisk::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeatmapRisk::Low => "LOW",
            HeatmapRisk::Medium => "MED",
            HeatmapRisk::High => "HIGH",
        }
    }
}

/// Priority attached to an AI recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Priority::Critical => Severity::Destructive,
            Priority::High => Severity::Warning,
            Priority::Medium => Severity::Neutral,
        }
    }
}

/// Badge severity the UI colors by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Neutral,
    Warning,
    Destructive,
}

/// Direction a key metric moved. `Down` is bad news even when the number
/// itself rose (e.g. no-show rate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

/// Render a `[0, 1]` score as a whole percentage, e.g. `0.89` → `89%`.
pub fn percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}
