//! Score-to-tier classification.
//!
//! Pure function of the score, no identity, no state. Thresholds: 60 and 40.

use serde::{Deserialize, Serialize};

/// Discrete risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low Risk"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High Risk"),
        }
    }
}

/// Tier with advisory display token and guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub level: RiskLevel,
    /// Advisory display token for the presentation layer.
    pub color: &'static str,
    pub recommendation: &'static str,
    pub alert: &'static str,
}

/// Map a composite score to its risk tier.
pub fn classify(score: u32) -> Classification {
    if score >= 60 {
        Classification {
            level: RiskLevel::High,
            color: "red",
            recommendation: "Refer for clinical evaluation",
            alert: "HIGH RISK: Clinical correlation recommended.",
        }
    } else if score >= 40 {
        Classification {
            level: RiskLevel::Moderate,
            color: "amber",
            recommendation: "Monitor symptoms",
            alert: "MODERATE RISK: Monitor symptoms.",
        }
    } else {
        Classification {
            level: RiskLevel::Low,
            color: "green",
            recommendation: "No action needed",
            alert: "LOW RISK: Signal within normal range.",
        }
    }
}
