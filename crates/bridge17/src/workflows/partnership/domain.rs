use serde::{Deserialize, Serialize};
use std::fmt;

use super::scoring::selection::{MatchKey, SelectionMerit};

/// Registry identifier for an NGO.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NgoId(pub String);

impl fmt::Display for NgoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// NGO under evaluation. Never mutated by the scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgoRecord {
    pub id: NgoId,
    pub name: String,
    pub state: String,
    /// Development-goal tag shared with CSR and supplier records (e.g. an SDG label or sector).
    pub category: String,
    pub trust_score: f64,
    pub certified: bool,
    pub trustee_contact: String,
    pub about: String,
}

/// Pool of CSR funds offered for a state and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrOpportunity {
    pub state: String,
    pub category: String,
    pub csr_amount: u64,
}

/// Supplier offering operational capability in a state and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub name: String,
    pub state: String,
    pub category: String,
    pub reliability: f64,
}

impl MatchKey for NgoRecord {
    fn state(&self) -> &str {
        &self.state
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl MatchKey for CsrOpportunity {
    fn state(&self) -> &str {
        &self.state
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl SelectionMerit for CsrOpportunity {
    fn merit(&self) -> f64 {
        self.csr_amount as f64
    }
}

impl MatchKey for SupplierRecord {
    fn state(&self) -> &str {
        &self.state
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl SelectionMerit for SupplierRecord {
    fn merit(&self) -> f64 {
        self.reliability
    }
}

/// Risk band derived from an NGO's trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    HighRisk,
    MediumRisk,
    LowRisk,
}

impl RiskLevel {
    pub const MEDIUM_THRESHOLD: f64 = 0.4;
    pub const LOW_THRESHOLD: f64 = 0.7;

    /// Bands are half-open on the low end: `[.., 0.4)`, `[0.4, 0.7)`, `[0.7, ..]`.
    pub fn classify(trust_score: f64) -> Self {
        if trust_score < Self::MEDIUM_THRESHOLD {
            Self::HighRisk
        } else if trust_score < Self::LOW_THRESHOLD {
            Self::MediumRisk
        } else {
            Self::LowRisk
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighRisk => "High Risk",
            Self::MediumRisk => "Medium Risk",
            Self::LowRisk => "Low Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
