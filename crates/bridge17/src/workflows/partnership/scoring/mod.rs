pub mod config;
pub(crate) mod decision;
mod rules;
pub mod selection;

pub use config::{DecisionWeights, NormalizationBasis, ScoringConfig, DEFAULT_CSR_BASIS};
pub use rules::{
    CSR_WEIGHT, NO_CSR_REASONING, NO_SUPPLIER_NAME, NO_SUPPLIER_REASONING, SUPPLIER_WEIGHT,
    TRUST_WEIGHT,
};
pub use selection::{matching, MatchKey, SelectionMerit, SelectionPolicy};

use super::domain::{CsrOpportunity, NgoId, NgoRecord, RiskLevel, SupplierRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer applying one [`ScoringConfig`] to every NGO it sees.
#[derive(Debug, Clone, Default)]
pub struct PartnershipEngine {
    config: ScoringConfig,
}

impl PartnershipEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn assess_trust(&self, ngo: &NgoRecord) -> TrustAssessment {
        rules::assess_trust(ngo)
    }

    pub fn assess_csr(&self, ngo: &NgoRecord, pool: &[CsrOpportunity]) -> CsrAssessment {
        rules::assess_csr(ngo, pool, &self.config)
    }

    pub fn assess_supplier(&self, ngo: &NgoRecord, pool: &[SupplierRecord]) -> SupplierAssessment {
        rules::assess_supplier(ngo, pool, &self.config)
    }

    pub fn decide(&self, ngo_score: f64, csr_score: f64, supplier_score: f64) -> f64 {
        decision::decide(ngo_score, csr_score, supplier_score, &self.config.weights)
    }

    /// Runs the three scorers for one NGO and aggregates them into a final score.
    pub fn evaluate(
        &self,
        ngo: &NgoRecord,
        csr_pool: &[CsrOpportunity],
        supplier_pool: &[SupplierRecord],
    ) -> EvaluationResult {
        let trust = self.assess_trust(ngo);
        let csr = self.assess_csr(ngo, csr_pool);
        let supplier = self.assess_supplier(ngo, supplier_pool);
        let final_score = self.decide(trust.score, csr.score, supplier.score);

        debug!(
            ngo = %ngo.id,
            trust = trust.score,
            csr = csr.score,
            supplier = supplier.score,
            final_score,
            "evaluated ngo"
        );

        EvaluationResult {
            ngo_id: ngo.id.clone(),
            ngo_name: ngo.name.clone(),
            state: ngo.state.clone(),
            category: ngo.category.clone(),
            trust,
            csr,
            supplier,
            final_score,
        }
    }
}

/// Trust scorer output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustAssessment {
    pub score: f64,
    pub risk_level: RiskLevel,
    pub reasoning: String,
}

/// CSR scorer output; `csr_amount` is zero when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrAssessment {
    pub score: f64,
    pub csr_amount: u64,
    pub reasoning: String,
}

impl CsrAssessment {
    pub fn unmatched() -> Self {
        Self {
            score: 0.0,
            csr_amount: 0,
            reasoning: NO_CSR_REASONING.to_string(),
        }
    }

    pub fn is_matched(&self) -> bool {
        *self != Self::unmatched()
    }
}

/// Supplier scorer output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierAssessment {
    pub score: f64,
    pub supplier_name: String,
    pub reasoning: String,
}

impl SupplierAssessment {
    pub fn unmatched() -> Self {
        Self {
            score: 0.0,
            supplier_name: NO_SUPPLIER_NAME.to_string(),
            reasoning: NO_SUPPLIER_REASONING.to_string(),
        }
    }

    pub fn is_matched(&self) -> bool {
        *self != Self::unmatched()
    }
}

/// Per-NGO result of a ranking pass, with every component kept for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub ngo_id: NgoId,
    pub ngo_name: String,
    pub state: String,
    pub category: String,
    pub trust: TrustAssessment,
    pub csr: CsrAssessment,
    pub supplier: SupplierAssessment,
    pub final_score: f64,
}

impl EvaluationResult {
    pub fn risk_level(&self) -> RiskLevel {
        self.trust.risk_level
    }

    /// Reasoning lines in component order: trust, CSR, supplier.
    pub fn reasoning(&self) -> [&str; 3] {
        [
            self.trust.reasoning.as_str(),
            self.csr.reasoning.as_str(),
            self.supplier.reasoning.as_str(),
        ]
    }
}
