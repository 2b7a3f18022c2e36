use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{CsrOpportunity, NgoRecord, SupplierRecord};
use super::scoring::{EvaluationResult, MatchKey, PartnershipEngine};

/// State and category chosen by the caller to narrow the NGO list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub state: String,
    pub category: String,
}

impl FilterSelection {
    pub fn new(state: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            category: category.into(),
        }
    }

    pub fn matches<T: MatchKey>(&self, record: &T) -> bool {
        record.matches(&self.state, &self.category)
    }
}

impl PartnershipEngine {
    /// Evaluates every NGO and orders the results by final score, highest first.
    ///
    /// The sort is stable, so NGOs with equal scores keep their input order.
    pub fn rank<'a, I>(
        &self,
        ngos: I,
        csr_pool: &[CsrOpportunity],
        supplier_pool: &[SupplierRecord],
    ) -> Vec<EvaluationResult>
    where
        I: IntoIterator<Item = &'a NgoRecord>,
    {
        let mut results: Vec<EvaluationResult> = ngos
            .into_iter()
            .map(|ngo| self.evaluate(ngo, csr_pool, supplier_pool))
            .collect();

        results.sort_by(|left, right| right.final_score.total_cmp(&left.final_score));
        results
    }

    /// Ranks only the NGOs inside `filter`.
    pub fn rank_for(
        &self,
        filter: &FilterSelection,
        ngos: &[NgoRecord],
        csr_pool: &[CsrOpportunity],
        supplier_pool: &[SupplierRecord],
    ) -> Vec<EvaluationResult> {
        let results = self.rank(
            ngos.iter().filter(|ngo| filter.matches(*ngo)),
            csr_pool,
            supplier_pool,
        );

        info!(
            state = %filter.state,
            category = %filter.category,
            ranked = results.len(),
            "ranked partnership candidates"
        );

        results
    }
}
