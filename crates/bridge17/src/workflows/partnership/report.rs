use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::domain::{NgoId, NgoRecord};
use super::scoring::decision::round_to;
use super::scoring::EvaluationResult;

/// Distinct states and categories available for filtering, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub states: Vec<String>,
    pub categories: Vec<String>,
}

pub fn filter_options(ngos: &[NgoRecord]) -> FilterOptions {
    let states: BTreeSet<&str> = ngos.iter().map(|ngo| ngo.state.as_str()).collect();
    let categories: BTreeSet<&str> = ngos.iter().map(|ngo| ngo.category.as_str()).collect();

    FilterOptions {
        states: states.into_iter().map(str::to_string).collect(),
        categories: categories.into_iter().map(str::to_string).collect(),
    }
}

/// Headline numbers for the NGO registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcosystemOverview {
    pub total_ngos: usize,
    /// Mean trust score rounded to two decimals; `None` when the registry is empty.
    pub average_trust: Option<f64>,
    pub ngos_by_state: BTreeMap<String, usize>,
    pub ngos_by_category: BTreeMap<String, usize>,
}

impl EcosystemOverview {
    pub fn from_records(ngos: &[NgoRecord]) -> Self {
        let mut ngos_by_state = BTreeMap::new();
        let mut ngos_by_category = BTreeMap::new();
        for ngo in ngos {
            *ngos_by_state.entry(ngo.state.clone()).or_insert(0) += 1;
            *ngos_by_category.entry(ngo.category.clone()).or_insert(0) += 1;
        }

        let average_trust = if ngos.is_empty() {
            None
        } else {
            let total: f64 = ngos.iter().map(|ngo| ngo.trust_score).sum();
            Some(round_to(total / ngos.len() as f64, 2))
        };

        Self {
            total_ngos: ngos.len(),
            average_trust,
            ngos_by_state,
            ngos_by_category,
        }
    }
}

/// Profile shown when a single NGO is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NgoDetailView {
    pub id: NgoId,
    pub name: String,
    pub state: String,
    pub category: String,
    pub certified: &'static str,
    pub trustee_contact: String,
    pub about: String,
}

impl NgoDetailView {
    pub fn from_record(ngo: &NgoRecord) -> Self {
        Self {
            id: ngo.id.clone(),
            name: ngo.name.clone(),
            state: ngo.state.clone(),
            category: ngo.category.clone(),
            certified: if ngo.certified { "Yes" } else { "No" },
            trustee_contact: ngo.trustee_contact.clone(),
            about: ngo.about.clone(),
        }
    }
}

/// One row of the ranked recommendations table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingView {
    pub rank: usize,
    pub ngo_id: NgoId,
    pub ngo: String,
    pub final_score: f64,
    pub risk_level: &'static str,
    pub csr_available: u64,
    pub supplier: String,
    pub category: String,
}

impl RankingView {
    pub fn from_results(results: &[EvaluationResult]) -> Vec<Self> {
        results
            .iter()
            .enumerate()
            .map(|(index, result)| Self {
                rank: index + 1,
                ngo_id: result.ngo_id.clone(),
                ngo: result.ngo_name.clone(),
                final_score: result.final_score,
                risk_level: result.risk_level().label(),
                csr_available: result.csr.csr_amount,
                supplier: result.supplier.supplier_name.clone(),
                category: result.category.clone(),
            })
            .collect()
    }
}
