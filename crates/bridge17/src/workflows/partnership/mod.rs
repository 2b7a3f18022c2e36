//! NGO partnership scoring: trust, CSR funding and supplier assessments combined into a ranked,
//! auditable recommendation list.

pub mod domain;
pub mod ranking;
pub mod report;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{CsrOpportunity, NgoId, NgoRecord, RiskLevel, SupplierRecord};
pub use ranking::FilterSelection;
pub use report::{filter_options, EcosystemOverview, FilterOptions, NgoDetailView, RankingView};
pub use scoring::{
    CsrAssessment, DecisionWeights, EvaluationResult, NormalizationBasis, PartnershipEngine,
    ScoringConfig, SelectionPolicy, SupplierAssessment, TrustAssessment,
};
