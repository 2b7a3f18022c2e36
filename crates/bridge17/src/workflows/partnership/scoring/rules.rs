use super::super::domain::{CsrOpportunity, NgoRecord, RiskLevel, SupplierRecord};
use super::config::ScoringConfig;
use super::selection::matching;
use super::{CsrAssessment, SupplierAssessment, TrustAssessment};

pub const TRUST_WEIGHT: f64 = 0.6;
pub const CSR_WEIGHT: f64 = 0.7;
pub const SUPPLIER_WEIGHT: f64 = 0.5;

pub const NO_CSR_REASONING: &str = "No CSR opportunity found";
pub const NO_SUPPLIER_NAME: &str = "No Supplier Found";
pub const NO_SUPPLIER_REASONING: &str = "No operational supplier available";

pub(crate) fn assess_trust(ngo: &NgoRecord) -> TrustAssessment {
    let trust = ngo.trust_score;
    let risk_level = RiskLevel::classify(trust);

    TrustAssessment {
        score: trust * TRUST_WEIGHT,
        risk_level,
        reasoning: format!("Trust Score: {} → {}", trust, risk_level.label()),
    }
}

pub(crate) fn assess_csr(
    ngo: &NgoRecord,
    pool: &[CsrOpportunity],
    config: &ScoringConfig,
) -> CsrAssessment {
    let candidates = matching(&ngo.state, &ngo.category, pool);
    let Some(selected) = config.selection.select(&candidates) else {
        return CsrAssessment::unmatched();
    };

    let basis = config
        .normalization
        .resolve(|| pool.iter().map(|opportunity| opportunity.csr_amount).max());

    let (score, basis_note) = match basis {
        Some(basis) => (
            selected.csr_amount as f64 / basis * CSR_WEIGHT,
            format!("normalized against ₹{basis}"),
        ),
        None => (0.0, "no usable normalization basis".to_string()),
    };

    CsrAssessment {
        score,
        csr_amount: selected.csr_amount,
        reasoning: format!(
            "CSR available in {} / {}: ₹{} ({})",
            selected.state, selected.category, selected.csr_amount, basis_note
        ),
    }
}

pub(crate) fn assess_supplier(
    ngo: &NgoRecord,
    pool: &[SupplierRecord],
    config: &ScoringConfig,
) -> SupplierAssessment {
    let candidates = matching(&ngo.state, &ngo.category, pool);
    let Some(selected) = config.selection.select(&candidates) else {
        return SupplierAssessment::unmatched();
    };

    SupplierAssessment {
        score: selected.reliability * SUPPLIER_WEIGHT,
        supplier_name: selected.name.clone(),
        reasoning: format!(
            "Best Supplier: {} (Reliability {})",
            selected.name, selected.reliability
        ),
    }
}
