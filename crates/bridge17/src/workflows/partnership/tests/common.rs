use crate::workflows::partnership::domain::{CsrOpportunity, NgoId, NgoRecord, SupplierRecord};
use crate::workflows::partnership::scoring::{PartnershipEngine, ScoringConfig};

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn ngo(id: &str, state: &str, category: &str, trust_score: f64) -> NgoRecord {
    NgoRecord {
        id: NgoId(id.to_string()),
        name: format!("{id} Foundation"),
        state: state.to_string(),
        category: category.to_string(),
        trust_score,
        certified: true,
        trustee_contact: format!("trustee@{}.org", id.to_ascii_lowercase()),
        about: "Community programs".to_string(),
    }
}

pub(super) fn csr(state: &str, category: &str, csr_amount: u64) -> CsrOpportunity {
    CsrOpportunity {
        state: state.to_string(),
        category: category.to_string(),
        csr_amount,
    }
}

pub(super) fn supplier(name: &str, state: &str, category: &str, reliability: f64) -> SupplierRecord {
    SupplierRecord {
        name: name.to_string(),
        state: state.to_string(),
        category: category.to_string(),
        reliability,
    }
}

pub(super) fn engine() -> PartnershipEngine {
    PartnershipEngine::new(ScoringConfig::default())
}

pub(super) fn engine_with(configure: impl FnOnce(&mut ScoringConfig)) -> PartnershipEngine {
    let mut config = ScoringConfig::default();
    configure(&mut config);
    PartnershipEngine::new(config)
}
