use super::common::*;
use crate::workflows::partnership::domain::RiskLevel;
use crate::workflows::partnership::scoring::{
    CsrAssessment, DecisionWeights, NormalizationBasis, SelectionPolicy, SupplierAssessment,
    NO_CSR_REASONING, NO_SUPPLIER_NAME, NO_SUPPLIER_REASONING,
};

#[test]
fn trust_score_is_scaled_by_fixed_weight() {
    let engine = engine();

    for trust in [0.0, 0.25, 0.4, 0.7, 1.0] {
        let assessment = engine.assess_trust(&ngo("N1", "Odisha", "Education", trust));
        assert_eq!(assessment.score, trust * 0.6);
    }
}

#[test]
fn trust_reasoning_names_value_and_band() {
    let assessment = engine().assess_trust(&ngo("N1", "Odisha", "Education", 0.4));

    assert_eq!(assessment.risk_level, RiskLevel::MediumRisk);
    assert_eq!(assessment.reasoning, "Trust Score: 0.4 → Medium Risk");
}

#[test]
fn trust_bands_cover_out_of_range_values() {
    let engine = engine();

    let negative = engine.assess_trust(&ngo("N1", "S", "C", -0.2));
    assert_eq!(negative.risk_level, RiskLevel::HighRisk);
    assert_close(negative.score, -0.12);

    let inflated = engine.assess_trust(&ngo("N2", "S", "C", 1.5));
    assert_eq!(inflated.risk_level, RiskLevel::LowRisk);
    assert_close(inflated.score, 0.9);
}

#[test]
fn csr_without_match_returns_sentinel_regardless_of_pool() {
    let engine = engine();
    let target = ngo("N1", "Odisha", "Education", 0.8);
    let pool = vec![
        csr("Odisha", "Health", 90_000_000),
        csr("Kerala", "Education", 10_000_000),
    ];

    let assessment = engine.assess_csr(&target, &pool);

    assert_eq!(assessment.score, 0.0);
    assert_eq!(assessment.csr_amount, 0);
    assert_eq!(assessment.reasoning, NO_CSR_REASONING);
    assert!(!assessment.is_matched());
}

#[test]
fn csr_uses_fixed_basis_by_default() {
    let target = ngo("N1", "Odisha", "Education", 0.8);
    let pool = vec![csr("Odisha", "Education", 50_000_000)];

    let assessment = engine().assess_csr(&target, &pool);

    assert_close(assessment.score, 0.35);
    assert_eq!(assessment.csr_amount, 50_000_000);
    assert!(assessment.reasoning.contains("Odisha"));
    assert!(assessment.reasoning.contains("Education"));
    assert!(assessment.reasoning.contains("50000000"));
}

#[test]
fn csr_selects_largest_match_under_highest_policy() {
    let target = ngo("N1", "Odisha", "Education", 0.8);
    let pool = vec![
        csr("Odisha", "Education", 20_000_000),
        csr("Odisha", "Education", 80_000_000),
        csr("Odisha", "Education", 40_000_000),
    ];

    let assessment = engine().assess_csr(&target, &pool);

    assert_eq!(assessment.csr_amount, 80_000_000);
    assert_close(assessment.score, 0.56);
}

#[test]
fn csr_first_match_policy_keeps_input_order() {
    let engine = engine_with(|config| config.selection = SelectionPolicy::FirstMatch);
    let target = ngo("N1", "Odisha", "Education", 0.8);
    let pool = vec![
        csr("Odisha", "Education", 20_000_000),
        csr("Odisha", "Education", 80_000_000),
    ];

    let assessment = engine.assess_csr(&target, &pool);

    assert_eq!(assessment.csr_amount, 20_000_000);
}

#[test]
fn csr_pool_maximum_normalizes_against_unmatched_records_too() {
    let engine = engine_with(|config| config.normalization = NormalizationBasis::PoolMaximum);
    let target = ngo("N1", "Odisha", "Education", 0.8);
    let pool = vec![
        csr("Odisha", "Education", 25_000_000),
        csr("Kerala", "Health", 100_000_000),
    ];

    let assessment = engine.assess_csr(&target, &pool);

    assert_close(assessment.score, 0.175);
}

#[test]
fn csr_zero_basis_scores_zero_instead_of_dividing() {
    let engine = engine_with(|config| config.normalization = NormalizationBasis::PoolMaximum);
    let target = ngo("N1", "Odisha", "Education", 0.8);
    let pool = vec![csr("Odisha", "Education", 0)];

    let assessment = engine.assess_csr(&target, &pool);

    assert_eq!(assessment.score, 0.0);
    assert_eq!(assessment.csr_amount, 0);
    assert!(assessment.is_matched());
}

#[test]
fn csr_non_positive_fixed_basis_scores_zero() {
    let engine = engine_with(|config| config.normalization = NormalizationBasis::Fixed(0.0));
    let target = ngo("N1", "Odisha", "Education", 0.8);
    let pool = vec![csr("Odisha", "Education", 10_000_000)];

    assert_eq!(engine.assess_csr(&target, &pool).score, 0.0);
}

#[test]
fn supplier_selects_most_reliable_match() {
    let target = ngo("N1", "X", "Y", 0.8);
    let pool = vec![
        supplier("A", "X", "Y", 0.9),
        supplier("B", "X", "Y", 0.95),
        supplier("C", "X", "Z", 0.99),
    ];

    let assessment = engine().assess_supplier(&target, &pool);

    assert_eq!(assessment.supplier_name, "B");
    assert_close(assessment.score, 0.475);
    assert_eq!(assessment.reasoning, "Best Supplier: B (Reliability 0.95)");
}

#[test]
fn supplier_ties_resolve_to_first_occurrence() {
    let target = ngo("N1", "X", "Y", 0.8);
    let pool = vec![
        supplier("Early", "X", "Y", 0.7),
        supplier("Late", "X", "Y", 0.7),
    ];

    let assessment = engine().assess_supplier(&target, &pool);

    assert_eq!(assessment.supplier_name, "Early");
}

#[test]
fn supplier_without_match_returns_sentinel() {
    let target = ngo("N1", "X", "Y", 0.8);
    let pool = vec![supplier("A", "x", "Y", 0.9)];

    let assessment = engine().assess_supplier(&target, &pool);

    assert_eq!(assessment.score, 0.0);
    assert_eq!(assessment.supplier_name, NO_SUPPLIER_NAME);
    assert_eq!(assessment.reasoning, NO_SUPPLIER_REASONING);
    assert!(!assessment.is_matched());
}

#[test]
fn zero_reliability_supplier_still_counts_as_matched() {
    let target = ngo("N1", "X", "Y", 0.8);
    let pool = vec![supplier("Idle", "X", "Y", 0.0)];

    let assessment = engine().assess_supplier(&target, &pool);

    assert_eq!(assessment.score, 0.0);
    assert!(assessment.is_matched());
}

#[test]
fn match_detection_uses_the_whole_assessment() {
    let mut named = SupplierAssessment::unmatched();
    named.supplier_name = "SupplierCo".to_string();
    assert!(named.is_matched());

    let mut funded = CsrAssessment::unmatched();
    funded.csr_amount = 10;
    assert!(funded.is_matched());

    assert!(!SupplierAssessment::unmatched().is_matched());
    assert!(!CsrAssessment::unmatched().is_matched());
}

#[test]
fn evaluate_combines_components_with_default_weights() {
    let target = ngo("N1", "Odisha", "Education", 0.8);
    let csr_pool = vec![csr("Odisha", "Education", 50_000_000)];
    let supplier_pool = vec![supplier("SupplierCo", "Odisha", "Education", 0.8)];

    let result = engine().evaluate(&target, &csr_pool, &supplier_pool);

    assert_close(result.trust.score, 0.48);
    assert_eq!(result.risk_level(), RiskLevel::LowRisk);
    assert_close(result.csr.score, 0.35);
    assert_eq!(result.csr.csr_amount, 50_000_000);
    assert_close(result.supplier.score, 0.4);
    assert_eq!(result.supplier.supplier_name, "SupplierCo");
    // 0.4 * 0.48 + 0.35 * 0.35 + 0.25 * 0.4 sits just below 0.4145.
    assert_eq!(result.final_score, 0.414);
    assert_eq!(result.final_score, engine().decide(0.48, 0.35, 0.4));
}

#[test]
fn evaluate_equal_weights_sum_components() {
    let engine = engine_with(|config| config.weights = DecisionWeights::equal());
    let target = ngo("N1", "Odisha", "Education", 0.8);
    let csr_pool = vec![csr("Odisha", "Education", 50_000_000)];
    let supplier_pool = vec![supplier("SupplierCo", "Odisha", "Education", 0.8)];

    let result = engine.evaluate(&target, &csr_pool, &supplier_pool);

    assert_eq!(result.final_score, 1.23);
}

#[test]
fn evaluate_without_matches_uses_trust_only() {
    let target = ngo("N1", "Odisha", "Education", 0.5);

    let result = engine().evaluate(&target, &[], &[]);

    assert_eq!(result.csr.csr_amount, 0);
    assert_eq!(result.supplier.supplier_name, NO_SUPPLIER_NAME);
    assert_eq!(result.final_score, 0.12);
    assert_eq!(result.reasoning()[1], NO_CSR_REASONING);
    assert_eq!(result.reasoning()[2], NO_SUPPLIER_REASONING);
}

#[test]
fn evaluate_is_repeatable() {
    let engine = engine();
    let target = ngo("N1", "Odisha", "Education", 0.73);
    let csr_pool = vec![
        csr("Odisha", "Education", 12_345_678),
        csr("Odisha", "Education", 9_876_543),
    ];
    let supplier_pool = vec![
        supplier("A", "Odisha", "Education", 0.61),
        supplier("B", "Odisha", "Education", 0.88),
    ];

    let first = engine.evaluate(&target, &csr_pool, &supplier_pool);
    let second = engine.evaluate(&target, &csr_pool, &supplier_pool);

    assert_eq!(first, second);
    assert_eq!(first.final_score.to_bits(), second.final_score.to_bits());
}
