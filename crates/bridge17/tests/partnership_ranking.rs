//! End-to-end scenarios driving the public loader and engine against the fixture exports in
//! `tests/fixtures`.

use std::path::PathBuf;

use bridge17::workflows::dataset::{DatasetLoader, PartnershipDataset};
use bridge17::workflows::partnership::{
    filter_options, EcosystemOverview, FilterSelection, NgoId, NormalizationBasis,
    PartnershipEngine, RiskLevel, ScoringConfig, SelectionPolicy,
};

const EDUCATION: &str = "SDG 4 – Quality Education";
const WATER: &str = "SDG 6 – Clean Water & Sanitation";

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn dataset() -> PartnershipDataset {
    DatasetLoader::from_dir(fixture_dir()).expect("fixture dataset loads")
}

#[test]
fn loader_mixes_json_and_csv_exports() {
    let dataset = dataset();

    assert_eq!(dataset.ngos.len(), 3);
    assert_eq!(dataset.csr.len(), 3);
    assert_eq!(dataset.suppliers.len(), 3);
    assert_eq!(dataset.suppliers[0].name, "SupplierCo");
    assert_eq!(dataset.suppliers[0].category, EDUCATION);
}

#[test]
fn education_ranking_in_odisha_prefers_trusted_ngo() {
    let dataset = dataset();
    let engine = PartnershipEngine::new(ScoringConfig::default());
    let filter = FilterSelection::new("Odisha", EDUCATION);

    let results = engine.rank_for(&filter, &dataset.ngos, &dataset.csr, &dataset.suppliers);

    assert_eq!(results.len(), 2);

    let leader = &results[0];
    assert_eq!(leader.ngo_id, NgoId("NGO-001".to_string()));
    assert_eq!(leader.risk_level(), RiskLevel::LowRisk);
    assert_eq!(leader.csr.csr_amount, 50_000_000);
    assert_eq!(leader.supplier.supplier_name, "SupplierCo");
    assert_eq!(leader.final_score, 0.414);

    let runner_up = &results[1];
    assert_eq!(runner_up.ngo_id, NgoId("NGO-002".to_string()));
    assert_eq!(runner_up.risk_level(), RiskLevel::MediumRisk);
    assert_eq!(runner_up.final_score, 0.355);
}

#[test]
fn ngo_without_csr_match_still_gets_supplier_credit() {
    let dataset = dataset();
    let engine = PartnershipEngine::new(ScoringConfig::default());
    let filter = FilterSelection::new("Rajasthan", WATER);

    let results = engine.rank_for(&filter, &dataset.ngos, &dataset.csr, &dataset.suppliers);

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.risk_level(), RiskLevel::HighRisk);
    assert_eq!(result.csr.csr_amount, 0);
    assert_eq!(result.csr.reasoning, "No CSR opportunity found");
    assert_eq!(result.supplier.supplier_name, "Marwar Pumps");
    assert_eq!(result.final_score, 0.197);
}

#[test]
fn alternate_policies_change_the_csr_component_only() {
    let dataset = dataset();
    let engine = PartnershipEngine::new(ScoringConfig {
        selection: SelectionPolicy::FirstMatch,
        normalization: NormalizationBasis::PoolMaximum,
        ..ScoringConfig::default()
    });
    let ngo = dataset
        .ngo(&NgoId("NGO-001".to_string()))
        .expect("fixture ngo present");

    let result = engine.evaluate(ngo, &dataset.csr, &dataset.suppliers);

    // First match is 50M; the pool maximum is the unrelated 80M Rajasthan offer.
    assert_eq!(result.csr.csr_amount, 50_000_000);
    assert!((result.csr.score - 0.4375).abs() < 1e-9);
    assert_eq!(result.supplier.supplier_name, "SupplierCo");
}

#[test]
fn reporting_helpers_cover_the_registry() {
    let dataset = dataset();

    let options = filter_options(&dataset.ngos);
    assert_eq!(options.states, vec!["Odisha", "Rajasthan"]);
    assert_eq!(options.categories, vec![EDUCATION, WATER]);

    let overview = EcosystemOverview::from_records(&dataset.ngos);
    assert_eq!(overview.total_ngos, 3);
    assert_eq!(overview.average_trust, Some(0.57));
}
