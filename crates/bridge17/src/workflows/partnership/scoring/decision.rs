use super::config::DecisionWeights;

pub(crate) fn decide(
    ngo_score: f64,
    csr_score: f64,
    supplier_score: f64,
    weights: &DecisionWeights,
) -> f64 {
    let combined =
        weights.ngo * ngo_score + weights.csr * csr_score + weights.supplier * supplier_score;
    round_to(combined, weights.precision)
}

/// Rounds on the exact decimal expansion of `value`, so a sum stored just below a tie stays below.
pub(crate) fn round_to(value: f64, decimals: u8) -> f64 {
    format!("{value:.*}", usize::from(decimals))
        .parse()
        .unwrap_or(value)
}
