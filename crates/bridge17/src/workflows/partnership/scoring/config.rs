use serde::{Deserialize, Serialize};

use super::selection::SelectionPolicy;

/// Fixed CSR amount (in rupees) that maps to a full normalized opportunity.
pub const DEFAULT_CSR_BASIS: f64 = 100_000_000.0;

/// Scoring knobs shared by every scorer in a ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub selection: SelectionPolicy,
    pub normalization: NormalizationBasis,
    pub weights: DecisionWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            selection: SelectionPolicy::Highest,
            normalization: NormalizationBasis::Fixed(DEFAULT_CSR_BASIS),
            weights: DecisionWeights::default(),
        }
    }
}

/// Denominator used when turning a CSR amount into a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum NormalizationBasis {
    /// A constant amount, independent of the loaded pool.
    Fixed(f64),
    /// The largest `csr_amount` in the whole CSR pool, matched or not.
    PoolMaximum,
}

impl NormalizationBasis {
    pub(crate) fn resolve(self, pool_maximum: impl FnOnce() -> Option<u64>) -> Option<f64> {
        let basis = match self {
            NormalizationBasis::Fixed(amount) => amount,
            NormalizationBasis::PoolMaximum => pool_maximum()? as f64,
        };

        (basis.is_finite() && basis > 0.0).then_some(basis)
    }
}

/// Weights applied by the decision aggregator, plus the number of decimals kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionWeights {
    pub ngo: f64,
    pub csr: f64,
    pub supplier: f64,
    pub precision: u8,
}

impl DecisionWeights {
    pub const MAX_PRECISION: u8 = 9;

    /// Unweighted sum rounded to two decimals.
    pub const fn equal() -> Self {
        Self {
            ngo: 1.0,
            csr: 1.0,
            supplier: 1.0,
            precision: 2,
        }
    }

    /// Weights must be finite and non-negative so raising a component never lowers the total.
    pub fn is_valid(&self) -> bool {
        [self.ngo, self.csr, self.supplier]
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.0)
            && self.precision <= Self::MAX_PRECISION
    }
}

impl Default for DecisionWeights {
    fn default() -> Self {
        Self {
            ngo: 0.4,
            csr: 0.35,
            supplier: 0.25,
            precision: 3,
        }
    }
}
