use bridge17::error::AppError;
use bridge17::workflows::dataset::PartnershipDataset;
use bridge17::workflows::partnership::{
    filter_options, EcosystemOverview, EvaluationResult, FilterOptions, FilterSelection, NgoId,
    NgoDetailView, PartnershipEngine,
};
use serde::Serialize;

use crate::history::{HistoryEntry, MatchHistory};

/// Facade over one loaded dataset, the scoring engine and the match history.
pub(crate) struct PartnershipService {
    dataset: PartnershipDataset,
    engine: PartnershipEngine,
    history: MatchHistory,
}

/// A selected NGO together with its score breakdown.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NgoExplanation {
    pub(crate) ngo: NgoDetailView,
    pub(crate) evaluation: EvaluationResult,
}

impl PartnershipService {
    pub(crate) fn new(dataset: PartnershipDataset, engine: PartnershipEngine) -> Self {
        Self {
            dataset,
            engine,
            history: MatchHistory::default(),
        }
    }

    pub(crate) fn filters(&self) -> FilterOptions {
        filter_options(&self.dataset.ngos)
    }

    pub(crate) fn overview(&self) -> EcosystemOverview {
        EcosystemOverview::from_records(&self.dataset.ngos)
    }

    /// Ranks the NGOs in `filter` and logs the winner to the match history.
    pub(crate) fn rank(&self, filter: &FilterSelection) -> Vec<EvaluationResult> {
        let results = self.engine.rank_for(
            filter,
            &self.dataset.ngos,
            &self.dataset.csr,
            &self.dataset.suppliers,
        );
        self.history.record_winner(&results);
        results
    }

    pub(crate) fn explain(&self, id: &NgoId) -> Result<NgoExplanation, AppError> {
        let ngo = self
            .dataset
            .ngo(id)
            .ok_or_else(|| AppError::UnknownNgo(id.clone()))?;

        Ok(NgoExplanation {
            ngo: NgoDetailView::from_record(ngo),
            evaluation: self
                .engine
                .evaluate(ngo, &self.dataset.csr, &self.dataset.suppliers),
        })
    }

    pub(crate) fn history(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }
}
