use bridge17::workflows::partnership::EvaluationResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Winning NGO of one ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct HistoryEntry {
    pub(crate) state: String,
    pub(crate) category: String,
    pub(crate) ngo: String,
    pub(crate) score: f64,
    pub(crate) recorded_at: DateTime<Utc>,
}

/// Append-only log of ranking winners, owned by the service rather than the scoring engine.
#[derive(Default, Clone)]
pub(crate) struct MatchHistory {
    entries: Arc<Mutex<Vec<HistoryEntry>>>,
}

impl MatchHistory {
    /// Records the top result, if any, and returns the entry written.
    pub(crate) fn record_winner(&self, ranked: &[EvaluationResult]) -> Option<HistoryEntry> {
        let winner = ranked.first()?;
        let entry = HistoryEntry {
            state: winner.state.clone(),
            category: winner.category.clone(),
            ngo: winner.ngo_name.clone(),
            score: winner.final_score,
            recorded_at: Utc::now(),
        };

        self.entries
            .lock()
            .expect("history mutex poisoned")
            .push(entry.clone());
        Some(entry)
    }

    pub(crate) fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.lock().expect("history mutex poisoned").clone()
    }
}
