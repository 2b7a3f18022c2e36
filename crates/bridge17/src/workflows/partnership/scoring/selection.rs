use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Records that can be matched against an NGO's (state, category) pair.
pub trait MatchKey {
    fn state(&self) -> &str;
    fn category(&self) -> &str;

    /// Exact, case-sensitive equality on both fields.
    fn matches(&self, state: &str, category: &str) -> bool {
        self.state() == state && self.category() == category
    }
}

/// Numeric field a [`SelectionPolicy::Highest`] policy maximises.
pub trait SelectionMerit {
    fn merit(&self) -> f64;
}

/// Returns every record in `pool` sharing `state` and `category`, in input order.
pub fn matching<'a, T: MatchKey>(state: &str, category: &str, pool: &'a [T]) -> Vec<&'a T> {
    pool.iter()
        .filter(|record| record.matches(state, category))
        .collect()
}

/// Rule for picking one representative out of several matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// First match in input order.
    FirstMatch,
    /// Match with the largest merit; the earliest record wins ties.
    #[default]
    Highest,
}

impl SelectionPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstMatch => "first match",
            Self::Highest => "highest",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first" | "first_match" | "first-match" => Some(Self::FirstMatch),
            "highest" | "best" | "max" => Some(Self::Highest),
            _ => None,
        }
    }

    pub fn select<'a, T: SelectionMerit>(&self, candidates: &[&'a T]) -> Option<&'a T> {
        match self {
            Self::FirstMatch => candidates.first().copied(),
            Self::Highest => {
                let mut best: Option<&'a T> = None;
                for candidate in candidates.iter().copied() {
                    let replaces = match best {
                        Some(current) => matches!(
                            candidate.merit().partial_cmp(&current.merit()),
                            Some(Ordering::Greater)
                        ),
                        None => true,
                    };
                    if replaces {
                        best = Some(candidate);
                    }
                }
                best
            }
        }
    }
}
