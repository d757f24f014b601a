//! Clarification policy: auto-select the top waypoint or ask the user.
//!
//! Two gates run in order on the ranking:
//! 1. **Absolute floor**: best score below `min_score` means no entry is a
//!    convincing match (the catalog likely lacks the intended place).
//! 2. **Margin**: best and second-best closer than `min_margin` means two
//!    real entries are lexically ambiguous.
//!
//! Either gate yields the same prompt: the top three display candidates.

use serde::{Deserialize, Serialize};
use wpt_protocol::matching::{ClarifyReason, MatchResult, RankedCandidate};

use crate::error::{MatchError, MatcherResult};

/// Default number of ranked candidates to surface.
pub const DEFAULT_TOP_K: usize = 5;
/// Default absolute confidence floor.
pub const DEFAULT_MIN_SCORE: f32 = 0.35;
/// Default required gap between rank 1 and rank 2.
pub const DEFAULT_MIN_MARGIN: f32 = 0.05;
/// Maximum number of names offered in a clarification prompt.
pub const MAX_CHOICES: usize = 3;

/// Thresholds controlling the clarification decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchParams {
    /// How many ranked candidates to return.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Scores strictly below this always require clarification.
    #[serde(default = "default_min_score")]
    pub min_score: f32,
    /// Required separation between the two best scores.
    #[serde(default = "default_min_margin")]
    pub min_margin: f32,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}
fn default_min_score() -> f32 {
    DEFAULT_MIN_SCORE
}
fn default_min_margin() -> f32 {
    DEFAULT_MIN_MARGIN
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            min_score: default_min_score(),
            min_margin: default_min_margin(),
        }
    }
}

impl MatchParams {
    /// Reject out-of-range thresholds. Values are never clamped.
    pub fn validate(&self) -> MatcherResult<()> {
        if self.top_k == 0 {
            return Err(MatchError::ZeroTopK);
        }
        if !(-1.0..=1.0).contains(&self.min_score) {
            return Err(MatchError::MinScoreOutOfRange(self.min_score));
        }
        if self.min_margin.is_nan() || self.min_margin < 0.0 {
            return Err(MatchError::NegativeMargin(self.min_margin));
        }
        Ok(())
    }
}

/// Apply the two-gate policy to a full ranking (best first).
///
/// `params` must already be validated.
pub fn decide(ranking: Vec<RankedCandidate>, params: &MatchParams) -> MatchResult {
    if ranking.is_empty() {
        return MatchResult::no_candidates();
    }

    let mut top_k = ranking;
    top_k.truncate(params.top_k);
    let best = top_k[0].score;

    let reason = if best < params.min_score {
        Some(ClarifyReason::LowConfidence)
    } else if top_k.len() >= 2 && best - top_k[1].score < params.min_margin {
        Some(ClarifyReason::Ambiguous)
    } else {
        None
    };

    match reason {
        Some(reason) => {
            let choices = top_k
                .iter()
                .take(MAX_CHOICES)
                .map(|c| c.name.clone())
                .collect();
            tracing::debug!(best, ?reason, "waypoint needs clarification");
            MatchResult {
                selected: None,
                score: best,
                top_k,
                needs_clarification: true,
                clarification_choices: choices,
                reason: Some(reason),
            }
        }
        None => {
            let selected = top_k[0].name.clone();
            tracing::debug!(waypoint = %selected, best, "waypoint auto-selected");
            MatchResult {
                selected: Some(selected),
                score: best,
                top_k,
                needs_clarification: false,
                clarification_choices: Vec::new(),
                reason: None,
            }
        }
    }
}
