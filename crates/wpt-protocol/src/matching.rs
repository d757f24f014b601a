//! Waypoint match results produced by the disambiguation engine.

use serde::{Deserialize, Serialize};

/// A catalog entry with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub name: String,
    pub score: f32,
}

impl RankedCandidate {
    pub fn new(name: impl Into<String>, score: f32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Why the engine declined to auto-select a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClarifyReason {
    /// The catalog is empty; there is nothing to offer.
    NoCandidates,
    /// The best score is below the absolute confidence floor.
    LowConfidence,
    /// The best and second-best scores are closer than the required margin.
    Ambiguous,
}

/// Outcome of matching one query against the waypoint catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Auto-selected waypoint. `None` whenever clarification is needed.
    pub selected: Option<String>,
    /// Best similarity score (0.0 for an empty catalog).
    pub score: f32,
    /// Top-ranked candidates, best first.
    pub top_k: Vec<RankedCandidate>,
    pub needs_clarification: bool,
    /// Names to offer the user; empty unless clarification is needed.
    pub clarification_choices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ClarifyReason>,
}

impl MatchResult {
    /// Result for a query against an empty catalog.
    pub fn no_candidates() -> Self {
        Self {
            selected: None,
            score: 0.0,
            top_k: Vec::new(),
            needs_clarification: true,
            clarification_choices: Vec::new(),
            reason: Some(ClarifyReason::NoCandidates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_candidates_shape() {
        let m = MatchResult::no_candidates();
        assert!(m.needs_clarification);
        assert!(m.selected.is_none());
        assert!(m.top_k.is_empty());
        assert!(m.clarification_choices.is_empty());
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn reason_serialization() {
        assert_eq!(
            serde_json::to_string(&ClarifyReason::LowConfidence).unwrap(),
            r#""low_confidence""#
        );
        assert_eq!(
            serde_json::to_string(&ClarifyReason::NoCandidates).unwrap(),
            r#""no_candidates""#
        );
    }

    #[test]
    fn confident_result_omits_reason() {
        let m = MatchResult {
            selected: Some("Kitchen".into()),
            score: 0.9,
            top_k: vec![RankedCandidate::new("Kitchen", 0.9)],
            needs_clarification: false,
            clarification_choices: Vec::new(),
            reason: None,
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("reason"));
        assert!(json.contains(r#""selected":"Kitchen""#));
    }
}
