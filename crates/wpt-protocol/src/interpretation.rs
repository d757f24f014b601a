//! The merged, structured response for one interpreted command.

use serde::{Deserialize, Serialize};

use crate::labels::{Intent, Speed, Urgency};
use crate::matching::{MatchResult, RankedCandidate};
use crate::prediction::{Classification, HeadPrediction};

/// Default prompt shown when the target waypoint is ambiguous.
pub const DEFAULT_CLARIFY_QUESTION: &str = "Which waypoint did you mean?";

/// Question and choices offered when the target could not be auto-selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarifyPrompt {
    pub question: String,
    pub choices: Vec<String>,
}

/// Navigation target resolved from the command text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetBlock {
    /// Auto-selected waypoint; `null` when clarification is required.
    pub selected: Option<String>,
    pub score: f32,
    #[serde(rename = "topK")]
    pub top_k: Vec<RankedCandidate>,
    /// Present only when the user must pick a waypoint.
    pub clarify: Option<ClarifyPrompt>,
}

impl TargetBlock {
    /// Render a match result, attaching `question` if clarification is needed.
    pub fn from_match(result: MatchResult, question: &str) -> Self {
        let clarify = result.needs_clarification.then(|| ClarifyPrompt {
            question: question.to_string(),
            choices: result.clarification_choices,
        });
        Self {
            selected: if result.needs_clarification {
                None
            } else {
                result.selected
            },
            score: result.score,
            top_k: result.top_k,
            clarify,
        }
    }
}

/// Full interpretation of one operator command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Original command text.
    pub text: String,
    pub intent: HeadPrediction<Intent>,
    pub speed: HeadPrediction<Speed>,
    pub urgency: HeadPrediction<Urgency>,
    /// Set only for navigational intents; serialized as `null` otherwise.
    pub target: Option<TargetBlock>,
}

impl Interpretation {
    pub fn new(text: impl Into<String>, c: Classification, target: Option<TargetBlock>) -> Self {
        Self {
            text: text.into(),
            intent: c.intent,
            speed: c.speed,
            urgency: c.urgency,
            target,
        }
    }
}
