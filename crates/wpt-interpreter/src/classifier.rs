//! Command classifiers mapping text to intent / speed / urgency predictions.
//!
//! `Classifier` is the seam for any multi-head model. The bundled
//! `RuleBasedClassifier` scores keyword cues per label and turns the scores
//! into distributions with a softmax, so it produces the same output shape
//! as a trained network at zero cost.

use wpt_protocol::labels::{Intent, LabelSet, Speed, Urgency};
use wpt_protocol::prediction::Classification;

use crate::error::ClassifyResult;

/// Trait for classifiers that label a command along all three heads.
pub trait Classifier: Send + Sync {
    /// Classify one command.
    fn classify(&self, text: &str) -> ClassifyResult<Classification>;

    /// Name of this classifier (for logging).
    fn name(&self) -> &str;
}

/// Logit added per matched cue word.
const CUE_WEIGHT: f64 = 2.0;

/// Logit given to the neutral label of the speed and urgency heads.
const NEUTRAL_BIAS: f64 = 1.0;

// ── Cue tables ──────────────────────────────────────────────────

const INTENT_CUES: &[(Intent, &[&str])] = &[
    (Intent::GoTo, &["go to", "head to", "move to", "get to"]),
    (Intent::Follow, &["follow", "stay with", "stick with"]),
    (Intent::HoldPosition, &["hold", "stay", "hold position"]),
];

const SPEED_CUES: &[(Speed, &[&str])] = &[
    (Speed::Slow, &["slowly", "carefully", "quietly"]),
    (Speed::Fast, &["quickly", "hurry", "run", "now"]),
];

const URGENCY_CUES: &[(Urgency, &[&str])] = &[
    (Urgency::Low, &["when you can", "no rush"]),
    (Urgency::High, &["now", "immediately", "right now"]),
];

/// Keyword-cue classifier.
///
/// Each cue phrase found as a whole-word sequence adds `CUE_WEIGHT` per word
/// to its label's logit, so longer phrases outweigh their prefixes ("stay
/// with" beats "stay"). Speed and urgency fall back to `normal` when no cue
/// fires; intent has no neutral label and ties resolve to `go_to`.
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleBasedClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for RuleBasedClassifier {
    fn classify(&self, text: &str) -> ClassifyResult<Classification> {
        let tokens = tokenize(text);

        let intent = head_logits(&tokens, INTENT_CUES, None);
        let speed = head_logits(&tokens, SPEED_CUES, Some(Speed::Normal));
        let urgency = head_logits(&tokens, URGENCY_CUES, Some(Urgency::Normal));

        let classification = Classification::from_logits(&intent, &speed, &urgency)?;
        tracing::debug!(
            intent = %classification.intent.label,
            speed = %classification.speed.label,
            urgency = %classification.urgency.label,
            "rule-based classification"
        );
        Ok(classification)
    }

    fn name(&self) -> &str {
        "rules"
    }
}

/// Lowercase words, splitting on anything that is not alphanumeric or `'`.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

/// Whether `phrase` occurs in `tokens` as a contiguous word sequence.
fn contains_phrase(tokens: &[String], phrase: &str) -> bool {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() || words.len() > tokens.len() {
        return false;
    }
    tokens
        .windows(words.len())
        .any(|w| w.iter().zip(&words).all(|(t, p)| t == p))
}

/// Build one head's logits in label order.
fn head_logits<L: LabelSet>(
    tokens: &[String],
    cues: &[(L, &[&str])],
    neutral: Option<L>,
) -> Vec<f64> {
    let mut logits = vec![0.0; L::ALL.len()];
    if let Some(n) = neutral {
        logits[n.index()] = NEUTRAL_BIAS;
    }
    for (label, phrases) in cues {
        for phrase in *phrases {
            if contains_phrase(tokens, phrase) {
                logits[label.index()] += CUE_WEIGHT * phrase.split_whitespace().count() as f64;
            }
        }
    }
    logits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Classification {
        RuleBasedClassifier::new().classify(text).unwrap()
    }

    #[test]
    fn go_to_command() {
        let c = classify("Go to the kitchen");
        assert_eq!(c.intent.label, Intent::GoTo);
        assert_eq!(c.speed.label, Speed::Normal);
        assert_eq!(c.urgency.label, Urgency::Normal);
    }

    #[test]
    fn follow_beats_hold_on_stay_with() {
        let c = classify("stay with Dad");
        assert_eq!(c.intent.label, Intent::Follow);
    }

    #[test]
    fn hold_position_command() {
        let c = classify("hold position");
        assert_eq!(c.intent.label, Intent::HoldPosition);
        assert!(c.intent.confidence > 0.9);
    }

    #[test]
    fn speed_and_urgency_cues() {
        let c = classify("quietly head to the roof vent when you can");
        assert_eq!(c.intent.label, Intent::GoTo);
        assert_eq!(c.speed.label, Speed::Slow);
        assert_eq!(c.urgency.label, Urgency::Low);
    }

    #[test]
    fn now_is_fast_and_urgent() {
        let c = classify("Move to Main Pier right now!");
        assert_eq!(c.speed.label, Speed::Fast);
        assert_eq!(c.urgency.label, Urgency::High);
    }

    #[test]
    fn cues_match_whole_words_only() {
        // "know" must not trigger "now", "rune" must not trigger "run"
        let c = classify("I know the rune");
        assert_eq!(c.speed.label, Speed::Normal);
        assert_eq!(c.urgency.label, Urgency::Normal);
    }

    #[test]
    fn no_intent_cue_defaults_to_go_to() {
        let c = classify("Central Park");
        assert_eq!(c.intent.label, Intent::GoTo);
        assert!((c.intent.confidence - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn distributions_sum_to_one() {
        let c = classify("hurry and follow the escape boat immediately");
        for sum in [
            c.intent.probs.probs().iter().sum::<f64>(),
            c.speed.probs.probs().iter().sum::<f64>(),
            c.urgency.probs.probs().iter().sum::<f64>(),
        ] {
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn tokenizer_strips_punctuation() {
        assert_eq!(
            tokenize("Go to the 5th-floor bathroom, NOW!"),
            vec!["go", "to", "the", "5th", "floor", "bathroom", "now"]
        );
    }
}
