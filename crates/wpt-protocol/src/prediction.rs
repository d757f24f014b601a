//! Classifier head outputs: probability distributions over a label set.

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::labels::{Intent, LabelSet, Speed, Urgency};

/// Errors raised when turning raw head outputs into predictions.
#[derive(Debug, Error, PartialEq)]
pub enum LabelError {
    #[error("{head} head expected {expected} logits, got {actual}")]
    LogitCount {
        head: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{head} head produced a non-finite logit at position {index}")]
    NonFinite { head: &'static str, index: usize },
}

/// Numerically stable softmax (max logit subtracted before `exp`).
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Probability per label, stored in the label set's logit order.
///
/// Serializes as a JSON object keyed by label name, in label order.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution<L> {
    probs: Vec<f64>,
    _labels: PhantomData<L>,
}

impl<L: LabelSet> Distribution<L> {
    fn from_probs(probs: Vec<f64>) -> Self {
        Self {
            probs,
            _labels: PhantomData,
        }
    }

    /// Probability assigned to `label`.
    pub fn get(&self, label: L) -> f64 {
        self.probs.get(label.index()).copied().unwrap_or(0.0)
    }

    /// Raw probabilities in logit order.
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// `(label, probability)` pairs in logit order.
    pub fn iter(&self) -> impl Iterator<Item = (L, f64)> + '_ {
        L::ALL.iter().copied().zip(self.probs.iter().copied())
    }
}

impl<L: LabelSet> Serialize for Distribution<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.probs.len()))?;
        for (label, p) in self.iter() {
            map.serialize_entry(label.as_str(), &p)?;
        }
        map.end()
    }
}

impl<'de, L> Deserialize<'de> for Distribution<L>
where
    L: LabelSet + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: HashMap<L, f64> = HashMap::deserialize(deserializer)?;
        let probs = L::ALL
            .iter()
            .map(|l| raw.get(l).copied().unwrap_or(0.0))
            .collect();
        Ok(Self::from_probs(probs))
    }
}

/// One head's verdict: argmax label, its probability, and the full distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "L: LabelSet + Serialize",
    deserialize = "L: LabelSet + Deserialize<'de>"
))]
pub struct HeadPrediction<L> {
    pub label: L,
    pub confidence: f64,
    pub probs: Distribution<L>,
}

impl<L: LabelSet> HeadPrediction<L> {
    /// Build a prediction from raw logits (one per label, in label order).
    ///
    /// Ties resolve to the earliest label.
    pub fn from_logits(logits: &[f64]) -> Result<Self, LabelError> {
        if logits.len() != L::ALL.len() {
            return Err(LabelError::LogitCount {
                head: L::HEAD,
                expected: L::ALL.len(),
                actual: logits.len(),
            });
        }
        if let Some(index) = logits.iter().position(|x| !x.is_finite()) {
            return Err(LabelError::NonFinite {
                head: L::HEAD,
                index,
            });
        }

        let probs = softmax(logits);
        let mut best = 0;
        for (i, p) in probs.iter().enumerate() {
            if *p > probs[best] {
                best = i;
            }
        }

        Ok(Self {
            label: L::ALL[best],
            confidence: probs[best],
            probs: Distribution::from_probs(probs),
        })
    }
}

/// Output of the three-head command classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub intent: HeadPrediction<Intent>,
    pub speed: HeadPrediction<Speed>,
    pub urgency: HeadPrediction<Urgency>,
}

impl Classification {
    /// Build from per-head logits.
    pub fn from_logits(
        intent: &[f64],
        speed: &[f64],
        urgency: &[f64],
    ) -> Result<Self, LabelError> {
        Ok(Self {
            intent: HeadPrediction::from_logits(intent)?,
            speed: HeadPrediction::from_logits(speed)?,
            urgency: HeadPrediction::from_logits(urgency)?,
        })
    }
}
