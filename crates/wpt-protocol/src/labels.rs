//! Label sets for the three classifier heads.
//!
//! Each head predicts over a fixed, ordered label set. The order is part of
//! the classifier contract: logit `i` of a head always belongs to `ALL[i]`.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A fixed, ordered set of labels produced by one classifier head.
pub trait LabelSet: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Head name used in diagnostics ("intent", "speed", "urgency").
    const HEAD: &'static str;

    /// Every label, in logit order.
    const ALL: &'static [Self];

    /// Wire name of the label.
    fn as_str(&self) -> &'static str;

    /// Label at logit position `index`.
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Logit position of this label.
    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|l| l == self)
            .unwrap_or_default()
    }
}

/// What the operator wants the agent to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Navigate to a named waypoint.
    GoTo,
    /// Track a person or another agent.
    Follow,
    /// Stop and keep the current position.
    HoldPosition,
}

impl Intent {
    /// Whether this intent names a place the agent should travel to.
    pub fn is_navigational(&self) -> bool {
        matches!(self, Intent::GoTo)
    }
}

impl LabelSet for Intent {
    const HEAD: &'static str = "intent";
    const ALL: &'static [Self] = &[Intent::GoTo, Intent::Follow, Intent::HoldPosition];

    fn as_str(&self) -> &'static str {
        match self {
            Intent::GoTo => "go_to",
            Intent::Follow => "follow",
            Intent::HoldPosition => "hold_position",
        }
    }
}

/// How fast the agent should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

impl LabelSet for Speed {
    const HEAD: &'static str = "speed";
    const ALL: &'static [Self] = &[Speed::Slow, Speed::Normal, Speed::Fast];

    fn as_str(&self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Normal => "normal",
            Speed::Fast => "fast",
        }
    }
}

/// How urgent the command is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Normal,
    High,
}

impl LabelSet for Urgency {
    const HEAD: &'static str = "urgency";
    const ALL: &'static [Self] = &[Urgency::Low, Urgency::Normal, Urgency::High];

    fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::High => "high",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
