//! Shared test harness for E2E integration tests.
//!
//! Wires the real interpreter (rule-based classifier + waypoint matcher) to a
//! `MockEmbedder` whose vectors pin exact similarity scores, so every test
//! exercises the production code path with deterministic numbers.

#![allow(dead_code)]

use std::sync::Arc;

use wpt_interpreter::{CommandInterpreter, RuleBasedClassifier};
use wpt_matcher::{MatchParams, MockEmbedder, WaypointMatcher};

/// Waypoints used by the interactive driver's sample session.
pub const SAMPLE_WAYPOINTS: &[&str] = &[
    "5th floor bathroom",
    "roof vent",
    "stairs",
    "the",
    "KitchenDoor",
    "Central Park",
    "Main Pier",
    "Escape Boat",
];

/// End-to-end harness: interpreter plus a handle on its mock embedder.
pub struct TestHarness {
    pub interpreter: CommandInterpreter,
    pub embedder: Arc<MockEmbedder>,
}

impl TestHarness {
    /// Harness whose `command` text scores exactly `scores` against each waypoint.
    ///
    /// Waypoints are loaded in the order given.
    pub async fn scored(command: &str, scores: &[(&str, f32)]) -> Self {
        Self::scored_with(command, scores, MatchParams::default()).await
    }

    /// Like [`TestHarness::scored`] with custom thresholds.
    pub async fn scored_with(command: &str, scores: &[(&str, f32)], params: MatchParams) -> Self {
        let embedder = Arc::new(MockEmbedder::scored(command, scores));
        let interpreter = CommandInterpreter::new(
            Box::new(RuleBasedClassifier::new()),
            WaypointMatcher::new(embedder.clone()),
            params,
        );
        interpreter
            .set_waypoints(scores.iter().map(|(name, _)| *name))
            .await
            .unwrap();
        Self {
            interpreter,
            embedder,
        }
    }

    /// Harness with no waypoints loaded.
    pub fn empty() -> Self {
        let embedder = Arc::new(MockEmbedder::new());
        let interpreter = CommandInterpreter::new(
            Box::new(RuleBasedClassifier::new()),
            WaypointMatcher::new(embedder.clone()),
            MatchParams::default(),
        );
        Self {
            interpreter,
            embedder,
        }
    }

    /// Interpret `text` and return the wire JSON.
    pub async fn interpret_json(&self, text: &str) -> serde_json::Value {
        let interpretation = self.interpreter.interpret(text).await.unwrap();
        serde_json::to_value(&interpretation).unwrap()
    }
}

/// Names from a `topK` JSON array, in order.
pub fn top_k_names(target: &serde_json::Value) -> Vec<String> {
    target["topK"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}
