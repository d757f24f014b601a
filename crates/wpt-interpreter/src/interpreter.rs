//! Command interpretation: classify, then resolve the target waypoint.
//!
//! Waypoint matching runs only when the intent head says the command is
//! navigational (`go_to`). The classifier output and the match result are
//! merged into a single `Interpretation`.

use wpt_matcher::{MatchParams, MatcherResult, WaypointMatcher};
use wpt_protocol::interpretation::{DEFAULT_CLARIFY_QUESTION, Interpretation, TargetBlock};

use crate::classifier::Classifier;
use crate::config::InterpreterConfig;
use crate::error::{InterpretError, InterpretResult};

/// Orchestrates the classifier and the waypoint matcher.
pub struct CommandInterpreter {
    classifier: Box<dyn Classifier>,
    matcher: WaypointMatcher,
    params: MatchParams,
    clarify_question: String,
}

impl CommandInterpreter {
    pub fn new(
        classifier: Box<dyn Classifier>,
        matcher: WaypointMatcher,
        params: MatchParams,
    ) -> Self {
        Self {
            classifier,
            matcher,
            params,
            clarify_question: DEFAULT_CLARIFY_QUESTION.into(),
        }
    }

    /// Build from config; waypoints still have to be loaded with `set_waypoints`.
    pub fn from_config(
        config: &InterpreterConfig,
        classifier: Box<dyn Classifier>,
        matcher: WaypointMatcher,
    ) -> Self {
        Self::new(classifier, matcher, config.matching)
            .with_clarify_question(config.clarify_question.clone())
    }

    /// Override the question attached to clarification prompts.
    pub fn with_clarify_question(mut self, question: impl Into<String>) -> Self {
        self.clarify_question = question.into();
        self
    }

    /// Replace the known waypoint catalog.
    pub async fn set_waypoints<I, S>(&self, names: I) -> MatcherResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matcher.set_waypoints(names).await
    }

    pub fn matcher(&self) -> &WaypointMatcher {
        &self.matcher
    }

    /// Interpret one operator command.
    pub async fn interpret(&self, text: &str) -> InterpretResult<Interpretation> {
        let text = text.trim();
        if text.is_empty() {
            return Err(InterpretError::EmptyCommand);
        }

        let classification = self.classifier.classify(text)?;

        let target = if classification.intent.label.is_navigational() {
            let result = self.matcher.match_text(text, &self.params).await?;
            Some(TargetBlock::from_match(result, &self.clarify_question))
        } else {
            None
        };

        tracing::info!(
            classifier = self.classifier.name(),
            intent = %classification.intent.label,
            confidence = classification.intent.confidence,
            selected = target.as_ref().and_then(|t| t.selected.as_deref()),
            clarify = target.as_ref().is_some_and(|t| t.clarify.is_some()),
            "command interpreted"
        );

        Ok(Interpretation::new(text, classification, target))
    }
}
