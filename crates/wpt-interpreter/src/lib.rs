//! Waypointer command interpreter: library crate for the CLI driver.
//!
//! Classifies operator commands along intent, speed, and urgency, and for
//! navigational commands resolves the named place through the
//! `wpt-matcher` disambiguation engine. Re-exports all modules so external
//! crates (e.g. `wpt-e2e-tests`) can wire their own collaborators.

pub mod classifier;
pub mod config;
pub mod embedder;
pub mod error;
pub mod interpreter;
pub mod repl;

pub use classifier::{Classifier, RuleBasedClassifier};
pub use config::InterpreterConfig;
pub use embedder::{OllamaConfig, OllamaEmbedder};
pub use error::{ClassifyError, ClassifyResult, InterpretError, InterpretResult};
pub use interpreter::CommandInterpreter;
