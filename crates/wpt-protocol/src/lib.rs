pub mod interpretation;
pub mod labels;
pub mod matching;
pub mod prediction;

pub use interpretation::*;
pub use labels::*;
pub use matching::*;
pub use prediction::*;
