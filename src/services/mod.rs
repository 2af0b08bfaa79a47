pub mod compatibility;
pub mod providers;
pub mod room_analyzer;
pub mod style_quiz;

pub use compatibility::{CompatibilityEstimator, MatchScorer, RandomMatchScorer};
pub use room_analyzer::RoomAnalyzer;
pub use style_quiz::StyleQuizScorer;
