//! Compatibility scoring — the decision core of the service.
//!
//! Pure functions compare one candidate profile against one job posting
//! across four weighted dimensions (skill 0.40, experience 0.30, industry
//! 0.20, location 0.10) and produce a `CompatibilityResult`: per-dimension
//! breakdowns, an overall 0-100 score, missing skills, deterministic
//! recommendations, advisory red flags, and a recommendation category.

pub mod experience;
pub mod handlers;
pub mod industry;
pub mod location;
pub mod normalize;
pub mod recommendations;
pub mod red_flags;
pub mod result;
pub mod scorer;
pub mod skills;
pub mod weights;

pub use result::{CompatibilityResult, RecommendationCategory};
pub use scorer::{MatchScorer, ScorerConfig, ScoringError, WeightedScorer};
