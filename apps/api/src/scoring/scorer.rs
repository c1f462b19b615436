//! The compatibility scorer: a pure, synchronous engine behind a pluggable
//! trait seam.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; `WeightedScorer` is the
//! default backend. Scoring performs no I/O and holds no state, so the trait
//! is synchronous and calls may run concurrently without coordination.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::models::posting::JobPosting;
use crate::models::profile::CandidateProfile;

use super::experience::{evaluate_experience, DEFAULT_REQUIRED_YEARS};
use super::industry::evaluate_industry;
use super::location::evaluate_location;
use super::recommendations::build_recommendations;
use super::red_flags::run_red_flag_checks;
use super::result::{
    dimension_scale, CompatibilityBreakdown, CompatibilityResult, Dimension, DimensionScore,
    RecommendationCategory,
};
use super::skills::evaluate_skills;
use super::weights::{Weights, DEFAULT_WEIGHTS};

/// The only error the scorer owns. Degenerate-but-valid inputs (empty skill
/// lists, missing fields) are absorbed by policy and never error.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Clone)]
pub struct ScorerConfig {
    pub weights: Weights,
    /// Requirement assumed when a posting states none anywhere.
    pub default_required_years: f64,
    /// Maximum absolute points the preferred-skill bonus can add.
    pub preferred_bonus_cap: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            default_required_years: DEFAULT_REQUIRED_YEARS,
            preferred_bonus_cap: 10.0,
        }
    }
}

/// Scorer seam. Implement to swap backends without touching handlers.
pub trait MatchScorer: Send + Sync {
    fn score(
        &self,
        profile: &CandidateProfile,
        posting: &JobPosting,
    ) -> Result<CompatibilityResult, ScoringError>;

    /// Scores postings one by one, preserving input order — callers render
    /// lists and rely on stable ordering.
    fn score_batch(
        &self,
        profile: &CandidateProfile,
        postings: &[JobPosting],
    ) -> Result<Vec<CompatibilityResult>, ScoringError> {
        postings
            .iter()
            .map(|posting| self.score(profile, posting))
            .collect()
    }
}

/// Default weighted four-dimension scorer.
#[derive(Debug, Clone, Default)]
pub struct WeightedScorer {
    config: ScorerConfig,
}

impl WeightedScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Fully deterministic entry point: `as_of` closes open-ended work
    /// history, so identical arguments always produce identical results.
    pub fn score_as_of(
        &self,
        profile: &CandidateProfile,
        posting: &JobPosting,
        as_of: NaiveDate,
    ) -> Result<CompatibilityResult, ScoringError> {
        validate_profile(profile)?;
        validate_posting(posting)?;

        let skill = evaluate_skills(
            &profile.skills,
            &posting.required_skills,
            &posting.preferred_skills,
            self.config.preferred_bonus_cap,
        );
        let experience = evaluate_experience(
            &profile.work_history,
            posting,
            as_of,
            self.config.default_required_years,
        );
        let industry = evaluate_industry(&profile.work_history, posting.industry.as_deref());
        let location = evaluate_location(
            profile.location.as_deref(),
            posting.location.as_deref(),
            posting.work_arrangement,
        );

        let breakdown = CompatibilityBreakdown {
            skill_match: skill.score,
            experience_match: experience.score,
            industry_match: industry.score,
            location_match: location.score,
        };

        let weights = self.config.weights;
        debug_assert!((weights.sum() - 1.0).abs() < 1e-9);
        let overall = (weights.skill * breakdown.skill_match as f64
            + weights.experience * breakdown.experience_match as f64
            + weights.industry * breakdown.industry_match as f64
            + weights.location * breakdown.location_match as f64)
            .round()
            .clamp(0.0, 100.0) as u8;

        let dimensions = vec![
            DimensionScore {
                dimension: Dimension::Skill,
                score: dimension_scale(breakdown.skill_match),
                rationale: skill.detail.clone(),
            },
            DimensionScore {
                dimension: Dimension::Experience,
                score: dimension_scale(breakdown.experience_match),
                rationale: experience.detail.clone(),
            },
            DimensionScore {
                dimension: Dimension::Industry,
                score: dimension_scale(breakdown.industry_match),
                rationale: industry.detail.clone(),
            },
            DimensionScore {
                dimension: Dimension::Location,
                score: dimension_scale(breakdown.location_match),
                rationale: location.detail.clone(),
            },
        ];

        let red_flags = run_red_flag_checks(profile, posting, &skill);
        let recommendations = build_recommendations(
            &skill.missing,
            &breakdown,
            experience.required_years,
            posting.location.as_deref(),
        );

        Ok(CompatibilityResult {
            dimensions,
            compatibility_breakdown: breakdown,
            overall_score: overall,
            missing_skills: skill.missing,
            recommendations,
            red_flags,
            recommendation_category: RecommendationCategory::from_overall(overall),
        })
    }
}

impl MatchScorer for WeightedScorer {
    fn score(
        &self,
        profile: &CandidateProfile,
        posting: &JobPosting,
    ) -> Result<CompatibilityResult, ScoringError> {
        self.score_as_of(profile, posting, Utc::now().date_naive())
    }
}

fn validate_profile(profile: &CandidateProfile) -> Result<(), ScoringError> {
    for entry in &profile.work_history {
        if let Some(end) = entry.end_date {
            if end < entry.start_date {
                return Err(ScoringError::InvalidInput(format!(
                    "work history entry '{}' at {} ends before it starts ({} < {})",
                    entry.title, entry.company, end, entry.start_date
                )));
            }
        }
    }
    Ok(())
}

fn validate_posting(posting: &JobPosting) -> Result<(), ScoringError> {
    if let Some(years) = posting.min_experience_years {
        if !years.is_finite() || years < 0.0 {
            return Err(ScoringError::InvalidInput(format!(
                "minExperienceYears must be a non-negative number, got {years}"
            )));
        }
    }
    Ok(())
}
