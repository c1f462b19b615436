//! Output value types for a compatibility evaluation. The wire format is
//! camelCase JSON consumed directly by the frontend's progress-bar views.

use serde::{Deserialize, Serialize};

/// One scored dimension with its 1-10 projection and a human-readable
/// justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// Integer 1-10.
    pub score: u8,
    pub rationale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Skill,
    Experience,
    Industry,
    Location,
}

/// Named sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityBreakdown {
    pub skill_match: u8,
    pub experience_match: u8,
    pub industry_match: u8,
    pub location_match: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    StrongMatch,
    GoodMatch,
    PossibleMatch,
    WeakMatch,
    NotRecommended,
}

impl RecommendationCategory {
    /// Exact step function of the overall score. The boundaries are part of
    /// the product contract: 85 is a strong match, 84 is not.
    pub fn from_overall(overall: u8) -> Self {
        match overall {
            85..=u8::MAX => Self::StrongMatch,
            70..=84 => Self::GoodMatch,
            50..=69 => Self::PossibleMatch,
            30..=49 => Self::WeakMatch,
            _ => Self::NotRecommended,
        }
    }
}

/// Immutable result of scoring one (profile, posting) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub dimensions: Vec<DimensionScore>,
    pub compatibility_breakdown: CompatibilityBreakdown,
    /// Integer 0-100, weighted combination of the breakdown.
    pub overall_score: u8,
    /// Required skills the candidate lacks, in posting order with the
    /// posting's original spelling.
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    /// Advisory signals. Never modify the numeric score.
    pub red_flags: Vec<String>,
    pub recommendation_category: RecommendationCategory,
}

/// Projects a 0-100 sub-score onto the 1-10 dimension scale.
pub(crate) fn dimension_scale(sub_score: u8) -> u8 {
    ((sub_score as f64 / 10.0).round() as u8).clamp(1, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_thresholds_exact() {
        assert_eq!(
            RecommendationCategory::from_overall(85),
            RecommendationCategory::StrongMatch
        );
        assert_eq!(
            RecommendationCategory::from_overall(84),
            RecommendationCategory::GoodMatch
        );
        assert_eq!(
            RecommendationCategory::from_overall(70),
            RecommendationCategory::GoodMatch
        );
        assert_eq!(
            RecommendationCategory::from_overall(69),
            RecommendationCategory::PossibleMatch
        );
        assert_eq!(
            RecommendationCategory::from_overall(50),
            RecommendationCategory::PossibleMatch
        );
        assert_eq!(
            RecommendationCategory::from_overall(49),
            RecommendationCategory::WeakMatch
        );
        assert_eq!(
            RecommendationCategory::from_overall(30),
            RecommendationCategory::WeakMatch
        );
        assert_eq!(
            RecommendationCategory::from_overall(29),
            RecommendationCategory::NotRecommended
        );
        assert_eq!(
            RecommendationCategory::from_overall(0),
            RecommendationCategory::NotRecommended
        );
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&RecommendationCategory::StrongMatch).unwrap();
        assert_eq!(json, r#""strong_match""#);
        let parsed: RecommendationCategory = serde_json::from_str(r#""not_recommended""#).unwrap();
        assert_eq!(parsed, RecommendationCategory::NotRecommended);
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let breakdown = CompatibilityBreakdown {
            skill_match: 67,
            experience_match: 100,
            industry_match: 100,
            location_match: 100,
        };
        let value = serde_json::to_value(breakdown).unwrap();
        assert_eq!(value["skillMatch"], 67);
        assert_eq!(value["experienceMatch"], 100);
        assert_eq!(value["industryMatch"], 100);
        assert_eq!(value["locationMatch"], 100);
    }

    #[test]
    fn test_dimension_scale_bounds() {
        assert_eq!(dimension_scale(0), 1);
        assert_eq!(dimension_scale(5), 1);
        assert_eq!(dimension_scale(67), 7);
        assert_eq!(dimension_scale(100), 10);
    }
}
