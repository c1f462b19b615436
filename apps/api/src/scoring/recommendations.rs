//! Deterministic recommendation strings derived from missing skills and the
//! weakest sub-score.

use super::result::{CompatibilityBreakdown, Dimension};

/// One entry per missing required skill (posting order), then exactly one
/// recommendation for the weakest dimension. Ties break by the fixed order
/// skill, experience, industry, location.
pub fn build_recommendations(
    missing_skills: &[String],
    breakdown: &CompatibilityBreakdown,
    required_years: f64,
    posting_location: Option<&str>,
) -> Vec<String> {
    let mut recommendations: Vec<String> = missing_skills
        .iter()
        .map(|skill| format!("Consider highlighting experience with {skill}"))
        .collect();

    recommendations.push(match weakest_dimension(breakdown) {
        Dimension::Skill => {
            "Strengthen your overlap with the required skills before applying".to_string()
        }
        Dimension::Experience => format!(
            "Gain additional hands-on experience; this role expects roughly {required_years:.0} years"
        ),
        Dimension::Industry => {
            "Emphasize transferable work from related industries in your application".to_string()
        }
        Dimension::Location => match posting_location {
            Some(location) => format!(
                "Mention relocation or remote flexibility to offset the {location} location mismatch"
            ),
            None => "Mention relocation or remote flexibility in your application".to_string(),
        },
    });

    recommendations
}

fn weakest_dimension(breakdown: &CompatibilityBreakdown) -> Dimension {
    // First minimum wins, so the declaration order is the tie-break order.
    let scores = [
        (Dimension::Skill, breakdown.skill_match),
        (Dimension::Experience, breakdown.experience_match),
        (Dimension::Industry, breakdown.industry_match),
        (Dimension::Location, breakdown.location_match),
    ];
    scores
        .into_iter()
        .min_by_key(|(_, score)| *score)
        .map(|(dimension, _)| dimension)
        .expect("four dimensions")
}
