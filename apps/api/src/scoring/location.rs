//! Location-dimension scoring, graded by the posting's work arrangement.

use crate::models::posting::WorkArrangement;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationEvaluation {
    /// 0-100.
    pub score: u8,
    pub detail: String,
}

/// Scores the location dimension.
///
/// Remote postings carry no location constraint. A posting without a location
/// scores neutral-full; a candidate without a location scores the unknown
/// midpoint. Mismatches grade by arrangement: hybrid assumes a reasonable
/// commute, on-site is low but nonzero (a soft mismatch, not a red flag).
pub fn evaluate_location(
    candidate_location: Option<&str>,
    posting_location: Option<&str>,
    arrangement: WorkArrangement,
) -> LocationEvaluation {
    if arrangement == WorkArrangement::Remote {
        return LocationEvaluation {
            score: 100,
            detail: "remote posting - no location constraint".to_string(),
        };
    }

    let posting_loc = match normalized(posting_location) {
        Some(loc) => loc,
        None => {
            return LocationEvaluation {
                score: 100,
                detail: "posting does not state a location".to_string(),
            };
        }
    };

    let candidate_loc = match normalized(candidate_location) {
        Some(loc) => loc,
        None => {
            return LocationEvaluation {
                score: 50,
                detail: "candidate location unknown".to_string(),
            };
        }
    };

    if candidate_loc == posting_loc {
        return LocationEvaluation {
            score: 100,
            detail: format!("location match: {posting_loc}"),
        };
    }

    let (score, label) = match arrangement {
        WorkArrangement::Hybrid => (60, "hybrid"),
        WorkArrangement::Unspecified => (50, "unspecified arrangement"),
        WorkArrangement::OnSite => (20, "on-site"),
        WorkArrangement::Remote => unreachable!("handled above"),
    };

    LocationEvaluation {
        score,
        detail: format!("{label} mismatch: {candidate_loc} vs {posting_loc}"),
    }
}

fn normalized(location: Option<&str>) -> Option<String> {
    location
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}
