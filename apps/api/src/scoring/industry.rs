//! Industry-dimension scoring from tags derived off the candidate's work
//! history.

use crate::models::profile::WorkExperience;

#[derive(Debug, Clone, PartialEq)]
pub struct IndustryEvaluation {
    /// 0-100.
    pub score: u8,
    pub detail: String,
}

/// Distinct industry tags from work history, lowercased, in first-appearance
/// order.
pub fn industry_tags(history: &[WorkExperience]) -> Vec<String> {
    let mut tags = Vec::new();
    for entry in history {
        if let Some(industry) = &entry.industry {
            let tag = industry.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Scores the industry dimension: exact tag match 100, related industry 50,
/// no connection 0. A posting without a stated industry scores 100 — absence
/// of a constraint cannot penalize.
pub fn evaluate_industry(
    history: &[WorkExperience],
    posting_industry: Option<&str>,
) -> IndustryEvaluation {
    let target = match posting_industry.map(|s| s.trim().to_lowercase()) {
        Some(t) if !t.is_empty() => t,
        _ => {
            return IndustryEvaluation {
                score: 100,
                detail: "posting does not state an industry".to_string(),
            };
        }
    };

    let tags = industry_tags(history);

    if tags.iter().any(|tag| *tag == target) {
        return IndustryEvaluation {
            score: 100,
            detail: format!("industry match: {target}"),
        };
    }

    if let Some(tag) = tags.iter().find(|tag| is_related_industry(tag, &target)) {
        return IndustryEvaluation {
            score: 50,
            detail: format!("related industry: {tag} ↔ {target}"),
        };
    }

    IndustryEvaluation {
        score: 0,
        detail: if tags.is_empty() {
            "no industry history on the candidate profile".to_string()
        } else {
            format!("no industry overlap with {target}")
        },
    }
}

/// Fixed related-industry table (e.g. fintech ↔ banking). Symmetric.
fn is_related_industry(a: &str, b: &str) -> bool {
    const RELATED_PAIRS: &[(&str, &str)] = &[
        ("fintech", "banking"),
        ("fintech", "payments"),
        ("fintech", "insurance"),
        ("banking", "insurance"),
        ("healthtech", "healthcare"),
        ("healthtech", "biotech"),
        ("healthcare", "pharmaceuticals"),
        ("e-commerce", "retail"),
        ("e-commerce", "logistics"),
        ("logistics", "supply chain"),
        ("edtech", "education"),
        ("adtech", "marketing"),
        ("adtech", "media"),
        ("media", "entertainment"),
        ("gaming", "entertainment"),
        ("cybersecurity", "software"),
        ("saas", "software"),
        ("telecommunications", "networking"),
        ("automotive", "manufacturing"),
        ("energy", "utilities"),
    ];
    RELATED_PAIRS
        .iter()
        .any(|(x, y)| (a == *x && b == *y) || (a == *y && b == *x))
}
