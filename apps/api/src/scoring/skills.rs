//! Skill-dimension scoring: required-skill coverage plus a capped bonus for
//! preferred skills.

use super::normalize::{normalize_skill, normalize_skill_set};

#[derive(Debug, Clone, PartialEq)]
pub struct SkillEvaluation {
    /// 0-100.
    pub score: u8,
    /// Canonical forms of the required skills the candidate covers, sorted.
    pub matched: Vec<String>,
    /// Required skills the candidate lacks, posting order, original spelling.
    pub missing: Vec<String>,
    pub detail: String,
}

/// Scores the skill dimension.
///
/// Policy (deliberate, not incidental guards):
/// - an empty required list scores 100 — a posting cannot be failed on a
///   requirement it never stated;
/// - an empty candidate skill set against a non-empty requirement scores 0;
/// - each preferred skill the candidate holds adds a share of `bonus_cap`
///   absolute points, capped at 100 total.
pub fn evaluate_skills(
    profile_skills: &[String],
    required: &[String],
    preferred: &[String],
    bonus_cap: f64,
) -> SkillEvaluation {
    let required_set = normalize_skill_set(required);

    if required_set.is_empty() {
        return SkillEvaluation {
            score: 100,
            matched: vec![],
            missing: vec![],
            detail: "posting lists no required skills".to_string(),
        };
    }

    let profile_set = normalize_skill_set(profile_skills);
    let (matched, missing) = split_required(required, &profile_set);

    if profile_set.is_empty() {
        return SkillEvaluation {
            score: 0,
            matched: vec![],
            missing,
            detail: "no skills listed on the candidate profile".to_string(),
        };
    }

    let base = matched.len() as f64 / required_set.len() as f64 * 100.0;

    let preferred_set = normalize_skill_set(preferred);
    let preferred_matched = preferred_set.intersection(&profile_set).count();
    let bonus = if preferred_set.is_empty() {
        0.0
    } else {
        bonus_cap * preferred_matched as f64 / preferred_set.len() as f64
    };

    let score = (base + bonus).round().clamp(0.0, 100.0) as u8;

    let mut detail = format!(
        "matched {} of {} required skills",
        matched.len(),
        required_set.len()
    );
    if !missing.is_empty() {
        detail.push_str(&format!(" (missing: {})", missing.join(", ")));
    }
    if !preferred_set.is_empty() {
        detail.push_str(&format!(
            " / {} of {} preferred",
            preferred_matched,
            preferred_set.len()
        ));
    }

    SkillEvaluation {
        score,
        matched,
        missing,
        detail,
    }
}

/// Splits the posting's required skills into matched canonical forms and
/// missing originals, deduplicating by canonical form and preserving posting
/// order for the missing list.
fn split_required(
    required: &[String],
    profile_set: &std::collections::HashSet<String>,
) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for skill in required {
        if skill.trim().is_empty() {
            continue;
        }
        let canonical = normalize_skill(skill);
        if !seen.insert(canonical.clone()) {
            continue;
        }
        if profile_set.contains(&canonical) {
            matched.push(canonical);
        } else {
            missing.push(skill.clone());
        }
    }

    matched.sort();
    (matched, missing)
}
