//! Hard-constraint checks surfaced as advisory red flags. Flags never modify
//! any numeric score; they ride alongside it.

use crate::models::posting::{JobPosting, WorkArrangement};
use crate::models::profile::{CandidateProfile, RemotePreference};

use super::skills::SkillEvaluation;

/// Runs every red-flag check and collects the violations.
pub fn run_red_flag_checks(
    profile: &CandidateProfile,
    posting: &JobPosting,
    skill_eval: &SkillEvaluation,
) -> Vec<String> {
    [
        check_excluded_location(profile, posting),
        check_remote_only_candidate(profile, posting),
        check_skill_overlap(posting, skill_eval),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// On-site posting in a location the candidate has explicitly excluded.
fn check_excluded_location(profile: &CandidateProfile, posting: &JobPosting) -> Option<String> {
    if posting.work_arrangement != WorkArrangement::OnSite {
        return None;
    }
    let posting_loc = posting.location.as_deref()?.trim().to_lowercase();
    if posting_loc.is_empty() {
        return None;
    }

    profile
        .excluded_locations
        .iter()
        .any(|excluded| excluded.trim().to_lowercase() == posting_loc)
        .then(|| {
            format!(
                "excluded_location: posting requires on-site work in {}, which the candidate has excluded",
                posting.location.as_deref().unwrap_or_default().trim()
            )
        })
}

/// On-site posting against a remote-only candidate.
fn check_remote_only_candidate(profile: &CandidateProfile, posting: &JobPosting) -> Option<String> {
    (posting.work_arrangement == WorkArrangement::OnSite
        && profile.remote_preference == RemotePreference::RemoteOnly)
        .then(|| {
            "remote_only_candidate: posting requires on-site work but the candidate only accepts remote roles"
                .to_string()
        })
}

/// Non-empty required skill set with zero overlap.
fn check_skill_overlap(posting: &JobPosting, skill_eval: &SkillEvaluation) -> Option<String> {
    let has_requirements = posting
        .required_skills
        .iter()
        .any(|s| !s.trim().is_empty());
    (has_requirements && skill_eval.matched.is_empty()).then(|| {
        format!(
            "no_required_skill_overlap: none of the {} required skills appear in the candidate's skill set",
            skill_eval.missing.len()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::skills::evaluate_skills;

    fn profile() -> CandidateProfile {
        CandidateProfile {
            skills: vec!["Rust".to_string()],
            work_history: vec![],
            location: Some("Lisbon".to_string()),
            remote_preference: RemotePreference::Flexible,
            excluded_locations: vec![],
        }
    }

    fn on_site_posting(location: &str) -> JobPosting {
        JobPosting {
            required_skills: vec!["Rust".to_string()],
            preferred_skills: vec![],
            work_arrangement: WorkArrangement::OnSite,
            location: Some(location.to_string()),
            industry: None,
            min_experience_years: None,
            description: String::new(),
        }
    }

    fn eval_for(profile: &CandidateProfile, posting: &JobPosting) -> SkillEvaluation {
        evaluate_skills(
            &profile.skills,
            &posting.required_skills,
            &posting.preferred_skills,
            10.0,
        )
    }

    #[test]
    fn test_clean_pair_raises_no_flags() {
        let profile = profile();
        let posting = on_site_posting("Lisbon");
        let flags = run_red_flag_checks(&profile, &posting, &eval_for(&profile, &posting));
        assert!(flags.is_empty());
    }

    #[test]
    fn test_excluded_location_flagged() {
        let mut profile = profile();
        profile.excluded_locations = vec!["austin".to_string()];
        let posting = on_site_posting("Austin");

        let flags = run_red_flag_checks(&profile, &posting, &eval_for(&profile, &posting));
        assert_eq!(flags.len(), 1);
        assert!(flags[0].starts_with("excluded_location:"));
    }

    #[test]
    fn test_hybrid_posting_in_excluded_location_not_flagged() {
        let mut profile = profile();
        profile.excluded_locations = vec!["Austin".to_string()];
        let mut posting = on_site_posting("Austin");
        posting.work_arrangement = WorkArrangement::Hybrid;

        let flags = run_red_flag_checks(&profile, &posting, &eval_for(&profile, &posting));
        assert!(flags.is_empty());
    }

    #[test]
    fn test_remote_only_candidate_flagged_for_on_site() {
        let mut profile = profile();
        profile.remote_preference = RemotePreference::RemoteOnly;
        let posting = on_site_posting("Lisbon");

        let flags = run_red_flag_checks(&profile, &posting, &eval_for(&profile, &posting));
        assert_eq!(flags.len(), 1);
        assert!(flags[0].starts_with("remote_only_candidate:"));
    }

    #[test]
    fn test_zero_skill_overlap_flagged() {
        let mut profile = profile();
        profile.skills = vec!["Python".to_string()];
        let mut posting = on_site_posting("Lisbon");
        posting.required_skills = vec!["Rust".to_string(), "Kubernetes".to_string()];

        let flags = run_red_flag_checks(&profile, &posting, &eval_for(&profile, &posting));
        assert_eq!(flags.len(), 1);
        assert!(flags[0].starts_with("no_required_skill_overlap:"));
        assert!(flags[0].contains('2'));
    }

    #[test]
    fn test_empty_requirements_never_flag_overlap() {
        let profile = profile();
        let mut posting = on_site_posting("Lisbon");
        posting.required_skills = vec![];

        let flags = run_red_flag_checks(&profile, &posting, &eval_for(&profile, &posting));
        assert!(flags.is_empty());
    }
}
