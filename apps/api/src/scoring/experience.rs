//! Experience-dimension scoring: interval-merged total years against the
//! posting's explicit or inferred requirement.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::posting::JobPosting;
use crate::models::profile::WorkExperience;

/// Mid-level default when the posting states no requirement anywhere.
pub const DEFAULT_REQUIRED_YEARS: f64 = 3.0;

const DAYS_PER_YEAR: f64 = 365.25;

static YEARS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*years?\b").expect("valid years pattern"));

static SENIOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(senior|staff|principal|lead)\b").expect("valid pattern"));

static JUNIOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(junior|entry[\s-]?level|graduate|intern)\b").expect("valid pattern")
});

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceEvaluation {
    /// 0-100.
    pub score: u8,
    pub required_years: f64,
    pub detail: String,
}

/// Total years of experience, with overlapping positions merged so a
/// concurrent side role does not double-count. Open-ended positions close at
/// `as_of`.
pub fn total_experience_years(history: &[WorkExperience], as_of: NaiveDate) -> f64 {
    let mut intervals: Vec<(NaiveDate, NaiveDate)> = history
        .iter()
        .filter_map(|entry| {
            let end = entry.end_date.unwrap_or(as_of);
            (end >= entry.start_date).then_some((entry.start_date, end))
        })
        .collect();
    intervals.sort();

    let mut total_days = 0i64;
    let mut current: Option<(NaiveDate, NaiveDate)> = None;

    for (start, end) in intervals {
        match current {
            Some((cur_start, cur_end)) if start <= cur_end => {
                current = Some((cur_start, cur_end.max(end)));
            }
            Some((cur_start, cur_end)) => {
                total_days += (cur_end - cur_start).num_days();
                current = Some((start, end));
            }
            None => current = Some((start, end)),
        }
    }
    if let Some((cur_start, cur_end)) = current {
        total_days += (cur_end - cur_start).num_days();
    }

    total_days as f64 / DAYS_PER_YEAR
}

/// Years the posting requires: the explicit field when present, else the
/// largest "N+ years" figure in the description, else a seniority keyword
/// heuristic, else the mid-level default.
pub fn required_years(posting: &JobPosting, default_years: f64) -> f64 {
    if let Some(explicit) = posting.min_experience_years {
        return explicit;
    }

    let from_text = YEARS_PATTERN
        .captures_iter(&posting.description)
        .filter_map(|cap| cap[1].parse::<f64>().ok())
        .fold(None::<f64>, |max, years| {
            Some(max.map_or(years, |m| m.max(years)))
        });
    if let Some(years) = from_text {
        return years;
    }

    if SENIOR_PATTERN.is_match(&posting.description) {
        return 5.0;
    }
    if JUNIOR_PATTERN.is_match(&posting.description) {
        return 1.0;
    }

    default_years
}

/// Scores the experience dimension: 100 at or above the requirement, linear
/// decay below it, never negative.
pub fn evaluate_experience(
    history: &[WorkExperience],
    posting: &JobPosting,
    as_of: NaiveDate,
    default_years: f64,
) -> ExperienceEvaluation {
    let candidate_years = total_experience_years(history, as_of);
    let required = required_years(posting, default_years);

    let (score, detail) = if required <= 0.0 || candidate_years >= required {
        (
            100,
            format!(
                "requirement met: {:.1} years ≥ {:.1} required",
                candidate_years, required
            ),
        )
    } else {
        let score = (candidate_years / required * 100.0).round().clamp(0.0, 100.0) as u8;
        (
            score,
            format!(
                "below requirement: {:.1} years < {:.1} required",
                candidate_years, required
            ),
        )
    };

    ExperienceEvaluation {
        score,
        required_years: required,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::posting::WorkArrangement;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn job(start: NaiveDate, end: Option<NaiveDate>) -> WorkExperience {
        WorkExperience {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            industry: None,
            start_date: start,
            end_date: end,
            accomplishments: vec![],
        }
    }

    fn posting_with_description(description: &str) -> JobPosting {
        JobPosting {
            required_skills: vec![],
            preferred_skills: vec![],
            work_arrangement: WorkArrangement::Remote,
            location: None,
            industry: None,
            min_experience_years: None,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_sequential_jobs_sum() {
        let history = vec![
            job(ymd(2018, 1, 1), Some(ymd(2020, 1, 1))),
            job(ymd(2020, 1, 1), Some(ymd(2023, 1, 1))),
        ];
        let years = total_experience_years(&history, ymd(2025, 1, 1));
        assert!((years - 5.0).abs() < 0.05, "got {years}");
    }

    #[test]
    fn test_overlapping_jobs_do_not_double_count() {
        let history = vec![
            job(ymd(2018, 1, 1), Some(ymd(2021, 1, 1))),
            job(ymd(2019, 1, 1), Some(ymd(2020, 1, 1))), // fully inside the first
        ];
        let years = total_experience_years(&history, ymd(2025, 1, 1));
        assert!((years - 3.0).abs() < 0.05, "got {years}");
    }

    #[test]
    fn test_current_position_closes_at_reference_date() {
        let history = vec![job(ymd(2021, 6, 1), None)];
        let years = total_experience_years(&history, ymd(2024, 6, 1));
        assert!((years - 3.0).abs() < 0.05, "got {years}");
    }

    #[test]
    fn test_empty_history_is_zero() {
        assert_eq!(total_experience_years(&[], ymd(2024, 1, 1)), 0.0);
    }

    #[test]
    fn test_explicit_field_wins_over_description() {
        let mut posting = posting_with_description("Requires 10+ years of Rust.");
        posting.min_experience_years = Some(2.0);
        assert_eq!(required_years(&posting, DEFAULT_REQUIRED_YEARS), 2.0);
    }

    #[test]
    fn test_description_picks_largest_year_figure() {
        let posting =
            posting_with_description("2 years of SQL plus 5+ years of backend experience.");
        assert_eq!(required_years(&posting, DEFAULT_REQUIRED_YEARS), 5.0);
    }

    #[test]
    fn test_seniority_keywords_fall_back() {
        let senior = posting_with_description("Senior Backend Engineer, fast-moving team.");
        assert_eq!(required_years(&senior, DEFAULT_REQUIRED_YEARS), 5.0);

        let junior = posting_with_description("Entry-level role for recent graduates.");
        assert_eq!(required_years(&junior, DEFAULT_REQUIRED_YEARS), 1.0);

        let unstated = posting_with_description("Backend engineer for our platform team.");
        assert_eq!(
            required_years(&unstated, DEFAULT_REQUIRED_YEARS),
            DEFAULT_REQUIRED_YEARS
        );
    }

    #[test]
    fn test_leadership_does_not_trigger_senior_heuristic() {
        let posting = posting_with_description("Show leadership and ownership.");
        assert_eq!(
            required_years(&posting, DEFAULT_REQUIRED_YEARS),
            DEFAULT_REQUIRED_YEARS
        );
    }

    #[test]
    fn test_meeting_requirement_scores_full() {
        let history = vec![job(ymd(2018, 1, 1), Some(ymd(2024, 1, 1)))];
        let mut posting = posting_with_description("");
        posting.min_experience_years = Some(5.0);

        let eval = evaluate_experience(&history, &posting, ymd(2025, 1, 1), 3.0);
        assert_eq!(eval.score, 100);
        assert!(eval.detail.contains("requirement met"));
    }

    #[test]
    fn test_below_requirement_decays_linearly() {
        let history = vec![job(ymd(2023, 1, 1), Some(ymd(2024, 1, 1)))]; // ~1 year
        let mut posting = posting_with_description("");
        posting.min_experience_years = Some(4.0);

        let eval = evaluate_experience(&history, &posting, ymd(2025, 1, 1), 3.0);
        assert_eq!(eval.score, 25);
        assert!(eval.detail.contains("below requirement"));
    }

    #[test]
    fn test_zero_requirement_scores_full() {
        let mut posting = posting_with_description("");
        posting.min_experience_years = Some(0.0);

        let eval = evaluate_experience(&[], &posting, ymd(2025, 1, 1), 3.0);
        assert_eq!(eval.score, 100);
    }

    #[test]
    fn test_no_history_against_requirement_is_zero() {
        let mut posting = posting_with_description("");
        posting.min_experience_years = Some(3.0);

        let eval = evaluate_experience(&[], &posting, ymd(2025, 1, 1), 3.0);
        assert_eq!(eval.score, 0);
    }
}
