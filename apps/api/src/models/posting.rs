//! Job posting domain types and their persistence row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting as the scorer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub work_arrangement: WorkArrangement,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    /// Explicit requirement; when absent the scorer infers one from the
    /// description.
    #[serde(default)]
    pub min_experience_years: Option<f64>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkArrangement {
    Remote,
    Hybrid,
    OnSite,
    #[default]
    Unspecified,
}

/// Persistence row for `job_postings`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPostingRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub work_arrangement: String,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub min_experience_years: Option<f64>,
    pub description: String,
    pub posted_at: DateTime<Utc>,
}

impl JobPostingRow {
    pub fn to_posting(&self) -> JobPosting {
        JobPosting {
            required_skills: self.required_skills.clone(),
            preferred_skills: self.preferred_skills.clone(),
            work_arrangement: parse_arrangement(&self.work_arrangement),
            location: self.location.clone(),
            industry: self.industry.clone(),
            min_experience_years: self.min_experience_years,
            description: self.description.clone(),
        }
    }
}

/// Scraped rows carry free-form arrangement strings; anything unrecognized is
/// unspecified.
fn parse_arrangement(raw: &str) -> WorkArrangement {
    match raw.trim().to_lowercase().as_str() {
        "remote" => WorkArrangement::Remote,
        "hybrid" => WorkArrangement::Hybrid,
        "on_site" | "onsite" | "on-site" => WorkArrangement::OnSite,
        _ => WorkArrangement::Unspecified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_deserializes_camel_case_wire_format() {
        let json = r#"{
            "requiredSkills": ["JavaScript", "React", "Node.js"],
            "preferredSkills": ["GraphQL"],
            "workArrangement": "remote",
            "location": "Austin",
            "industry": "Fintech",
            "minExperienceYears": 3,
            "description": "Build our web platform."
        }"#;

        let posting: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(posting.required_skills.len(), 3);
        assert_eq!(posting.work_arrangement, WorkArrangement::Remote);
        assert_eq!(posting.min_experience_years, Some(3.0));
    }

    #[test]
    fn test_empty_posting_uses_defaults() {
        let posting: JobPosting = serde_json::from_str("{}").unwrap();
        assert!(posting.required_skills.is_empty());
        assert_eq!(posting.work_arrangement, WorkArrangement::Unspecified);
        assert_eq!(posting.min_experience_years, None);
        assert!(posting.description.is_empty());
    }

    #[test]
    fn test_arrangement_serde_snake_case() {
        let parsed: WorkArrangement = serde_json::from_str(r#""on_site""#).unwrap();
        assert_eq!(parsed, WorkArrangement::OnSite);
        assert_eq!(
            serde_json::to_string(&WorkArrangement::Unspecified).unwrap(),
            r#""unspecified""#
        );
    }

    #[test]
    fn test_parse_arrangement_absorbs_free_form_values() {
        assert_eq!(parse_arrangement("Remote"), WorkArrangement::Remote);
        assert_eq!(parse_arrangement("on-site"), WorkArrangement::OnSite);
        assert_eq!(parse_arrangement("ONSITE"), WorkArrangement::OnSite);
        assert_eq!(
            parse_arrangement("4 days in office"),
            WorkArrangement::Unspecified
        );
    }
}
