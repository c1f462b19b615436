//! Candidate profile domain types and their persistence row.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A candidate as the scorer sees them. Total experience years and industry
/// tags are derived from `work_history`, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_history: Vec<WorkExperience>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remote_preference: RemotePreference,
    #[serde(default)]
    pub excluded_locations: Vec<String>,
}

/// One position in the candidate's work history. `end_date = None` means the
/// position is current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub industry: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub accomplishments: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemotePreference {
    RemoteOnly,
    #[default]
    Flexible,
    OnSite,
}

/// Persistence row for `candidate_profiles`. Work history is stored as JSONB
/// and parsed at the edge.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub remote_preference: String,
    pub excluded_locations: Vec<String>,
    pub work_history: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRow {
    /// Converts the row into a domain profile. A malformed work-history
    /// payload is a data-integrity error, not a scoring error.
    pub fn into_profile(self) -> Result<CandidateProfile> {
        let work_history: Vec<WorkExperience> = serde_json::from_value(self.work_history)
            .with_context(|| format!("malformed work_history for profile {}", self.id))?;

        let remote_preference = match self.remote_preference.as_str() {
            "remote_only" => RemotePreference::RemoteOnly,
            "flexible" => RemotePreference::Flexible,
            "on_site" => RemotePreference::OnSite,
            other => bail!("unknown remote_preference '{other}' for profile {}", self.id),
        };

        Ok(CandidateProfile {
            skills: self.skills,
            work_history,
            location: self.location,
            remote_preference,
            excluded_locations: self.excluded_locations,
        })
    }
}
