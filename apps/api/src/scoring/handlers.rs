//! Axum route handlers for the Compatibility API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::posting::{JobPosting, JobPostingRow};
use crate::models::profile::{CandidateProfile, ProfileRow};
use crate::scoring::{CompatibilityResult, RecommendationCategory};
use crate::state::AppState;

/// Upper bound on batch size; a frontend page never needs more, and an
/// unbounded batch is an easy way to stall a request worker.
const MAX_BATCH_POSTINGS: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub profile: CandidateProfile,
    pub posting: JobPosting,
}

#[derive(Debug, Deserialize)]
pub struct BatchScoreRequest {
    pub profile: CandidateProfile,
    pub postings: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct BatchScoreResponse {
    /// One result per posting, in request order.
    pub results: Vec<CompatibilityResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPosting {
    pub posting_id: Uuid,
    pub title: String,
    pub company: String,
    pub result: CompatibilityResult,
}

#[derive(Debug, Serialize)]
pub struct ProfileMatchesResponse {
    pub matches: Vec<ScoredPosting>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/compatibility/score
///
/// Scores one inline (profile, posting) pair and returns the full result.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<CompatibilityResult>, AppError> {
    let result = state.scorer.score(&request.profile, &request.posting)?;
    Ok(Json(result))
}

/// POST /api/v1/compatibility/score/batch
///
/// Scores one profile against many postings. Results come back in request
/// order — the caller renders them as a stable list.
pub async fn handle_score_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchScoreRequest>,
) -> Result<Json<BatchScoreResponse>, AppError> {
    if request.postings.len() > MAX_BATCH_POSTINGS {
        return Err(AppError::Validation(format!(
            "batch size {} exceeds the maximum of {MAX_BATCH_POSTINGS}",
            request.postings.len()
        )));
    }

    let results = state
        .scorer
        .score_batch(&request.profile, &request.postings)?;

    Ok(Json(BatchScoreResponse { results }))
}

/// GET /api/v1/profiles/:id/matches
///
/// Loads the profile and all stored postings, recomputes every score, and
/// refreshes the snapshot cache. Snapshots are never read back as a source
/// of truth; staleness is resolved by this recompute-on-view.
pub async fn handle_profile_matches(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<ProfileMatchesResponse>, AppError> {
    let row = sqlx::query_as::<_, ProfileRow>("SELECT * FROM candidate_profiles WHERE id = $1")
        .bind(profile_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {profile_id} not found")))?;
    let profile = row.into_profile().map_err(AppError::Internal)?;

    let posting_rows = sqlx::query_as::<_, JobPostingRow>(
        "SELECT * FROM job_postings ORDER BY posted_at DESC",
    )
    .fetch_all(&state.db)
    .await?;

    info!(
        profile_id = %profile_id,
        postings = posting_rows.len(),
        "refreshing compatibility snapshots"
    );

    let mut matches = Vec::with_capacity(posting_rows.len());
    for posting_row in posting_rows {
        let result = state.scorer.score(&profile, &posting_row.to_posting())?;
        upsert_snapshot(&state, profile_id, posting_row.id, &result).await?;

        matches.push(ScoredPosting {
            posting_id: posting_row.id,
            title: posting_row.title,
            company: posting_row.company,
            result,
        });
    }

    Ok(Json(ProfileMatchesResponse { matches }))
}

/// Writes one (profile, posting) snapshot, overwriting any previous one.
async fn upsert_snapshot(
    state: &AppState,
    profile_id: Uuid,
    posting_id: Uuid,
    result: &CompatibilityResult,
) -> Result<(), AppError> {
    let snapshot = serde_json::to_value(result).map_err(anyhow::Error::from)?;

    sqlx::query(
        r#"
        INSERT INTO compatibility_snapshots
            (profile_id, posting_id, overall_score, category, breakdown, computed_at)
        VALUES ($1, $2, $3, $4, $5, NOW())
        ON CONFLICT (profile_id, posting_id) DO UPDATE SET
            overall_score = EXCLUDED.overall_score,
            category = EXCLUDED.category,
            breakdown = EXCLUDED.breakdown,
            computed_at = EXCLUDED.computed_at
        "#,
    )
    .bind(profile_id)
    .bind(posting_id)
    .bind(result.overall_score as i16)
    .bind(category_label(result.recommendation_category))
    .bind(snapshot)
    .execute(&state.db)
    .await?;

    Ok(())
}

fn category_label(category: RecommendationCategory) -> &'static str {
    match category {
        RecommendationCategory::StrongMatch => "strong_match",
        RecommendationCategory::GoodMatch => "good_match",
        RecommendationCategory::PossibleMatch => "possible_match",
        RecommendationCategory::WeakMatch => "weak_match",
        RecommendationCategory::NotRecommended => "not_recommended",
    }
}
