use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use ns_core::{Article, Digest, Error, Summary};
use ns_sources::cli::validate_limit;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

const DEFAULT_LIMIT: usize = 10;
const DEFAULT_MAX_SENTENCES: usize = 3;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub time: DateTime<Utc>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        time: Utc::now(),
    })
}

#[derive(Debug, Deserialize)]
pub struct TopNewsQuery {
    pub country: Option<String>,
    pub limit: Option<usize>,
}

pub async fn top_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopNewsQuery>,
) -> ApiResult<Vec<Article>> {
    let limit = validate_limit(query.limit.unwrap_or(DEFAULT_LIMIT))?;
    let country = query
        .country
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| state.default_country.clone());

    let articles = state.source.fetch_top_headlines(&country, limit).await?;
    Ok(Json(articles))
}

fn default_max_sentences() -> usize {
    DEFAULT_MAX_SENTENCES
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> ApiResult<Summary> {
    let summary = state
        .summarizer
        .summarize_titled(&request.text, request.max_sentences)
        .await?;
    Ok(Json(summary))
}

/// `today` builds the digest when missing; any other date is read only.
pub async fn digest(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> ApiResult<Digest> {
    if date == "today" {
        return Ok(Json(state.digests.today().await?));
    }
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| Error::InvalidInput("Invalid date format, expected YYYY-MM-DD".to_string()))?;
    Ok(Json(state.digests.get(date).await?))
}
