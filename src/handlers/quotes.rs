use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{ApiError, QUOTES_ERROR, TAG_ERROR, run_isolated};
use crate::models::Quote;
use crate::state::AppState;

const DEFAULT_COUNT: usize = 1;

#[derive(Deserialize, Debug, Default)]
pub struct CountParams {
    count: Option<String>,
}

// Leading-integer parse of ?count=. Missing, garbage, zero or negative -> 1.
pub fn parse_count(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_COUNT;
    };
    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if negative || digits.is_empty() {
        return DEFAULT_COUNT;
    }
    match digits.parse::<usize>() {
        Ok(0) => DEFAULT_COUNT,
        Ok(n) => n,
        // only digits left, so this is overflow
        Err(_) => usize::MAX,
    }
}

fn count_from(params: Result<Query<CountParams>, QueryRejection>) -> usize {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    parse_count(params.count.as_deref())
}

// GET /api/quotes?count=5
pub async fn quotes_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CountParams>, QueryRejection>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let count = count_from(params);
    let quotes = run_isolated(QUOTES_ERROR, async move {
        state.quotes.get_quotes(count).await
    })
    .await?;
    Ok(Json(quotes))
}

// GET /api/quotes/tag/{tag}?count=5
pub async fn quotes_by_tag_handler(
    State(state): State<Arc<AppState>>,
    Path(tag): Path<String>,
    params: Result<Query<CountParams>, QueryRejection>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let count = count_from(params);
    let quotes = run_isolated(TAG_ERROR, async move {
        state.quotes.get_quotes_by_tag(&tag, count).await
    })
    .await?;
    Ok(Json(quotes))
}
