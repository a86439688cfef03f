use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use geo_core::{AnalysisResult, AnalyzeRequest, Error, NewsFeed, NewsQuery};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

pub async fn get_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<NewsFeed>, ApiError> {
    let query = query.normalized();
    let feed = state.aggregator.feed(&query).await.map_err(ApiError::News)?;
    Ok(Json(feed))
}

pub async fn analyze_article(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected analysis body: {}", rejection);
        ApiError::Analysis(Error::InvalidInput(rejection.body_text()))
    })?;

    let analysis = state
        .analyzer
        .analyze(&request)
        .await
        .map_err(ApiError::Analysis)?;
    Ok(Json(analysis))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
