//! HTTP endpoint handlers. These are thin wrappers that forward to the advisor.
//! Each handler is instrumented and logs basic result info.

use std::sync::Arc;
use axum::{extract::State, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::advisor::parse_problem;
use crate::domain::Category;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info")]
pub async fn http_get_categories() -> impl IntoResponse {
  Json(CategoriesOut { categories: Category::ALL.to_vec() })
}

#[instrument(level = "info", skip(body), fields(problem_len = body.problem.len()))]
pub async fn http_post_classify(Json(body): Json<ProblemIn>) -> impl IntoResponse {
  let parsed = parse_problem(&body.problem);
  info!(target: "advisor", category = %parsed.category, "HTTP classify served");
  Json(ClassifyOut::from(parsed))
}

#[instrument(level = "info", skip(state, body), fields(problem_len = body.problem.len()))]
pub async fn http_post_advise(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ProblemIn>,
) -> impl IntoResponse {
  let advice = state.advisor.advise(&body.problem);
  info!(target: "advisor", category = %advice.category, links = advice.search_urls.len(), "HTTP advice served");
  Json(advice)
}
