use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{applications, companies, dashboard, jobs, probes};
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::home))
        .route("/company", get(companies::index))
        .route("/company/create", post(companies::create))
        .route("/company/search", get(companies::search))
        .route("/company/{id}", get(companies::detail).post(companies::update))
        .route("/company/{id}/delete", post(companies::remove))
        .route("/job", get(jobs::index))
        .route("/job/create", post(jobs::create))
        .route("/job/{id}", get(jobs::detail).post(jobs::update))
        .route("/job/{id}/delete", post(jobs::remove))
        .route("/application", get(applications::index))
        .route("/livez", get(probes::livez))
        .route("/healthz", get(probes::healthz))
        .with_state(state)
}
