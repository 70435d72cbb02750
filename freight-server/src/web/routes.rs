//! HTTP routes and handlers.
//!
//! The planning pipeline is synchronous (it may issue blocking
//! provider calls), so the plan handler runs it on the blocking thread
//! pool and keeps the async executor free.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use thiserror::Error;

use crate::factory::SegmentFactory;
use crate::network::{BuildError, NetworkBuilder};
use crate::optimizer::{MultimodalOptimizer, ScoringWeights};

use super::dto::{CityDto, PlanRequest, PlanResponse, RouteDto};
use super::state::AppState;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities", get(list_cities))
        .route("/api/plan", post(plan))
        .with_state(state)
}

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("no routes found from {origin} to {destination}")]
    NoRoutes { origin: String, destination: String },

    #[error("internal error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Build(BuildError::UnknownCity(_)) => StatusCode::NOT_FOUND,
            AppError::Build(BuildError::SameCity(_)) => StatusCode::BAD_REQUEST,
            AppError::NoRoutes { .. } => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn list_cities(State(state): State<AppState>) -> Json<Vec<CityDto>> {
    let cities = state.directory.records().map(CityDto::from).collect();
    Json(cities)
}

async fn plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let response = tokio::task::spawn_blocking(move || plan_blocking(state, request))
        .await
        .map_err(|error| {
            tracing::error!(%error, "plan task panicked");
            AppError::Internal
        })??;
    Ok(Json(response))
}

/// The full planning pipeline: build, optimize, adjust, simulate.
fn plan_blocking(state: AppState, request: PlanRequest) -> Result<PlanResponse, AppError> {
    tracing::info!(
        origin = %request.origin,
        destination = %request.destination,
        "planning freight routes"
    );

    let weights = ScoringWeights::from_preferences(
        request.cost_priority,
        request.time_priority,
        request.eco_priority,
    );

    let factory = SegmentFactory::new(state.provider.clone());
    let builder = NetworkBuilder::new(&state.directory, &factory);
    let network = builder.build(&request.origin, &request.destination)?;

    let optimizer = MultimodalOptimizer::new(weights);
    let mut routes = optimizer.find_optimal_routes(&network, &request.origin, &request.destination);
    if routes.is_empty() {
        return Err(AppError::NoRoutes {
            origin: request.origin,
            destination: request.destination,
        });
    }

    request.adjustment.apply(&mut routes);

    let simulated = request.disruptions.is_active().then(|| {
        let mut simulated = request.disruptions.simulate(&routes);
        request.adjustment.apply(&mut simulated);
        simulated
            .iter()
            .map(|(_, route)| RouteDto::from(route))
            .collect()
    });

    Ok(PlanResponse {
        origin: request.origin,
        destination: request.destination,
        routes: routes.iter().map(|(_, route)| RouteDto::from(route)).collect(),
        simulated,
    })
}
