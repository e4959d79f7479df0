use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::GatewaySchema;

/// Path the GraphQL endpoint is served on
pub const GRAPHQL_PATH: &str = "/graphql";

/// Static facts reported by `/status`
#[derive(Debug, Clone, Serialize)]
pub struct GatewayStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
    pub order_service_url: String,
}

impl GatewayStatus {
    pub fn new(order_service_url: impl Into<String>) -> Self {
        Self {
            status: "GraphQL gateway is running",
            version: env!("CARGO_PKG_VERSION"),
            started_at: Utc::now(),
            order_service_url: order_service_url.into(),
        }
    }
}

#[derive(Clone)]
struct AppState {
    schema: GatewaySchema,
    status: Arc<GatewayStatus>,
}

/// Routes served by the gateway
pub fn router(schema: GatewaySchema, gateway_status: GatewayStatus) -> Router {
    let state = AppState { schema, status: Arc::new(gateway_status) };

    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .route("/status", get(status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn status(State(state): State<AppState>) -> Json<GatewayStatus> {
    Json(state.status.as_ref().clone())
}
