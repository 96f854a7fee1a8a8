use crate::api::HistorySource;
use crate::auth::{require_auth, ApiToken};
use crate::models::{ApiResponse, MoversResponse};
use crate::movers::MoversService;
use axum::{
    extract::State,
    http::{header, Method},
    middleware,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success("Market movers service is healthy".to_string()))
}

/// Always answers 200; upstream trouble shows up inside `all_stocks`.
pub async fn get_movers<S>(State(movers): State<Arc<MoversService<S>>>) -> Json<MoversResponse>
where
    S: HistorySource + Send + Sync + 'static,
{
    let response = movers.summarize_all().await;
    info!(
        "Movers ready: leader={}",
        response
            .top_5
            .first()
            .map(|s| s.symbol.as_str())
            .unwrap_or("none")
    );
    Json(response)
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn router<S>(movers: MoversService<S>, token: ApiToken) -> Router
where
    S: HistorySource + Send + Sync + 'static,
{
    Router::new()
        .route("/stock", get(get_movers::<S>).post(get_movers::<S>))
        .route_layer(middleware::from_fn_with_state(token, require_auth))
        .route("/health", get(health_check))
        .layer(cors_layer())
        .with_state(Arc::new(movers))
}
