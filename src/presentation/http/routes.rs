// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{categories, pages},
    middleware::rate_limit::mutation_rate_limit,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

// Room for multipart framing around the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Router wiring that depends on deployment configuration.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub uploads_dir: PathBuf,
    pub upload_max_bytes: usize,
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let origins: Vec<HeaderValue> = options
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let mut mutations = Router::new()
        .route("/categories", post(categories::create_category))
        .route(
            "/categories/{category}",
            axum::routing::put(categories::update_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/categories/check-slug", post(categories::check_category_slug))
        .route("/pages", post(pages::create_page))
        .route(
            "/pages/{page}",
            axum::routing::put(pages::update_page)
                .patch(pages::update_page)
                .delete(pages::delete_page),
        )
        .route("/pages/check-slug", post(pages::check_page_slug))
        .route(
            "/pages/upload",
            post(pages::upload_image).layer(DefaultBodyLimit::max(
                options.upload_max_bytes + MULTIPART_OVERHEAD_BYTES,
            )),
        );
    if options.rate_limit {
        if let Some(limit) = mutation_rate_limit() {
            mutations = mutations.layer(limit);
        } else {
            tracing::warn!("rate limiter could not be configured, continuing without it");
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/categories", get(categories::list_categories))
        .route("/categories/{category}", get(categories::show_category))
        .route("/categories/{category}/edit", get(categories::edit_category))
        .route("/pages", get(pages::list_pages))
        .route("/pages/{page}", get(pages::show_page))
        .route("/pages/{page}/edit", get(pages::edit_page))
        .merge(mutations)
        .nest_service("/uploads", ServeDir::new(options.uploads_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
