// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, blog, comments, main},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Room for multipart boundaries and headers around the image itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState) -> Router {
    let photo_limit = state.photo_max_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/", get(main::home))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/profile", get(main::profile))
        .route(
            "/profile/photo",
            post(main::change_photo).layer(DefaultBodyLimit::max(photo_limit)),
        )
        .route(
            "/blog/new-article",
            get(blog::new_article_form).post(blog::create_article),
        )
        .route(
            "/blog/article/{id}/{slug}",
            get(blog::view_article).post(blog::post_comment),
        )
        .route("/blog/articles", get(blog::list_articles))
        .route("/blog/search", get(blog::search_articles))
        .route("/blog/article/delete/{id}", get(blog::delete_article))
        .route(
            "/blog/article/edit/{id}",
            get(blog::edit_article_form).post(blog::update_article),
        )
        .route("/blog/comment/delete/{id}", get(comments::delete_comment))
        .nest_service("/uploads/photos", ServeDir::new(&state.photo_directory))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&state.allowed_origins))
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
