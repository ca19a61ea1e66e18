// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::main::home,
        crate::presentation::http::controllers::main::profile,
        crate::presentation::http::controllers::main::change_photo,
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::blog::new_article_form,
        crate::presentation::http::controllers::blog::create_article,
        crate::presentation::http::controllers::blog::view_article,
        crate::presentation::http::controllers::blog::post_comment,
        crate::presentation::http::controllers::blog::list_articles,
        crate::presentation::http::controllers::blog::search_articles,
        crate::presentation::http::controllers::blog::delete_article,
        crate::presentation::http::controllers::blog::edit_article_form,
        crate::presentation::http::controllers::blog::update_article,
        crate::presentation::http::controllers::comments::delete_comment,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::ActionResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::blog::CommentPostedResponse,
            crate::application::dto::ArticleForm,
            crate::application::dto::CommentForm,
            crate::application::dto::RegistrationForm,
            crate::application::dto::FieldError,
            crate::application::dto::FlashMessage,
            crate::application::dto::FlashLevel,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::ArticleViewDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentViewDto,
            crate::application::dto::PageDto<crate::application::dto::ArticleSummaryDto>,
            crate::application::dto::UserDto,
            crate::application::dto::UserSummaryDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::CapabilityView,
            crate::application::queries::articles::ArticleEditView
        )
    ),
    tags(
        (name = "Auth", description = "Registration and sign-in"),
        (name = "Main", description = "Home page and profile"),
        (name = "Blog", description = "Articles, comments, listing and search"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Quill Blog API",
        description = "Articles, comments, search and pagination",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
