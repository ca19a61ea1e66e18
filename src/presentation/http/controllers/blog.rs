// src/presentation/http/controllers/blog.rs
use super::{ActionResponse, article_path};
use crate::application::{
    commands::{
        articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
        comments::AddCommentCommand,
    },
    error::ApplicationError,
    dto::{
        ArticleForm, ArticleSummaryDto, ArticleViewDto, CommentDto, CommentForm, FlashMessage,
        PageDto,
    },
    queries::articles::{
        ArticleEditView, ListArticlesQuery, SearchArticlesQuery, ViewArticleQuery,
    },
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ListingParams, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CsrfParams {
    #[serde(default)]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentPostedResponse {
    #[serde(flatten)]
    pub action: ActionResponse,
    pub comment: CommentDto,
    /// Blank form ready for the next comment.
    pub comment_form: CommentForm,
}

#[utoipa::path(
    get,
    path = "/blog/new-article",
    responses(
        (status = 200, description = "Blank article form.", body = ArticleForm),
        (status = 401, description = "Not signed in.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing articles:create.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn new_article_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ArticleForm>> {
    state
        .services
        .article_queries
        .new_article_form(&user)
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/blog/new-article",
    request_body = ArticleForm,
    responses(
        (status = 200, description = "Article published.", body = ActionResponse),
        (status = 403, description = "Missing articles:create.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid form.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(form): Json<ArticleForm>,
) -> HttpResult<Json<ActionResponse>> {
    let article = state
        .services
        .article_commands
        .create_article(&user, CreateArticleCommand { form })
        .await
        .into_http()?;

    Ok(Json(
        ActionResponse::redirect(article_path(article.id, &article.slug))
            .with_flash(FlashMessage::success("Article published.")),
    ))
}

#[utoipa::path(
    get,
    path = "/blog/article/{id}/{slug}",
    params(("id" = i64, Path), ("slug" = String, Path)),
    responses(
        (status = 200, description = "Article with its comments.", body = ArticleViewDto),
        (status = 404, description = "Unknown id or slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn view_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path((id, slug)): Path<(i64, String)>,
) -> HttpResult<Json<ArticleViewDto>> {
    state
        .services
        .article_queries
        .view_article(actor.0.as_ref(), ViewArticleQuery { id, slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/blog/article/{id}/{slug}",
    params(("id" = i64, Path), ("slug" = String, Path)),
    request_body = CommentForm,
    responses(
        (status = 200, description = "Comment published.", body = CommentPostedResponse),
        (status = 401, description = "Not signed in.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown id or slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid form.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn post_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((id, slug)): Path<(i64, String)>,
    Json(form): Json<CommentForm>,
) -> HttpResult<Json<CommentPostedResponse>> {
    let added = state
        .services
        .comment_commands
        .add_comment(
            &user,
            AddCommentCommand {
                article_id: id,
                slug: slug.clone(),
                form,
            },
        )
        .await
        .into_http()?;

    Ok(Json(CommentPostedResponse {
        action: ActionResponse::redirect(article_path(id, &slug))
            .with_flash(FlashMessage::success("Your comment has been published.")),
        comment: added.comment,
        comment_form: added.next_form,
    }))
}

#[utoipa::path(
    get,
    path = "/blog/articles",
    params(("page" = Option<i64>, Query, description = "Page number, starting at 1")),
    responses(
        (status = 200, description = "One page of articles, newest first.", body = PageDto<ArticleSummaryDto>),
        (status = 406, description = "Invalid page number.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    params: ListingParams,
) -> HttpResult<Json<PageDto<ArticleSummaryDto>>> {
    let page = params.page().into_http()?;
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/blog/search",
    params(
        ("s" = Option<String>, Query, description = "Text looked up in titles and contents"),
        ("page" = Option<i64>, Query, description = "Page number, starting at 1")
    ),
    responses(
        (status = 200, description = "One page of matching articles, newest first.", body = PageDto<ArticleSummaryDto>),
        (status = 404, description = "Invalid page number.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    params: ListingParams,
) -> HttpResult<Json<PageDto<ArticleSummaryDto>>> {
    let not_found = |err: ApplicationError| HttpError::with_invalid_page_status(err, StatusCode::NOT_FOUND);
    let page = params.page().map_err(not_found)?;
    state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery {
            text: params.search_text().to_string(),
            page,
        })
        .await
        .map(Json)
        .map_err(not_found)
}

#[utoipa::path(
    get,
    path = "/blog/article/delete/{id}",
    params(("id" = i64, Path), CsrfParams),
    responses(
        (status = 200, description = "Deleted, or rejected with an error flash when the token is invalid.", body = ActionResponse),
        (status = 403, description = "Missing articles:delete.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Query(params): Query<CsrfParams>,
) -> HttpResult<Json<ActionResponse>> {
    let outcome = state
        .services
        .article_commands
        .delete_article(
            &user,
            DeleteArticleCommand {
                id,
                csrf_token: params.csrf_token.unwrap_or_default(),
            },
        )
        .await
        .into_http()?;

    let flash = if outcome.is_deleted() {
        FlashMessage::success("The article has been deleted.")
    } else {
        FlashMessage::error("Invalid security token, please try again.")
    };
    Ok(Json(ActionResponse::redirect("/blog/articles").with_flash(flash)))
}

#[utoipa::path(
    get,
    path = "/blog/article/edit/{id}",
    params(("id" = i64, Path)),
    responses(
        (status = 200, description = "Form prefilled with the article.", body = ArticleEditView),
        (status = 403, description = "Missing articles:update.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn edit_article_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleEditView>> {
    state
        .services
        .article_queries
        .edit_form(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/blog/article/edit/{id}",
    params(("id" = i64, Path)),
    request_body = ArticleForm,
    responses(
        (status = 200, description = "Article updated.", body = ActionResponse),
        (status = 403, description = "Missing articles:update.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid form.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(form): Json<ArticleForm>,
) -> HttpResult<Json<ActionResponse>> {
    let article = state
        .services
        .article_commands
        .update_article(&user, UpdateArticleCommand { id, form })
        .await
        .into_http()?;

    Ok(Json(
        ActionResponse::redirect(article_path(article.id, &article.slug))
            .with_flash(FlashMessage::success("The article has been updated.")),
    ))
}
