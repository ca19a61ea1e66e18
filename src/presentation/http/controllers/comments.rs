use super::{ActionResponse, article_path, blog::CsrfParams};
use crate::application::{commands::comments::DeleteCommentCommand, dto::FlashMessage};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

#[utoipa::path(
    get,
    path = "/blog/comment/delete/{id}",
    params(("id" = i64, Path), CsrfParams),
    responses(
        (status = 200, description = "Back to the parent article, with a flash telling whether the comment was deleted.", body = ActionResponse),
        (status = 403, description = "Missing comments:delete.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Query(params): Query<CsrfParams>,
) -> HttpResult<Json<ActionResponse>> {
    let deletion = state
        .services
        .comment_commands
        .delete_comment(
            &user,
            DeleteCommentCommand {
                id,
                csrf_token: params.csrf_token.unwrap_or_default(),
            },
        )
        .await
        .into_http()?;

    let flash = if deletion.outcome.is_deleted() {
        FlashMessage::success("The comment has been deleted.")
    } else {
        FlashMessage::error("Invalid security token, please try again.")
    };
    let back = article_path(deletion.article_id.into(), deletion.article_slug.as_str());
    Ok(Json(ActionResponse::redirect(back).with_flash(flash)))
}
