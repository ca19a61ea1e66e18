use super::ActionResponse;
use crate::application::{
    commands::users::ChangePhotoCommand,
    dto::{ArticleSummaryDto, FlashMessage, PhotoUpload, UserProfileDto},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, multipart::MultipartError},
};
use bytes::Bytes;

const PHOTO_FIELD: &str = "photo";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Latest articles.", body = Vec<ArticleSummaryDto>)
    ),
    tag = "Main"
)]
pub async fn home(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .home()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Signed-in account.", body = UserProfileDto),
        (status = 401, description = "Not signed in.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Main"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/profile/photo",
    request_body(content_type = "multipart/form-data", description = "Image in a `photo` field"),
    responses(
        (status = 200, description = "Photo replaced.", body = ActionResponse),
        (status = 401, description = "Not signed in.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Missing, oversized or non-image file.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Main"
)]
pub async fn change_photo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<Json<ActionResponse>> {
    let upload = read_photo(multipart)
        .await
        .map_err(|err| HttpError::bad_request(err.body_text()))?;

    state
        .services
        .user_commands
        .change_photo(&user, ChangePhotoCommand { upload })
        .await
        .into_http()?;

    Ok(Json(
        ActionResponse::redirect("/profile")
            .with_flash(FlashMessage::success("Profile photo saved.")),
    ))
}

/// Takes the `photo` part of the form; a form without one yields an empty
/// upload that validation rejects.
async fn read_photo(mut multipart: Multipart) -> Result<PhotoUpload, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(PHOTO_FIELD) {
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await?;
            return Ok(PhotoUpload { content_type, data });
        }
    }
    Ok(PhotoUpload {
        content_type: None,
        data: Bytes::new(),
    })
}
