// src/presentation/http/controllers/auth.rs
use super::ActionResponse;
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand, RegistrationOutcome},
    dto::{AuthTokenDto, FlashMessage, RegistrationForm, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ClientIp, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegistrationForm,
    responses(
        (status = 200, description = "Account created, or redirect home when already signed in.", body = ActionResponse),
        (status = 422, description = "Invalid form, failed captcha or e-mail already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    ClientIp(remote_ip): ClientIp,
    Json(form): Json<RegistrationForm>,
) -> HttpResult<Json<ActionResponse>> {
    let command = RegisterUserCommand {
        form,
        remote_ip,
    };

    let outcome = state
        .services
        .user_commands
        .register(actor.0.as_ref(), command)
        .await
        .into_http()?;

    let response = match outcome {
        RegistrationOutcome::AlreadyAuthenticated => ActionResponse::redirect("/"),
        RegistrationOutcome::Registered(_) => ActionResponse::redirect("/login")
            .with_flash(FlashMessage::success("Your account has been created.")),
    };
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token for the account.", body = LoginResponse),
        (status = 401, description = "Unknown e-mail or wrong password.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}
