// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use quill_blog::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use quill_blog::domain::user::{Roles, UserId};

use super::time::fixed_now;

/// Bearer token resolving to user 1, an administrator.
pub const ADMIN_TOKEN: &str = "admin-token";
/// Bearer token resolving to user 2, a plain reader.
pub const USER_TOKEN: &str = "user-token";

pub fn actor(id: i64, pseudonym: &str, roles: Roles) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        pseudonym: pseudonym.into(),
        capabilities: roles.capabilities(),
        roles,
        issued_at: now,
        expires_at: now + Duration::hours(1),
        session_id: Some(format!("session-{id}")),
    }
}

pub fn admin_actor() -> AuthenticatedUser {
    actor(1, "Admin", Roles::admin())
}

pub fn user_actor() -> AuthenticatedUser {
    actor(2, "Reader", Roles::user())
}

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: format!("token-for-{}", i64::from(subject.user_id)),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(admin_actor()),
            USER_TOKEN => Ok(user_actor()),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

/// Stores `hash::<password>` and checks against it.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
