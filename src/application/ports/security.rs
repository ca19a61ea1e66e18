// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use crate::domain::{article::ArticleId, comment::CommentId};
use async_trait::async_trait;
use std::fmt;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}

/// The mutation a CSRF token is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfIntent {
    DeleteArticle(ArticleId),
    DeleteComment(CommentId),
}

impl fmt::Display for CsrfIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsrfIntent::DeleteArticle(id) => write!(f, "blog_article_delete_{id}"),
            CsrfIntent::DeleteComment(id) => write!(f, "blog_comment_delete_{id}"),
        }
    }
}

/// Issues and checks per-action tokens proving a mutation came from a view the
/// application rendered for the same caller.
pub trait CsrfTokenManager: Send + Sync {
    fn issue(&self, intent: CsrfIntent, actor: &AuthenticatedUser) -> String;
    fn verify(&self, intent: CsrfIntent, actor: &AuthenticatedUser, token: &str) -> bool;
}
