// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            captcha::CaptchaVerifier,
            security::{CsrfTokenManager, PasswordHasher, TokenManager},
            storage::PhotoStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{articles::ArticleQueryService, users::UserQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::CommentRepository,
        user::UserRepository,
    },
};

/// Repositories the services are wired against.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

/// Tunables read from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub home_article_count: u32,
    pub photo_max_bytes: usize,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        repositories: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        csrf: Arc<dyn CsrfTokenManager>,
        captcha: Arc<dyn CaptchaVerifier>,
        photo_storage: Arc<dyn PhotoStorage>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        settings: ServiceSettings,
    ) -> Self {
        let Repositories {
            users,
            article_writes,
            article_reads,
            comments,
        } = repositories;

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&users),
            password_hasher,
            Arc::clone(&token_manager),
            captcha,
            photo_storage,
            Arc::clone(&clock),
            settings.photo_max_bytes,
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            article_writes,
            Arc::clone(&article_reads),
            slugger,
            Arc::clone(&csrf),
            Arc::clone(&clock),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comments),
            Arc::clone(&article_reads),
            Arc::clone(&csrf),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            article_reads,
            comments,
            Arc::clone(&users),
            csrf,
            settings.home_article_count,
        ));
        let user_queries = Arc::new(UserQueryService::new(users, clock));

        Self {
            user_commands,
            article_commands,
            comment_commands,
            article_queries,
            user_queries,
            token_manager,
        }
    }

    /// Resolves a raw bearer token into the caller identity.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
