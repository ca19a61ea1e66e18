use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        ApplicationResult,
        dto::{ArticleSummaryDto, UserSummaryDto},
        ports::security::CsrfTokenManager,
    },
    domain::{
        article::{Article, ArticleReadRepository},
        comment::CommentRepository,
        user::{UserId, UserRepository},
    },
};

pub struct ArticleQueryService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) csrf: Arc<dyn CsrfTokenManager>,
    pub(super) home_count: u32,
}

impl ArticleQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
        csrf: Arc<dyn CsrfTokenManager>,
        home_count: u32,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            user_repo,
            csrf,
            home_count,
        }
    }

    /// Resolves every distinct author in one repository call.
    pub(super) async fn authors(
        &self,
        ids: impl IntoIterator<Item = UserId>,
    ) -> ApplicationResult<HashMap<UserId, UserSummaryDto>> {
        let mut ids: Vec<UserId> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = self.user_repo.find_by_ids(&ids).await?;
        Ok(users
            .iter()
            .map(|user| (user.id, UserSummaryDto::from(user)))
            .collect())
    }

    pub(super) async fn summarize(
        &self,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let authors = self.authors(articles.iter().map(|a| a.author_id)).await?;
        Ok(articles
            .into_iter()
            .map(|article| {
                let author = authors.get(&article.author_id).cloned();
                ArticleSummaryDto::new(article, author)
            })
            .collect())
    }
}
