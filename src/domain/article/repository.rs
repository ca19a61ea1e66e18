use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;

/// Filter applied to article listings. `None` matches every article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSearch {
    pub text: Option<String>,
}

impl ArticleSearch {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn containing(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            text: if text.is_empty() { None } else { Some(text) },
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.text
            .as_deref()
            .is_none_or(|needle| article.contains_text(needle))
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Removes the article together with its comments.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Articles ordered by publication date, newest first, ties broken by id
    /// descending.
    async fn list_page(
        &self,
        search: &ArticleSearch,
        page: PageRequest,
    ) -> DomainResult<Page<Article>>;
    async fn latest(&self, limit: u32) -> DomainResult<Vec<Article>>;
}
