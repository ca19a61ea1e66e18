use crate::domain::{article::Article, comment::Comment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{forms::CommentForm, users::UserSummaryDto};

/// Number of words kept in listing excerpts.
pub const EXCERPT_WORDS: usize = 30;

/// Keeps the first `words` space-separated words of `text`, appending `...`
/// when something was cut.
pub fn excerpt(text: &str, words: usize) -> String {
    let mut parts = text.splitn(words + 1, ' ');
    let kept: Vec<&str> = parts.by_ref().take(words).collect();
    if parts.next().is_some() {
        format!("{}...", kept.join(" "))
    } else {
        text.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub publication_date: DateTime<Utc>,
    pub author_id: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            content: article.content.into_inner(),
            publication_date: article.publication_date,
            author_id: article.author_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub publication_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<UserSummaryDto>,
}

impl ArticleSummaryDto {
    pub fn new(article: Article, author: Option<UserSummaryDto>) -> Self {
        Self {
            id: article.id.into(),
            excerpt: excerpt(article.content.as_str(), EXCERPT_WORDS),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            publication_date: article.publication_date,
            author,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub content: String,
    pub publication_date: DateTime<Utc>,
    pub author_id: i64,
    pub article_id: i64,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            content: comment.content.into_inner(),
            publication_date: comment.publication_date,
            author_id: comment.author_id.into(),
            article_id: comment.article_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentViewDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<UserSummaryDto>,
    /// Present only for callers allowed to delete the comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_token: Option<String>,
}

/// Everything the article page needs: the article, its author, its comments
/// and, for authenticated callers, a blank comment form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleViewDto {
    pub article: ArticleDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<UserSummaryDto>,
    pub comments: Vec<CommentViewDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_form: Option<CommentForm>,
}
