// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A comment always belongs to exactly one article and one author.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentContent,
    pub publication_date: DateTime<Utc>,
    pub author_id: UserId,
    pub article_id: ArticleId,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: CommentContent,
    pub publication_date: DateTime<Utc>,
    pub author_id: UserId,
    pub article_id: ArticleId,
}
