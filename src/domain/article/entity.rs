// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub publication_date: DateTime<Utc>,
    pub author_id: UserId,
}

impl Article {
    /// Replaces the editable fields. Publication date and author are fixed at
    /// creation and never change here.
    pub fn revise(&mut self, title: ArticleTitle, slug: ArticleSlug, content: ArticleContent) {
        self.title = title;
        self.slug = slug;
        self.content = content;
    }

    pub fn matches_route(&self, slug: &str) -> bool {
        self.slug.as_str() == slug
    }

    /// Substring match on title or content, case-sensitive like SQL `LIKE`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.title.as_str().contains(needle) || self.content.as_str().contains(needle)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub publication_date: DateTime<Utc>,
    pub author_id: UserId,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            slug: article.slug.clone(),
            content: article.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("Title").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            content: ArticleContent::new("Some content").unwrap(),
            publication_date: Utc::now(),
            author_id: UserId::new(1).unwrap(),
        }
    }

    #[test]
    fn revise_keeps_publication_metadata() {
        let mut article = sample_article();
        let published = article.publication_date;
        article.revise(
            ArticleTitle::new("New title").unwrap(),
            ArticleSlug::new("new-title").unwrap(),
            ArticleContent::new("New content").unwrap(),
        );
        assert_eq!(article.title.as_str(), "New title");
        assert_eq!(article.slug.as_str(), "new-title");
        assert_eq!(article.content.as_str(), "New content");
        assert_eq!(article.publication_date, published);
        assert_eq!(article.author_id, UserId::new(1).unwrap());
    }

    #[test]
    fn contains_text_is_case_sensitive() {
        let article = sample_article();
        assert!(article.contains_text("Title"));
        assert!(article.contains_text("content"));
        assert!(!article.contains_text("TITLE"));
        assert!(article.contains_text(""));
    }
}
