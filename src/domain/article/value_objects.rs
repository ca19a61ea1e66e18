use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub const MAX_CHARS: usize = 150;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > Self::MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "title cannot exceed {} characters",
                Self::MAX_CHARS
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

/// Lowercase, URL-safe identifier derived from an article title. Two articles
/// may share a slug; routing always pairs it with the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    /// Width of the `articles.slug` column.
    pub const MAX_BYTES: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > Self::MAX_BYTES {
            return Err(DomainError::Validation(format!(
                "slug cannot exceed {} bytes",
                Self::MAX_BYTES
            )));
        }
        let well_formed = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !well_formed || value.starts_with('-') || value.ends_with('-') {
            return Err(DomainError::Validation(format!(
                "slug '{value}' is not url-safe"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub const MAX_CHARS: usize = 20_000;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        if value.chars().count() > Self::MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "content cannot exceed {} characters",
                Self::MAX_CHARS
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_must_be_url_safe() {
        assert!(ArticleSlug::new("hello-world").is_ok());
        assert!(ArticleSlug::new("Hello-World").is_err());
        assert!(ArticleSlug::new("hello world").is_err());
        assert!(ArticleSlug::new("-hello").is_err());
        assert!(ArticleSlug::new("").is_err());
    }

    #[test]
    fn slug_fits_the_column() {
        assert!(ArticleSlug::new("a".repeat(ArticleSlug::MAX_BYTES)).is_ok());
        assert!(ArticleSlug::new("a".repeat(ArticleSlug::MAX_BYTES + 1)).is_err());
    }

    #[test]
    fn title_length_is_bounded() {
        assert!(ArticleTitle::new("a".repeat(ArticleTitle::MAX_CHARS)).is_ok());
        assert!(ArticleTitle::new("a".repeat(ArticleTitle::MAX_CHARS + 1)).is_err());
        assert!(ArticleTitle::new("   ").is_err());
    }

    #[test]
    fn article_id_must_be_positive() {
        assert!(ArticleId::new(0).is_err());
        assert_eq!(i64::from(ArticleId::new(7).unwrap()), 7);
    }
}
