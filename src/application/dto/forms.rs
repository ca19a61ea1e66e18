// src/application/dto/forms.rs
//! Plain form payloads and their validation. Each `validate` is pure and
//! reports every offending field at once.
use crate::application::commands::users::validate_password;
use crate::domain::{
    article::{ArticleContent, ArticleTitle},
    comment::CommentContent,
    errors::{DomainError, DomainResult},
    user::{Email, Pseudonym},
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Form field name, or `form` for errors not tied to a single field.
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Records a failed value-object construction against `field` and hands
    /// back the value when it succeeded.
    pub fn check<T>(&mut self, field: &str, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(DomainError::Validation(msg)) => {
                self.add(field, msg);
                None
            }
            Err(other) => {
                self.add(field, other.to_string());
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl ArticleForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.parse().map(|_| ())
    }

    pub fn parse(&self) -> Result<(ArticleTitle, ArticleContent), FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = errors.check("title", ArticleTitle::new(self.title.clone()));
        let content = errors.check("content", ArticleContent::new(self.content.clone()));
        match (title, content) {
            (Some(title), Some(content)) => Ok((title, content)),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentForm {
    #[serde(default)]
    pub content: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.parse().map(|_| ())
    }

    pub fn parse(&self) -> Result<CommentContent, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .check("content", CommentContent::new(self.content.clone()))
            .ok_or(errors)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RegistrationForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pseudonym: String,
    #[serde(default)]
    pub plain_password: String,
    #[serde(default, skip_serializing)]
    pub captcha_response: Option<String>,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.parse().map(|_| ())
    }

    pub fn parse(&self) -> Result<(Email, Pseudonym), FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = errors.check("email", Email::new(self.email.clone()));
        let pseudonym = errors.check("pseudonym", Pseudonym::new(self.pseudonym.clone()));
        if let Err(msg) = validate_password(&self.plain_password) {
            errors.add("plain_password", msg);
        }
        match (email, pseudonym) {
            (Some(email), Some(pseudonym)) if errors.is_empty() => Ok((email, pseudonym)),
            _ => Err(errors),
        }
    }
}

/// Image accepted as a profile photo.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl PhotoUpload {
    pub const ACCEPTED_TYPES: [(&'static str, &'static str); 3] = [
        ("image/jpeg", "jpg"),
        ("image/png", "png"),
        ("image/gif", "gif"),
    ];

    /// Returns the file extension matching the declared content type.
    pub fn validate(&self, max_bytes: usize) -> Result<&'static str, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.data.is_empty() {
            errors.add("photo", "please select a file");
        } else if self.data.len() > max_bytes {
            errors.add(
                "photo",
                format!("the file is too large (maximum {max_bytes} bytes)"),
            );
        }

        let extension = self.content_type.as_deref().and_then(|declared| {
            Self::ACCEPTED_TYPES
                .iter()
                .find(|(mime, _)| declared.eq_ignore_ascii_case(mime))
                .map(|(_, ext)| *ext)
        });
        if extension.is_none() {
            errors.add("photo", "the image must be a JPEG, PNG or GIF file");
        }

        match extension {
            Some(ext) if errors.is_empty() => Ok(ext),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_form_reports_every_invalid_field() {
        let form = ArticleForm {
            title: " ".into(),
            content: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has_field("title"));
        assert!(errors.has_field("content"));
    }

    #[test]
    fn article_form_parses_value_objects() {
        let form = ArticleForm {
            title: "Hello World!".into(),
            content: "Body".into(),
        };
        let (title, content) = form.parse().unwrap();
        assert_eq!(title.as_str(), "Hello World!");
        assert_eq!(content.as_str(), "Body");
    }

    #[test]
    fn comment_form_rejects_oversized_content() {
        let form = CommentForm {
            content: "x".repeat(CommentContent::MAX_CHARS + 1),
        };
        assert!(form.validate().unwrap_err().has_field("content"));
    }

    #[test]
    fn registration_form_checks_password_policy() {
        let mut form = RegistrationForm {
            email: "reader@example.org".into(),
            pseudonym: "Reader".into(),
            plain_password: "short".into(),
            captcha_response: None,
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has_field("plain_password"));
        assert!(!errors.has_field("email"));

        form.plain_password = "123456.Admin".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn photo_upload_requires_known_image_type() {
        let upload = PhotoUpload {
            content_type: Some("application/pdf".into()),
            data: Bytes::from_static(b"%PDF"),
        };
        assert!(upload.validate(1024).unwrap_err().has_field("photo"));

        let upload = PhotoUpload {
            content_type: Some("image/PNG".into()),
            data: Bytes::from_static(b"\x89PNG"),
        };
        assert_eq!(upload.validate(1024).unwrap(), "png");
    }

    #[test]
    fn photo_upload_respects_size_limit() {
        let upload = PhotoUpload {
            content_type: Some("image/jpeg".into()),
            data: Bytes::from(vec![0u8; 16]),
        };
        assert!(upload.validate(8).is_err());
        assert!(upload.validate(16).is_ok());
    }
}
