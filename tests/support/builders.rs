// tests/support/builders.rs
use quill_blog::application::dto::{ArticleForm, CommentForm, RegistrationForm};

pub use super::mocks::security::{actor, admin_actor, user_actor};

pub fn article_form(title: &str, content: &str) -> ArticleForm {
    ArticleForm {
        title: title.into(),
        content: content.into(),
    }
}

pub fn comment_form(content: &str) -> CommentForm {
    CommentForm {
        content: content.into(),
    }
}

pub fn registration_form(email: &str, pseudonym: &str) -> RegistrationForm {
    RegistrationForm {
        email: email.into(),
        pseudonym: pseudonym.into(),
        plain_password: "123456.Admin".into(),
        captcha_response: Some("ok".into()),
    }
}
