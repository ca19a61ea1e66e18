// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod blog;
pub mod comments;
pub mod main;

use crate::application::dto::FlashMessage;
use serde::Serialize;
use utoipa::ToSchema;

/// Response of a mutation: where the client should go next and the one-time
/// messages to show there.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActionResponse {
    pub redirect_to: String,
    pub flashes: Vec<FlashMessage>,
}

impl ActionResponse {
    pub fn redirect(to: impl Into<String>) -> Self {
        Self {
            redirect_to: to.into(),
            flashes: Vec::new(),
        }
    }

    pub fn with_flash(mut self, flash: FlashMessage) -> Self {
        self.flashes.push(flash);
        self
    }
}

pub(crate) fn article_path(id: i64, slug: &str) -> String {
    format!("/blog/article/{id}/{slug}")
}
