// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod slug;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use slug::derive_slug;
pub use update::UpdateArticleCommand;
