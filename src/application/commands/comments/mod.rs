mod create;
mod delete;
mod service;

pub use create::{AddCommentCommand, CommentAdded};
pub use delete::{CommentDeletion, DeleteCommentCommand};
pub use service::CommentCommandService;
