mod list;
mod service;
mod view;

pub use list::{ListArticlesQuery, SearchArticlesQuery};
pub use service::ArticleQueryService;
pub use view::{ArticleEditView, ViewArticleQuery};
