pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleSearch, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle};
