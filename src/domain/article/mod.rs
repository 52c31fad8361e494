pub mod entity;
pub mod pagination;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use pagination::{ArticleFilter, PageRequest};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle, TITLE_MAX_CHARS};
