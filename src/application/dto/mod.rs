pub mod articles;
pub mod authors;
pub mod pagination;
pub mod serde_time;

pub use articles::{ArticleDto, UpdatedArticleDto};
pub use authors::AuthorDto;
pub use pagination::{ArticlePage, PageSummary};
