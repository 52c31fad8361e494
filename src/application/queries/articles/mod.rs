mod by_author;
mod by_title;
mod get_by_id;
mod list;
mod service;

pub use by_author::ListArticlesByAuthorQuery;
pub use by_title::ListArticlesByTitleQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
