use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::pagination::{ArticleFilter, PageRequest};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Writes only the fields present in `update`; no matching row is not an error.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<()>;
    /// Idempotent.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Newest first. The second element is the next page hint.
    async fn fetch(
        &self,
        page: PageRequest,
        filter: &ArticleFilter,
    ) -> DomainResult<(Vec<Article>, Option<u32>)>;
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;
    /// Loads the author alongside the article.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>>;
    async fn find_by_title(&self, title: &str) -> DomainResult<Vec<Article>>;
}
