// tests/support/mocks/failing.rs
use async_trait::async_trait;
use inkpot_core::domain::{
    article::{Article, ArticleFilter, ArticleId, ArticleReadRepository, PageRequest},
    author::AuthorId,
    errors::{DomainError, DomainResult},
};

/// すべての読み取りがストレージ障害になるリポジトリ
pub struct FailingArticleRead;

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("database is locked".into()))
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn fetch(
        &self,
        _page: PageRequest,
        _filter: &ArticleFilter,
    ) -> DomainResult<(Vec<Article>, Option<u32>)> {
        broken()
    }

    async fn count(&self, _filter: &ArticleFilter) -> DomainResult<u64> {
        broken()
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        broken()
    }

    async fn find_by_author(&self, _author_id: AuthorId) -> DomainResult<Vec<Article>> {
        broken()
    }

    async fn find_by_title(&self, _title: &str) -> DomainResult<Vec<Article>> {
        broken()
    }
}
