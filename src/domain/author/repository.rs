use crate::domain::author::{
    entity::{Author, NewAuthor},
    value_objects::AuthorId,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_author: NewAuthor) -> DomainResult<Author>;

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;
}
