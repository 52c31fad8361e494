use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::author::AuthorId,
};

pub struct ListArticlesByAuthorQuery {
    pub author_id: i64,
}

impl ArticleQueryService {
    pub async fn list_articles_by_author(
        &self,
        query: ListArticlesByAuthorQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let author_id = AuthorId::new(query.author_id)?;
        let records = self.read_repo.find_by_author(author_id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
