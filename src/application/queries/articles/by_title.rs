use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct ListArticlesByTitleQuery {
    pub title: String,
}

impl ArticleQueryService {
    pub async fn list_articles_by_title(
        &self,
        query: ListArticlesByTitleQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.find_by_title(&query.title).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
