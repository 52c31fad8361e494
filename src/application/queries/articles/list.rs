use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticlePage},
        error::ApplicationResult,
    },
    domain::article::{ArticleFilter, PageRequest},
};

pub struct ListArticlesQuery {
    pub page: u32,
    pub size: u32,
    pub filter: ArticleFilter,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticlePage> {
        let page = PageRequest::new(query.page, query.size)?;
        let (records, next_page) = self.read_repo.fetch(page, &query.filter).await?;

        let items: Vec<ArticleDto> = records.into_iter().map(Into::into).collect();
        Ok(ArticlePage::new(items, next_page))
    }

    /// Must be given the same filter as the listing it accompanies.
    pub async fn count_articles(&self, filter: &ArticleFilter) -> ApplicationResult<u64> {
        Ok(self.read_repo.count(filter).await?)
    }
}
