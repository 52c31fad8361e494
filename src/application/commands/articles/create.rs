// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleTitle, NewArticle},
        author::AuthorId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

impl ArticleCommandService {
    /// Resolves the author before inserting. An unknown author fails with
    /// `NotFound` and nothing is written.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let author_id = AuthorId::new(command.author_id)?;
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content);

        let author = self
            .author_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        let now = self.clock.now();
        let new_article = NewArticle {
            title,
            content,
            author_id: author.id,
            created_at: now,
            updated_at: now,
        };

        let mut created = self.write_repo.insert(new_article).await?;
        created.attach_author(author);
        tracing::debug!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
