use super::ArticleCommandService;
use crate::{
    application::{dto::UpdatedArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleId, ArticleTitle, ArticleUpdate},
};

/// `None` leaves the stored value unchanged; `Some("")` clears it.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<UpdatedArticleDto> {
        let UpdateArticleCommand { id, title, content } = command;
        let id = ArticleId::new(id)?;

        let mut update = ArticleUpdate::new(id, self.clock.now());
        if let Some(title) = title.clone() {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = content.clone() {
            update = update.with_content(ArticleContent::new(content));
        }

        let updated_at = update.updated_at;
        self.write_repo.update(update).await?;

        Ok(UpdatedArticleDto {
            id: id.into(),
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            author_id: 0,
            created_at: None,
            updated_at,
        })
    }
}
