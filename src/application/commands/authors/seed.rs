use super::{AuthorCommandService, CreateAuthorCommand};
use crate::application::{dto::AuthorDto, error::ApplicationResult};

pub const DEFAULT_AUTHOR_NAME: &str = "John Doe";

impl AuthorCommandService {
    /// Inserts `name` when the author table is empty. Returns the seeded
    /// author, or `None` when authors already existed.
    pub async fn seed_default_author(&self, name: &str) -> ApplicationResult<Option<AuthorDto>> {
        let existing = self.author_repo.count().await?;
        if existing > 0 {
            tracing::debug!(existing, "authors present, skipping seed");
            return Ok(None);
        }

        let author = self
            .create_author(CreateAuthorCommand {
                name: name.to_string(),
            })
            .await?;
        tracing::info!(author_id = author.id, name = %author.name, "seeded default author");
        Ok(Some(author))
    }
}
