use super::AuthorCommandService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::author::{AuthorId, AuthorName, NewAuthor},
};

pub struct CreateAuthorCommand {
    pub name: String,
}

pub struct GetAuthorQuery {
    pub id: i64,
}

impl AuthorCommandService {
    pub async fn create_author(&self, command: CreateAuthorCommand) -> ApplicationResult<AuthorDto> {
        let name = AuthorName::new(command.name)?;
        let now = self.clock.now();
        let author = self
            .author_repo
            .insert(NewAuthor {
                name,
                created_at: now,
                updated_at: now,
            })
            .await?;
        Ok(author.into())
    }

    pub async fn get_author(&self, query: GetAuthorQuery) -> ApplicationResult<AuthorDto> {
        let id = AuthorId::new(query.id)?;
        self.author_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("author not found"))
    }
}
