mod create;
mod seed;
mod service;

pub use create::{CreateAuthorCommand, GetAuthorQuery};
pub use seed::DEFAULT_AUTHOR_NAME;
pub use service::AuthorCommandService;
