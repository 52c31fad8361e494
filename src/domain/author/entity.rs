// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorId, AuthorName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub name: AuthorName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: AuthorName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
