use crate::config::{DatabaseConfig, DatabaseDriver};
use crate::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    author::AuthorRepository,
};
use crate::infrastructure::repositories::{
    PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresAuthorRepository,
    SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteAuthorRepository,
};
use sqlx::{
    PgPool, SqlitePool,
    postgres::PgPoolOptions,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{str::FromStr, sync::Arc};

/// Connection pool for whichever backend the configuration selected.
#[derive(Clone, Debug)]
pub enum DatabasePool {
    Sqlite(SqlitePool),
    Postgres(PgPool),
}

pub struct Repositories {
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub author: Arc<dyn AuthorRepository>,
}

fn is_in_memory(dsn: &str) -> bool {
    dsn.contains(":memory:") || dsn.contains("mode=memory")
}

impl DatabasePool {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        match config.driver {
            DatabaseDriver::Sqlite => init_sqlite_pool(&config.dsn).await.map(Self::Sqlite),
            DatabaseDriver::Postgres => init_postgres_pool(&config.dsn).await.map(Self::Postgres),
        }
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        match self {
            Self::Sqlite(pool) => sqlx::migrate!("./migrations/sqlite").run(pool).await,
            Self::Postgres(pool) => sqlx::migrate!("./migrations/postgres").run(pool).await,
        }
    }

    pub fn repositories(&self) -> Repositories {
        match self {
            Self::Sqlite(pool) => Repositories {
                article_read: Arc::new(SqliteArticleReadRepository::new(pool.clone())),
                article_write: Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
                author: Arc::new(SqliteAuthorRepository::new(pool.clone())),
            },
            Self::Postgres(pool) => Repositories {
                article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
                article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
                author: Arc::new(PostgresAuthorRepository::new(pool.clone())),
            },
        }
    }

    pub fn driver(&self) -> DatabaseDriver {
        match self {
            Self::Sqlite(_) => DatabaseDriver::Sqlite,
            Self::Postgres(_) => DatabaseDriver::Postgres,
        }
    }

    pub async fn close(&self) {
        match self {
            Self::Sqlite(pool) => pool.close().await,
            Self::Postgres(pool) => pool.close().await,
        }
    }
}

async fn init_sqlite_pool(dsn: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(dsn)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database lives only as long as a connection to it, so
    // keep exactly one open for the life of the pool.
    let pool_options = if is_in_memory(dsn) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(16)
    };

    pool_options.connect_with(options).await
}

async fn init_postgres_pool(dsn: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(16).connect(dsn).await
}
