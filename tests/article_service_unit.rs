// tests/article_service_unit.rs
mod support;

use inkpot_core::application::{
    commands::{
        articles::{CreateArticleCommand, UpdateArticleCommand},
        authors::{DEFAULT_AUTHOR_NAME, GetAuthorQuery},
    },
    error::ApplicationError,
    queries::articles::{
        ListArticlesByAuthorQuery, ListArticlesByTitleQuery, ListArticlesQuery,
    },
};
use inkpot_core::domain::{article::ArticleFilter, errors::DomainError};
use support::mocks::time::minutes_after;

fn services(store: &std::sync::Arc<support::InMemoryStore>) -> std::sync::Arc<inkpot_core::application::services::ApplicationServices> {
    support::build_services(store.clone(), store.clone(), store.clone())
}

/// 既定の著者は空のときだけ投入される
#[tokio::test]
async fn default_author_is_seeded_once() {
    let store = support::InMemoryStore::new();
    let services = services(&store);

    let seeded = services
        .author_commands
        .seed_default_author(DEFAULT_AUTHOR_NAME)
        .await
        .unwrap()
        .expect("first run seeds");
    assert_eq!(seeded.name, "John Doe");

    let again = services
        .author_commands
        .seed_default_author(DEFAULT_AUTHOR_NAME)
        .await
        .unwrap();
    assert!(again.is_none());

    let fetched = services
        .author_commands
        .get_author(GetAuthorQuery { id: seeded.id })
        .await
        .unwrap();
    assert_eq!(fetched.name, "John Doe");
}

/// 著者を解決してから記事を作成する
#[tokio::test]
async fn create_attaches_the_author() {
    let store = support::InMemoryStore::new();
    let author = store.add_author("John Doe", support::fixed_now());
    let services = services(&store);

    let command = CreateArticleCommand {
        title: "Hello".into(),
        content: "World".into(),
        author_id: author.id.into(),
    };
    let created = services.article_commands.create_article(command).await.unwrap();

    assert_eq!(created.title, "Hello");
    assert_eq!(created.author.as_ref().map(|a| a.name.as_str()), Some("John Doe"));
    assert_eq!(created.created_at, support::fixed_now());
    assert_eq!(created.updated_at, created.created_at);
    assert_eq!(store.article_insert_calls(), 1);
}

/// 未知の著者は NotFound で、挿入は行われない
#[tokio::test]
async fn create_with_unknown_author_fails_before_insert() {
    let store = support::InMemoryStore::new();
    let services = services(&store);

    let err = services
        .article_commands
        .create_article(CreateArticleCommand {
            title: "t".into(),
            content: "c".into(),
            author_id: 9,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(ref m) if m == "author not found"));
    assert_eq!(store.article_insert_calls(), 0);
}

/// 長すぎるタイトルはドメイン検証で拒否される
#[tokio::test]
async fn overlong_title_is_a_validation_error() {
    let store = support::InMemoryStore::new();
    let author = store.add_author("John Doe", support::fixed_now());
    let services = services(&store);

    let err = services
        .article_commands
        .create_article(CreateArticleCommand {
            title: "x".repeat(256),
            content: "c".into(),
            author_id: author.id.into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
}

/// 更新結果は送信値と書き込んだ更新日時
#[tokio::test]
async fn update_echoes_submitted_fields() {
    let store = support::InMemoryStore::new();
    let author = store.add_author("John Doe", support::fixed_now());
    let article = store.add_article("a", "b", author.id, minutes_after(-1));
    let services = services(&store);

    let updated = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: article.id.into(),
            title: None,
            content: Some("new body".into()),
        })
        .await
        .unwrap();
    assert_eq!(updated.id, i64::from(article.id));
    assert_eq!(updated.title, "");
    assert_eq!(updated.content, "new body");
    assert_eq!(updated.author_id, 0);
    assert_eq!(updated.created_at, None);
    assert_eq!(updated.updated_at, support::fixed_now());
}

/// 一覧・件数・著者別・タイトル別クエリ
#[tokio::test]
async fn queries_share_the_same_view_of_the_store() {
    let store = support::InMemoryStore::new();
    let john = store.add_author("John Doe", support::fixed_now());
    let jane = store.add_author("Jane Roe", support::fixed_now());
    store.add_article("Rust", "a", john.id, minutes_after(1));
    store.add_article("Go", "b", jane.id, minutes_after(2));
    store.add_article("More Rust", "c", john.id, minutes_after(3));
    let services = services(&store);
    let queries = &services.article_queries;

    let filter = ArticleFilter::by_title("rust");
    let page = queries
        .list_articles(ListArticlesQuery {
            page: 1,
            size: 1,
            filter: filter.clone(),
        })
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "More Rust");
    assert_eq!(page.next_page, Some(2));
    assert_eq!(queries.count_articles(&filter).await.unwrap(), 2);

    let by_author = queries
        .list_articles_by_author(ListArticlesByAuthorQuery {
            author_id: john.id.into(),
        })
        .await
        .unwrap();
    assert_eq!(by_author.len(), 2);

    let by_title = queries
        .list_articles_by_title(ListArticlesByTitleQuery { title: "go".into() })
        .await
        .unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].author_id, i64::from(jane.id));
}

/// page=0 はドメイン検証で拒否される
#[tokio::test]
async fn zero_page_is_rejected() {
    let store = support::InMemoryStore::new();
    let services = services(&store);

    let err = services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: 0,
            size: 10,
            filter: ArticleFilter::default(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
}
