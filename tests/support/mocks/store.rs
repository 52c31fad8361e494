// tests/support/mocks/store.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use inkpot_core::domain::{
    article::{
        Article, ArticleContent, ArticleFilter, ArticleId, ArticleReadRepository, ArticleTitle,
        ArticleUpdate, ArticleWriteRepository, NewArticle, PageRequest,
    },
    author::{Author, AuthorId, AuthorName, AuthorRepository, NewAuthor},
    errors::{DomainError, DomainResult},
};
use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicUsize, Ordering},
};

#[derive(Default)]
struct State {
    authors: Vec<Author>,
    articles: Vec<Article>,
    last_author_id: i64,
    last_article_id: i64,
}

/// 記事と著者を保持するインメモリストア（3つのリポジトリを兼ねる）
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    article_inserts: AtomicUsize,
    last_fetch_filter: Mutex<Option<ArticleFilter>>,
    last_count_filter: Mutex<Option<ArticleFilter>>,
}

fn matches(article: &Article, filter: &ArticleFilter) -> bool {
    filter.is_empty()
        || article
            .title
            .as_str()
            .to_lowercase()
            .contains(&filter.title.to_lowercase())
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("store mutex poisoned")
    }

    /// 著者を直接追加する
    pub fn add_author(&self, name: &str, at: DateTime<Utc>) -> Author {
        let mut state = self.lock();
        state.last_author_id += 1;
        let author = Author {
            id: AuthorId::new(state.last_author_id).unwrap(),
            name: AuthorName::new(name).unwrap(),
            created_at: at,
            updated_at: at,
        };
        state.authors.push(author.clone());
        author
    }

    /// 記事を直接追加する（insert 呼び出し回数には数えない）
    pub fn add_article(
        &self,
        title: &str,
        content: &str,
        author_id: AuthorId,
        at: DateTime<Utc>,
    ) -> Article {
        let mut state = self.lock();
        state.last_article_id += 1;
        let article = Article {
            id: ArticleId::new(state.last_article_id).unwrap(),
            title: ArticleTitle::new(title).unwrap(),
            content: ArticleContent::new(content),
            author_id,
            author: None,
            created_at: at,
            updated_at: at,
        };
        state.articles.push(article.clone());
        article
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.lock()
            .articles
            .iter()
            .find(|a| i64::from(a.id) == id)
            .cloned()
    }

    pub fn article_count(&self) -> usize {
        self.lock().articles.len()
    }

    pub fn article_insert_calls(&self) -> usize {
        self.article_inserts.load(Ordering::SeqCst)
    }

    /// 直近の fetch が受け取った絞り込み条件
    pub fn last_fetch_filter(&self) -> Option<ArticleFilter> {
        self.last_fetch_filter.lock().expect("filter mutex poisoned").clone()
    }

    /// 直近の count が受け取った絞り込み条件
    pub fn last_count_filter(&self) -> Option<ArticleFilter> {
        self.last_count_filter.lock().expect("filter mutex poisoned").clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.article_inserts.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();
        if !state.authors.iter().any(|a| a.id == article.author_id) {
            return Err(DomainError::NotFound("referenced record not found".into()));
        }
        state.last_article_id += 1;
        let created = Article {
            id: ArticleId::new(state.last_article_id)?,
            title: article.title,
            content: article.content,
            author_id: article.author_id,
            author: None,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        state.articles.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<()> {
        let mut state = self.lock();
        if let Some(article) = state.articles.iter_mut().find(|a| a.id == update.id) {
            if let Some(title) = update.title {
                article.title = title;
            }
            if let Some(content) = update.content {
                article.content = content;
            }
            article.updated_at = update.updated_at;
        }
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.lock().articles.retain(|a| a.id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn fetch(
        &self,
        page: PageRequest,
        filter: &ArticleFilter,
    ) -> DomainResult<(Vec<Article>, Option<u32>)> {
        *self.last_fetch_filter.lock().expect("filter mutex poisoned") = Some(filter.clone());
        let mut rows: Vec<Article> = self
            .lock()
            .articles
            .iter()
            .filter(|a| matches(a, filter))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });

        let offset = usize::try_from(page.offset()).unwrap();
        let limit = usize::try_from(page.limit()).unwrap();
        let items: Vec<Article> = rows.into_iter().skip(offset).take(limit).collect();
        let next = page.next_page_hint(items.len());
        Ok((items, next))
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        *self.last_count_filter.lock().expect("filter mutex poisoned") = Some(filter.clone());
        let count = self
            .lock()
            .articles
            .iter()
            .filter(|a| matches(a, filter))
            .count();
        Ok(count as u64)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.lock();
        let Some(mut article) = state.articles.iter().find(|a| a.id == id).cloned() else {
            return Ok(None);
        };
        if let Some(author) = state.authors.iter().find(|a| a.id == article.author_id) {
            article.attach_author(author.clone());
        }
        Ok(Some(article))
    }

    async fn find_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>> {
        Ok(self
            .lock()
            .articles
            .iter()
            .filter(|a| a.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn find_by_title(&self, title: &str) -> DomainResult<Vec<Article>> {
        let filter = ArticleFilter::by_title(title);
        Ok(self
            .lock()
            .articles
            .iter()
            .filter(|a| matches(a, &filter))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryStore {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.lock().authors.len() as u64)
    }

    async fn insert(&self, new_author: NewAuthor) -> DomainResult<Author> {
        let mut state = self.lock();
        state.last_author_id += 1;
        let author = Author {
            id: AuthorId::new(state.last_author_id)?,
            name: new_author.name,
            created_at: new_author.created_at,
            updated_at: new_author.updated_at,
        };
        state.authors.push(author.clone());
        Ok(author)
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        Ok(self.lock().authors.iter().find(|a| a.id == id).cloned())
    }
}
