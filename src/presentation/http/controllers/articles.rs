// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, PageSummary, UpdatedArticleDto},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::domain::article::{ArticleFilter, TITLE_MAX_CHARS};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{IdParam, ValidatedJson};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation::{FieldViolation, Validate, Violations};
use axum::{
    Extension, Json,
    extract::Query,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const NEXT_CURSOR_HEADER: &str = "x-cursor";
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const MAX_PAGE_HEADER: &str = "x-max-page";

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_SIZE: i64 = 10;

/// Raw listing parameters. Kept as strings so that an unparseable value
/// falls back to its default instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page number, default 1.
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Page size, default 10.
    #[param(value_type = Option<i64>)]
    pub size: Option<String>,
    /// Case-insensitive substring matched against titles.
    pub q: Option<String>,
}

fn int_or_default(raw: Option<&str>, default: i64) -> i64 {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(default)
}

fn positive(value: i64, name: &str) -> HttpResult<u32> {
    if value <= 0 {
        return Err(HttpError::bad_request(format!(
            "{name} must be a positive integer"
        )));
    }
    u32::try_from(value).map_err(|_| HttpError::bad_request(format!("{name} is too large")))
}

impl ArticleListParams {
    pub fn page_and_size(&self) -> HttpResult<(u32, u32)> {
        let page = int_or_default(self.page.as_deref(), DEFAULT_PAGE);
        let size = int_or_default(self.size.as_deref(), DEFAULT_SIZE);
        Ok((positive(page, "page")?, positive(size, "size")?))
    }

    pub fn filter(&self) -> ArticleFilter {
        ArticleFilter::by_title(self.q.clone().unwrap_or_default())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
}

impl Validate for CreateArticleRequest {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut v = Violations::new();
        if v.required_text("Title", self.title.as_deref()) {
            v.max_chars("Title", self.title.as_deref(), TITLE_MAX_CHARS);
        }
        v.required_text("Content", self.content.as_deref());
        v.required_positive("AuthorID", self.author_id);
        v.into_vec()
    }
}

/// Omitted fields stay untouched; an empty string is stored as empty.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Validate for UpdateArticleRequest {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut v = Violations::new();
        v.max_chars("Title", self.title.as_deref(), TITLE_MAX_CHARS);
        v.into_vec()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub code: u16,
    pub message: String,
}

fn summary_headers(summary: PageSummary) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(next) = summary.next_cursor {
        headers.insert(
            HeaderName::from_static(NEXT_CURSOR_HEADER),
            HeaderValue::from(next),
        );
    }
    headers.insert(
        HeaderName::from_static(TOTAL_COUNT_HEADER),
        HeaderValue::from(summary.total_count),
    );
    headers.insert(
        HeaderName::from_static(MAX_PAGE_HEADER),
        HeaderValue::from(summary.max_page),
    );
    headers
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles, newest first.", body = [ArticleDto],
            headers(
                ("X-Cursor" = u32, description = "Next page number, when one exists."),
                ("X-Total-Count" = u64, description = "Articles matching the filter."),
                ("X-Max-Page" = u64, description = "Total count divided by page size, rounded down.")
            )
        ),
        (status = 400, description = "Page or size is not positive.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<(HeaderMap, Json<Vec<ArticleDto>>)> {
    let (page, size) = params.page_and_size()?;
    let filter = params.filter();
    let queries = &state.services.article_queries;

    let result = queries
        .list_articles(ListArticlesQuery {
            page,
            size,
            filter: filter.clone(),
        })
        .await
        .into_http()?;
    let total = queries.count_articles(&filter).await.into_http()?;

    let summary = PageSummary::new(result.next_page, total, size);
    Ok((summary_headers(summary), Json(result.items)))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article with its author.", body = ArticleDto),
        (status = 400, description = "Identifier is not a positive integer.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    IdParam(id): IdParam,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Malformed or invalid body.", body = ErrorResponse),
        (status = 404, description = "Author does not exist.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
        author_id: payload.author_id.unwrap_or_default(),
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article as submitted; not read back.", body = UpdatedArticleDto),
        (status = 400, description = "Bad identifier or body.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    IdParam(id): IdParam,
    ValidatedJson(payload): ValidatedJson<UpdateArticleRequest>,
) -> HttpResult<Json<UpdatedArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Deleted, or already absent.", body = MessageResponse),
        (status = 400, description = "Identifier is not a positive integer.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    IdParam(id): IdParam,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        code: StatusCode::OK.as_u16(),
        message: "Success delete article".into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, size: Option<&str>) -> ArticleListParams {
        ArticleListParams {
            page: page.map(String::from),
            size: size.map(String::from),
            q: None,
        }
    }

    #[test]
    fn missing_or_garbled_values_use_defaults() {
        assert_eq!(params(None, None).page_and_size().unwrap(), (1, 10));
        assert_eq!(params(Some("abc"), Some("")).page_and_size().unwrap(), (1, 10));
        assert_eq!(params(Some("3"), Some("25")).page_and_size().unwrap(), (3, 25));
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let err = params(Some("0"), None).page_and_size().unwrap_err();
        assert_eq!(err.message(), "page must be a positive integer");

        let err = params(None, Some("-5")).page_and_size().unwrap_err();
        assert_eq!(err.message(), "size must be a positive integer");
    }

    #[test]
    fn create_request_reports_each_missing_field() {
        let request = CreateArticleRequest {
            title: None,
            content: Some(String::new()),
            author_id: Some(-1),
        };
        let messages: Vec<String> = request.validate().iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            ["Title is required", "Content is required", "AuthorID is gt 0"]
        );
    }

    #[test]
    fn update_request_allows_empty_strings() {
        let request = UpdateArticleRequest {
            title: Some(String::new()),
            content: None,
        };
        assert!(request.validate().is_empty());
    }

    #[test]
    fn headers_omit_cursor_past_max_page() {
        let headers = summary_headers(PageSummary::new(Some(3), 21, 10));
        assert!(headers.get(NEXT_CURSOR_HEADER).is_none());
        assert_eq!(headers[TOTAL_COUNT_HEADER], "21");
        assert_eq!(headers[MAX_PAGE_HEADER], "2");
    }
}
