use super::ArticleDto;

/// One page of the article listing plus the heuristic successor page.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub items: Vec<ArticleDto>,
    pub next_page: Option<u32>,
}

impl ArticlePage {
    pub fn new(items: Vec<ArticleDto>, next_page: Option<u32>) -> Self {
        Self { items, next_page }
    }
}

/// Values exposed through the listing response headers.
///
/// `max_page` is `total_count / size` rounded down, so a trailing partial
/// page is not counted and its number is never advertised as `next_cursor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub next_cursor: Option<u32>,
    pub total_count: u64,
    pub max_page: u64,
}

impl PageSummary {
    pub fn new(next_page: Option<u32>, total_count: u64, size: u32) -> Self {
        let max_page = total_count.checked_div(u64::from(size)).unwrap_or(0);
        let next_cursor = next_page.filter(|&next| next > 0 && u64::from(next) <= max_page);
        Self {
            next_cursor,
            total_count,
            max_page,
        }
    }
}
