// src/domain/article/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Page-number based slice of the article listing. Both fields are 1-based
/// and strictly positive, and the row offset they imply fits in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    offset: i64,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::Validation(
                "page must be a positive integer".into(),
            ));
        }
        if size == 0 {
            return Err(DomainError::Validation(
                "size must be a positive integer".into(),
            ));
        }
        let offset = i64::from(page - 1)
            .checked_mul(i64::from(size))
            .ok_or_else(|| DomainError::Validation("page is out of range".into()))?;
        Ok(Self { page, size, offset })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    /// Successor page for a slice that returned `returned` rows. Only a hint:
    /// a full last page still yields `Some`.
    pub fn next_page_hint(&self, returned: usize) -> Option<u32> {
        if returned == 0 {
            None
        } else {
            self.page.checked_add(1)
        }
    }
}

/// Article-shaped filter shared by the listing and the count query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub title: String,
}

impl ArticleFilter {
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }

    /// `LIKE` pattern for the title, or `None` when everything matches.
    pub fn title_pattern(&self) -> Option<String> {
        if self.title.is_empty() {
            None
        } else {
            Some(format!("%{}%", self.title))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_page_or_size() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(0, 0).is_err());
    }

    #[test]
    fn offset_skips_previous_pages() {
        let first = PageRequest::new(1, 10).unwrap();
        assert_eq!(first.offset(), 0);
        assert_eq!(first.limit(), 10);

        let third = PageRequest::new(3, 7).unwrap();
        assert_eq!(third.offset(), 14);
    }

    #[test]
    fn rejects_offsets_past_i64() {
        let err = PageRequest::new(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "page is out of range"));

        let far = PageRequest::new(u32::MAX, 1).unwrap();
        assert_eq!(far.offset(), i64::from(u32::MAX) - 1);
        let wide = PageRequest::new(1, u32::MAX).unwrap();
        assert_eq!(wide.offset(), 0);
    }

    #[test]
    fn next_page_hint_depends_only_on_returned_rows() {
        let page = PageRequest::new(4, 5).unwrap();
        assert_eq!(page.next_page_hint(0), None);
        assert_eq!(page.next_page_hint(1), Some(5));
        assert_eq!(page.next_page_hint(5), Some(5));
    }

    #[test]
    fn empty_filter_has_no_pattern() {
        assert_eq!(ArticleFilter::default().title_pattern(), None);
        assert!(ArticleFilter::by_title("").is_empty());
        assert_eq!(
            ArticleFilter::by_title("rust").title_pattern().as_deref(),
            Some("%rust%")
        );
    }
}
