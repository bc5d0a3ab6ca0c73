//! Fixed-size, 1-based pagination.
//!
//! Pages hold [`PAGE_SIZE`] records. Page `p` covers
//! `records[(p - 1) * PAGE_SIZE .. p * PAGE_SIZE]` of an ordered set. An empty
//! page is never a successful result: callers get [`CoreError::PageNotFound`]
//! and report it as "resource not found". No total page count is computed;
//! callers report the total record count separately.

use crate::error::CoreError;

/// Number of records per page.
pub const PAGE_SIZE: i64 = 10;

/// A validated 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageRequest {
    /// Build a page request, rejecting `page <= 0`.
    pub fn new(page: i64) -> Result<Self, CoreError> {
        if page <= 0 {
            return Err(CoreError::PageNotFound { page });
        }
        Ok(Self { page })
    }

    /// Parse the raw `?page=` query value.
    ///
    /// An absent or non-integer value means page 1, mirroring how the
    /// listing endpoints have always treated garbage input.
    pub fn from_param(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(page) => Self::new(page),
            None => Ok(Self::default()),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// SQL `OFFSET` for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(PAGE_SIZE)
    }

    /// SQL `LIMIT` for this page.
    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    /// Turn an empty page of rows into [`CoreError::PageNotFound`].
    pub fn require_rows<T>(&self, rows: Vec<T>) -> Result<Vec<T>, CoreError> {
        if rows.is_empty() {
            Err(CoreError::PageNotFound { page: self.page })
        } else {
            Ok(rows)
        }
    }
}

/// Slice an in-memory ordered sequence into the requested page.
pub fn paginate<T>(records: &[T], page: PageRequest) -> Result<&[T], CoreError> {
    let len = records.len() as i64;
    let start = page.offset();
    if start >= len {
        return Err(CoreError::PageNotFound { page: page.page });
    }
    let end = (start + PAGE_SIZE).min(len);
    Ok(&records[start as usize..end as usize])
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn records(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    #[test]
    fn missing_param_defaults_to_first_page() {
        let page = PageRequest::from_param(None).unwrap();
        assert_eq!(page.page(), 1);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), PAGE_SIZE);
    }

    #[test]
    fn garbage_param_defaults_to_first_page() {
        assert_eq!(PageRequest::from_param(Some("abc")).unwrap().page(), 1);
        assert_eq!(PageRequest::from_param(Some("")).unwrap().page(), 1);
    }

    #[test]
    fn zero_and_negative_pages_are_not_found() {
        assert_matches!(
            PageRequest::from_param(Some("0")),
            Err(CoreError::PageNotFound { page: 0 })
        );
        assert_matches!(
            PageRequest::new(-3),
            Err(CoreError::PageNotFound { page: -3 })
        );
    }

    #[test]
    fn offset_tracks_page_number() {
        assert_eq!(PageRequest::new(3).unwrap().offset(), 20);
    }

    #[test]
    fn paginate_returns_expected_slice() {
        let all = records(25);
        for p in 1..=3 {
            let page = PageRequest::new(p).unwrap();
            let start = ((p - 1) * PAGE_SIZE) as usize;
            let end = (start + PAGE_SIZE as usize).min(all.len());
            assert_eq!(paginate(&all, page).unwrap(), &all[start..end]);
        }
    }

    #[test]
    fn paginate_partial_last_page() {
        let all = records(25);
        let page = paginate(&all, PageRequest::new(3).unwrap()).unwrap();
        assert_eq!(page, &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn paginate_beyond_last_page_is_not_found() {
        let all = records(20);
        assert_matches!(
            paginate(&all, PageRequest::new(3).unwrap()),
            Err(CoreError::PageNotFound { page: 3 })
        );
    }

    #[test]
    fn paginate_empty_set_is_not_found() {
        let empty: Vec<i64> = Vec::new();
        assert!(paginate(&empty, PageRequest::default()).is_err());
    }

    #[test]
    fn require_rows_rejects_empty_page() {
        let page = PageRequest::new(2).unwrap();
        assert_matches!(
            page.require_rows(Vec::<i64>::new()),
            Err(CoreError::PageNotFound { page: 2 })
        );
        assert_eq!(page.require_rows(vec![1]).unwrap(), vec![1]);
    }
}
