//! Shared query parameter types for API handlers.

use fsnd_core::error::CoreError;
use fsnd_core::pagination::PageRequest;
use serde::Deserialize;

/// `?page=` on the paginated trivia listings.
///
/// Kept as a raw string so that a non-numeric value falls back to page 1
/// instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::from_param(self.page.as_deref())
    }
}
