//! Federated search types

use serde::{Deserialize, Serialize};

use super::{Author, Book, Category};
use crate::{
    error::{AppError, AppResult},
    query::{PageInfo, PageRequest, SearchFilter, SearchKind},
};

/// One hit of a federated search, tagged by entity kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchResult {
    Book(Book),
    Author(Author),
    Category(Category),
}

/// Search parameters, as received from the caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl SearchQuery {
    /// Validate and substitute defaults. A keyword is mandatory.
    pub fn normalize(&self, default_page_size: usize) -> AppResult<SearchFilter> {
        let keyword = self
            .keyword
            .as_deref()
            .ok_or_else(|| AppError::InvalidArgument("keyword is required".to_string()))?;

        Ok(SearchFilter {
            keyword: keyword.to_lowercase(),
            kind: SearchKind::parse(self.kind.as_deref()),
            page: PageRequest::normalize(self.page, self.size, default_page_size),
        })
    }
}

/// One page of search hits
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub list: Vec<SearchResult>,
    pub page_info: PageInfo,
}
