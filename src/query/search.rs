//! Federated keyword search over books, authors and categories

use super::{pagination::paginate, PageInfo, PageRequest};
use crate::models::{Author, Book, Category, SearchResult};

/// Entity kinds a search is restricted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKind {
    All,
    Book,
    Author,
    Category,
    /// Selector outside the known set; matches nothing
    Unrecognized(String),
}

impl SearchKind {
    /// Parse a case-insensitive selector. Absent means `All`.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return SearchKind::All;
        };
        match value.to_uppercase().as_str() {
            "ALL" => SearchKind::All,
            "BOOK" => SearchKind::Book,
            "AUTHOR" => SearchKind::Author,
            "CATEGORY" => SearchKind::Category,
            other => SearchKind::Unrecognized(other.to_string()),
        }
    }

    pub fn includes_books(&self) -> bool {
        matches!(self, SearchKind::All | SearchKind::Book)
    }

    pub fn includes_authors(&self) -> bool {
        matches!(self, SearchKind::All | SearchKind::Author)
    }

    pub fn includes_categories(&self) -> bool {
        matches!(self, SearchKind::All | SearchKind::Category)
    }
}

/// Normalized search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    /// Already lower-cased
    pub keyword: String,
    pub kind: SearchKind,
    pub page: PageRequest,
}

fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(keyword)
}

/// Match `filter.keyword` against each selected collection, concatenate
/// books, then authors, then categories, and slice the requested page.
pub fn search(
    books: &[Book],
    authors: &[Author],
    categories: &[Category],
    filter: &SearchFilter,
) -> (Vec<SearchResult>, PageInfo) {
    let keyword = filter.keyword.as_str();
    let mut results = Vec::new();

    if filter.kind.includes_books() {
        results.extend(
            books
                .iter()
                .filter(|b| contains_keyword(&b.title, keyword))
                .cloned()
                .map(SearchResult::Book),
        );
    }

    if filter.kind.includes_authors() {
        results.extend(
            authors
                .iter()
                .filter(|a| contains_keyword(&a.name, keyword))
                .cloned()
                .map(SearchResult::Author),
        );
    }

    if filter.kind.includes_categories() {
        results.extend(
            categories
                .iter()
                .filter(|c| contains_keyword(&c.name, keyword))
                .cloned()
                .map(SearchResult::Category),
        );
    }

    paginate(results, filter.page)
}
