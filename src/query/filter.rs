//! Book filtering

use super::{hierarchy::CategoryTree, pagination::paginate, PageInfo, PageRequest};
use crate::{error::AppResult, models::Book};

/// Normalized book listing filter. Every `None` means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFilter {
    pub page: PageRequest,
    pub publication_year: Option<i32>,
    /// Already lower-cased
    pub language: Option<String>,
    pub category: Option<i32>,
    pub recursive: bool,
}

impl BookFilter {
    /// True when `book` passes every provided predicate
    pub fn matches(&self, book: &Book, tree: &CategoryTree) -> AppResult<bool> {
        if let Some(year) = self.publication_year {
            if book.publication_year != year {
                return Ok(false);
            }
        }
        if let Some(ref language) = self.language {
            if book.language.to_lowercase() != *language {
                return Ok(false);
            }
        }
        if let Some(category) = self.category {
            return tree.is_in_category(book, category, self.recursive);
        }
        Ok(true)
    }
}

/// Filter `books`, keeping their order, and slice the requested page
pub fn list_books(
    books: Vec<Book>,
    tree: &CategoryTree,
    filter: &BookFilter,
) -> AppResult<(Vec<Book>, PageInfo)> {
    let mut filtered = Vec::with_capacity(books.len());
    for book in books {
        if filter.matches(&book, tree)? {
            filtered.push(book);
        }
    }
    Ok(paginate(filtered, filter.page))
}
