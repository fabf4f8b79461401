//! Book model and related types

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::query::{BookFilter, PageInfo, PageRequest};

/// Book record. Each book is written by exactly one author and filed
/// under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub publication_year: i32,
    pub language: String,
    pub nb_pages: i32,
    pub author_id: i32,
    /// Only absent on imported records; such books never match a category filter
    #[serde(default)]
    pub category_id: Option<i32>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct NewBook {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    pub publication_year: i32,
    #[validate(custom(function = "not_blank", message = "Language is required"))]
    pub language: String,
    #[validate(range(min = 1, message = "Page count must be positive"))]
    pub nb_pages: i32,
    pub id_author: i32,
    pub id_category: i32,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl NewBook {
    /// Build the stored record once an id has been assigned
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            publication_year: self.publication_year,
            language: self.language,
            nb_pages: self.nb_pages,
            author_id: self.id_author,
            category_id: Some(self.id_category),
        }
    }
}

/// Book listing parameters, as received from the caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub publication_year: Option<i32>,
    pub language: Option<String>,
    pub id_category: Option<i32>,
    pub recursive: Option<bool>,
}

impl BookQuery {
    /// Substitute defaults so the filter engine never sees absent values
    pub fn normalize(&self, default_page_size: usize) -> BookFilter {
        BookFilter {
            page: PageRequest::normalize(self.page, self.size, default_page_size),
            publication_year: self.publication_year,
            language: self.language.as_deref().map(str::to_lowercase),
            category: self.id_category,
            recursive: self.recursive.unwrap_or(false),
        }
    }
}

/// One page of books
#[derive(Debug, Clone, Serialize)]
pub struct BookPage {
    pub list: Vec<Book>,
    pub page_info: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book() -> NewBook {
        NewBook {
            title: "Dune".to_string(),
            publication_year: 1965,
            language: "EN".to_string(),
            nb_pages: 412,
            id_author: 1,
            id_category: 10,
        }
    }

    #[test]
    fn test_new_book_validation() {
        assert!(new_book().validate().is_ok());

        let mut book = new_book();
        book.title = String::new();
        assert!(book.validate().is_err());

        let mut book = new_book();
        book.nb_pages = 0;
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_fields_are_rejected() {
        let mut book = new_book();
        book.title = "   ".to_string();
        let errors = book.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));

        let mut book = new_book();
        book.language = " \t".to_string();
        let errors = book.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("language"));
    }

    #[test]
    fn test_into_book() {
        let book = new_book().into_book(7);
        assert_eq!(book.id, 7);
        assert_eq!(book.author_id, 1);
        assert_eq!(book.category_id, Some(10));
    }

    #[test]
    fn test_normalize_defaults() {
        let filter = BookQuery::default().normalize(10);
        assert_eq!(filter.page, PageRequest { page: 0, size: 10 });
        assert!(!filter.recursive);
        assert!(filter.language.is_none());
        assert!(filter.category.is_none());
    }

    #[test]
    fn test_normalize_lowercases_language() {
        let query = BookQuery {
            language: Some("EN".to_string()),
            size: Some(-3),
            page: Some(2),
            ..Default::default()
        };
        let filter = query.normalize(10);
        assert_eq!(filter.language.as_deref(), Some("en"));
        assert_eq!(filter.page, PageRequest { page: 2, size: 10 });
    }
}
