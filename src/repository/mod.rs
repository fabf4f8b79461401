//! Repository layer: entity accessors consumed by the services

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Author, Book, Category, NewBook},
};

pub use memory::{CatalogSeed, InMemoryCatalog};

/// Source of catalog entities. Collection accessors return owned snapshots
/// in a stable order; the query engine never mutates them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn all_authors(&self) -> AppResult<Vec<Author>>;

    async fn all_books(&self) -> AppResult<Vec<Book>>;

    async fn all_categories(&self) -> AppResult<Vec<Category>>;

    async fn author_by_id(&self, id: i32) -> AppResult<Option<Author>>;

    async fn book_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    async fn category_by_id(&self, id: i32) -> AppResult<Option<Category>>;

    /// Store a new book under a freshly assigned id
    async fn insert_book(&self, book: NewBook) -> AppResult<Book>;

    /// Remove every book written by `author_id`, returning how many were removed
    async fn delete_books_by_author(&self, author_id: i32) -> AppResult<usize>;

    /// Remove the author record only. Returns false if it did not exist.
    async fn delete_author(&self, id: i32) -> AppResult<bool>;
}

/// Repository handle shared by all services
pub type Repository = Arc<dyn CatalogRepository>;
