//! In-memory catalog store

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::CatalogRepository;
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, Category, NewBook},
};

/// Initial catalog content, as stored in the seed file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl CatalogSeed {
    /// Read a seed from a JSON file
    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let seed: CatalogSeed = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded seed {}: {} authors, {} categories ({} roots), {} books",
            path.display(),
            seed.authors.len(),
            seed.categories.len(),
            seed.categories.iter().filter(|c| c.is_root()).count(),
            seed.books.len()
        );
        Ok(seed)
    }
}

#[derive(Debug, Default)]
struct CatalogData {
    authors: Vec<Author>,
    categories: Vec<Category>,
    books: Vec<Book>,
}

impl CatalogData {
    fn next_book_id(&self) -> AppResult<i32> {
        let last = self.books.iter().map(|b| b.id).max().unwrap_or(0);
        last.checked_add(1).ok_or_else(|| {
            AppError::DataIntegrity(format!("book id space exhausted after id {}", last))
        })
    }
}

/// Catalog held entirely in memory. Collections keep insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    data: RwLock<CatalogData>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: CatalogSeed) -> Self {
        Self {
            data: RwLock::new(CatalogData {
                authors: seed.authors,
                categories: seed.categories,
                books: seed.books,
            }),
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn all_authors(&self) -> AppResult<Vec<Author>> {
        Ok(self.data.read().await.authors.clone())
    }

    async fn all_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.data.read().await.books.clone())
    }

    async fn all_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.data.read().await.categories.clone())
    }

    async fn author_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        let data = self.data.read().await;
        Ok(data.authors.iter().find(|a| a.id == id).cloned())
    }

    async fn book_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let data = self.data.read().await;
        Ok(data.books.iter().find(|b| b.id == id).cloned())
    }

    async fn category_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        let data = self.data.read().await;
        Ok(data.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_book(&self, book: NewBook) -> AppResult<Book> {
        let mut data = self.data.write().await;
        let book = book.into_book(data.next_book_id()?);
        data.books.push(book.clone());
        Ok(book)
    }

    async fn delete_books_by_author(&self, author_id: i32) -> AppResult<usize> {
        let mut data = self.data.write().await;
        let before = data.books.len();
        data.books.retain(|b| b.author_id != author_id);
        Ok(before - data.books.len())
    }

    async fn delete_author(&self, id: i32) -> AppResult<bool> {
        let mut data = self.data.write().await;
        let before = data.authors.len();
        data.authors.retain(|a| a.id != id);
        Ok(data.authors.len() < before)
    }
}
