//! Catalog query and management service

use validator::Validate;

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::{
        Author, Book, BookPage, BookQuery, Category, NewBook, SearchPage, SearchQuery,
    },
    query::{self, CategoryTree, SearchKind},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    async fn category_tree(&self) -> AppResult<CategoryTree> {
        let categories = self.repository.all_categories().await?;
        Ok(CategoryTree::new(&categories, self.config.max_category_depth))
    }

    /// List books with optional year, language and category filters
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<BookPage> {
        let filter = query.normalize(self.config.default_page_size);
        tracing::debug!("Book listing filter: {:?}", filter);

        let books = self.repository.all_books().await?;
        // The hierarchy is only needed for category filtering
        let tree = match filter.category {
            Some(_) => self.category_tree().await?,
            None => CategoryTree::default(),
        };

        let (list, page_info) = query::list_books(books, &tree, &filter)?;
        tracing::debug!(
            "Book listing: {} of {} matches (page {}, size {})",
            list.len(),
            page_info.total,
            page_info.page,
            page_info.size
        );
        Ok(BookPage { list, page_info })
    }

    /// Books written by the given author, in catalog order
    pub async fn books_by_author(&self, id_author: i32) -> AppResult<Vec<Book>> {
        let books = self.repository.all_books().await?;
        Ok(books.into_iter().filter(|b| b.author_id == id_author).collect())
    }

    /// Search a keyword across books, authors and categories
    pub async fn search(&self, query: &SearchQuery) -> AppResult<SearchPage> {
        let filter = query.normalize(self.config.default_page_size)?;
        tracing::debug!("Search filter: {:?}", filter);

        if let SearchKind::Unrecognized(ref kind) = filter.kind {
            tracing::warn!("Unrecognized search type '{}', no results returned", kind);
        }

        let books = if filter.kind.includes_books() {
            self.repository.all_books().await?
        } else {
            Vec::new()
        };
        let authors = if filter.kind.includes_authors() {
            self.repository.all_authors().await?
        } else {
            Vec::new()
        };
        let categories = if filter.kind.includes_categories() {
            self.repository.all_categories().await?
        } else {
            Vec::new()
        };

        let (list, page_info) = query::search(&books, &authors, &categories, &filter);
        tracing::debug!("Search '{}': {} hits", filter.keyword, page_info.total);
        Ok(SearchPage { list, page_info })
    }

    /// Whether a book is filed under a category. Unknown books are never members.
    pub async fn is_in_category(&self, id_book: i32, id_category: i32, recursive: bool) -> AppResult<bool> {
        let Some(book) = self.repository.book_by_id(id_book).await? else {
            tracing::debug!("Membership check on unknown book {}", id_book);
            return Ok(false);
        };
        let tree = self.category_tree().await?;
        tree.is_in_category(&book, id_category, recursive)
    }

    pub async fn get_author(&self, id: i32) -> AppResult<Option<Author>> {
        self.repository.author_by_id(id).await
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Option<Book>> {
        self.repository.book_by_id(id).await
    }

    pub async fn get_category(&self, id: i32) -> AppResult<Option<Category>> {
        self.repository.category_by_id(id).await
    }

    /// Create a book. The referenced author and category must exist.
    pub async fn add_book(&self, book: NewBook) -> AppResult<Book> {
        book.validate()?;

        if self.repository.author_by_id(book.id_author).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Author not found with id: {}",
                book.id_author
            )));
        }
        if self.repository.category_by_id(book.id_category).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category not found with id: {}",
                book.id_category
            )));
        }

        let created = self.repository.insert_book(book).await?;
        tracing::info!("Created book id={} '{}'", created.id, created.title);
        Ok(created)
    }

    /// Delete an author together with all of their books.
    /// Returns false when the author does not exist.
    pub async fn delete_author(&self, id: i32) -> AppResult<bool> {
        if self.repository.author_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let removed = self.repository.delete_books_by_author(id).await?;
        if !self.repository.delete_author(id).await? {
            return Err(AppError::Internal(format!(
                "Author {} disappeared during deletion",
                id
            )));
        }
        tracing::info!("Deleted author id={} and {} book(s)", id, removed);
        Ok(true)
    }
}
