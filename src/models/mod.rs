//! Data models for the catalog

pub mod author;
pub mod book;
pub mod category;
pub mod search;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookPage, BookQuery, NewBook};
pub use category::Category;
pub use search::{SearchPage, SearchQuery, SearchResult};
