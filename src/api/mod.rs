//! Request dispatch
//!
//! Decodes JSON requests, routes them to the catalog service and encodes
//! the outcome as a JSON response.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{BookQuery, NewBook, SearchQuery},
    services::Services,
};

/// Catalog request, tagged by `op`
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CatalogRequest {
    Books(BookQuery),
    BooksByAuthor { id_author: i32 },
    Search(SearchQuery),
    InCategory {
        id_book: i32,
        id_category: i32,
        #[serde(default)]
        recursive: Option<bool>,
    },
    Author { id: i32 },
    Book { id: i32 },
    Category { id: i32 },
    AddBook { book: NewBook },
    DeleteAuthor { id: i32 },
}

impl CatalogRequest {
    /// Decode a request from its JSON text
    pub fn parse(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::BadRequest(format!("Invalid request: {}", e)))
    }
}

/// Run one request against the services
pub async fn dispatch(services: &Services, request: CatalogRequest) -> AppResult<Value> {
    let catalog = &services.catalog;
    let data = match request {
        CatalogRequest::Books(query) => serde_json::to_value(catalog.list_books(&query).await?)?,
        CatalogRequest::BooksByAuthor { id_author } => {
            serde_json::to_value(catalog.books_by_author(id_author).await?)?
        }
        CatalogRequest::Search(query) => serde_json::to_value(catalog.search(&query).await?)?,
        CatalogRequest::InCategory {
            id_book,
            id_category,
            recursive,
        } => {
            let member = catalog
                .is_in_category(id_book, id_category, recursive.unwrap_or(false))
                .await?;
            Value::Bool(member)
        }
        CatalogRequest::Author { id } => serde_json::to_value(catalog.get_author(id).await?)?,
        CatalogRequest::Book { id } => serde_json::to_value(catalog.get_book(id).await?)?,
        CatalogRequest::Category { id } => serde_json::to_value(catalog.get_category(id).await?)?,
        CatalogRequest::AddBook { book } => serde_json::to_value(catalog.add_book(book).await?)?,
        CatalogRequest::DeleteAuthor { id } => Value::Bool(catalog.delete_author(id).await?),
    };
    Ok(data)
}

/// Handle one raw request line and always produce a response document
pub async fn handle(services: &Services, raw: &str) -> Value {
    let outcome = match CatalogRequest::parse(raw) {
        Ok(request) => dispatch(services, request).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(data) => json!({ "data": data }),
        Err(e) => {
            tracing::debug!("Request failed: {}", e);
            json!(e.to_response())
        }
    }
}
