//! In-memory query engine
//!
//! Pure, synchronous functions over full entity collections: pagination
//! arithmetic, category hierarchy resolution, book filtering and federated
//! keyword search. Nothing here performs I/O or holds state between calls.

pub mod filter;
pub mod hierarchy;
pub mod pagination;
pub mod search;

pub use filter::{list_books, BookFilter};
pub use hierarchy::CategoryTree;
pub use pagination::{compute_page_info, paginate, PageInfo, PageRequest};
pub use search::{search, SearchFilter, SearchKind};
