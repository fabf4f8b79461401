//! Category hierarchy resolution
//!
//! Categories reference their parent by id. Membership checks walk that
//! chain upward with an explicit step bound, so a cyclic data set is
//! reported instead of looping forever.

use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::{Book, Category},
};

/// Parent links of every known category
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    parents: HashMap<i32, Option<i32>>,
    max_depth: usize,
}

impl CategoryTree {
    pub fn new(categories: &[Category], max_depth: usize) -> Self {
        let parents = categories.iter().map(|c| (c.id, c.parent_id)).collect();
        Self { parents, max_depth }
    }

    pub fn contains(&self, id: i32) -> bool {
        self.parents.contains_key(&id)
    }

    fn parent_of(&self, id: i32) -> Option<i32> {
        self.parents.get(&id).copied().flatten()
    }

    /// Whether `book` is filed under `target`, directly or, when
    /// `recursive` is set, through any ancestor of its category.
    pub fn is_in_category(&self, book: &Book, target: i32, recursive: bool) -> AppResult<bool> {
        let Some(category_id) = book.category_id else {
            return Ok(false);
        };
        if category_id == target {
            return Ok(true);
        }
        if !recursive {
            return Ok(false);
        }
        self.descends_from(category_id, target)
    }

    /// Walk the ancestors of `category_id` looking for `target`.
    /// An acyclic chain never has more links than there are categories.
    pub fn descends_from(&self, category_id: i32, target: i32) -> AppResult<bool> {
        let limit = self.max_depth.min(self.parents.len());
        let mut current = self.parent_of(category_id);
        let mut steps = 0usize;

        while let Some(id) = current {
            if !self.contains(id) {
                // Dangling parent reference ends the chain
                return Ok(false);
            }
            steps += 1;
            if steps > limit {
                return Err(AppError::DataIntegrity(format!(
                    "category {} has a parent chain longer than {} (cycle or excessive depth)",
                    category_id, limit
                )));
            }
            if id == target {
                return Ok(true);
            }
            current = self.parent_of(id);
        }

        Ok(false)
    }
}
