//! Author model

use serde::{Deserialize, Serialize};

/// Author of one or more books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}
