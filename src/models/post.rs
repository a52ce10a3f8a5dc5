//! Post data structure.

use serde::{Deserialize, Serialize};

/// A post fetched from the post endpoint. Immutable after fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Unique post identifier
    pub id: u64,

    /// Identifier of the authoring user
    #[serde(rename = "userId")]
    pub user_id: u64,

    /// Post title
    pub title: String,

    /// Post body text
    pub body: String,
}
