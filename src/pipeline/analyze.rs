// src/pipeline/analyze.rs

//! Analysis stage: per-user post counts and globally duplicated titles.
//!
//! Both operations are pure scans over an already-joined user collection.
//! The missing-collection guard of the upstream contract survives as an
//! `Option` parameter: `None` is an invalid argument, an empty slice is a
//! valid collection yielding an empty or zero-valued report.

use std::collections::HashSet;

use crate::error::{AppError, Result};
use crate::models::User;

/// Produce one line per user reporting how many posts they authored.
///
/// Lines follow input order. O(n) in the number of users.
pub fn count_users_posts(users: Option<&[User]>) -> Result<Vec<String>> {
    let users = users.ok_or_else(|| AppError::invalid_argument("user collection is missing"))?;

    Ok(users
        .iter()
        .map(|user| format!("{} wrote {} posts", user.username, user.posts.len()))
        .collect())
}

/// Collect post titles that appear more than once across all users.
///
/// Each duplicated title is reported exactly once, in order of
/// first-detected duplication. A seen/flagged set pair keeps the scan
/// O(total posts): a title already flagged as duplicate is never
/// re-flagged.
pub fn repeated_titles(users: Option<&[User]>) -> Result<Vec<String>> {
    let users = users.ok_or_else(|| AppError::invalid_argument("user collection is missing"))?;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut flagged: HashSet<&str> = HashSet::new();
    let mut repeated = Vec::new();

    for user in users {
        for post in &user.posts {
            let title = post.title.as_str();
            if !seen.insert(title) && flagged.insert(title) {
                repeated.push(post.title.clone());
            }
        }
    }

    Ok(repeated)
}
