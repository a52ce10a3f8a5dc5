// src/pipeline/join.rs

//! Join stage: attach each post to its authoring user.
//!
//! The scan is a grouped fold over runs of consecutive posts sharing a
//! `user_id`. Run-grouping is only correct on input grouped by owner, so
//! the posts are stable-sorted by `user_id` first; stability preserves
//! the source order of each user's posts.

use crate::models::{Post, User};

/// Attach posts to their owning users, replacing any previous assignment.
///
/// Replace semantics: every user's post sequence is cleared before
/// distribution, so re-running with an empty post collection empties all
/// sequences. Posts whose `user_id` matches no user are dropped. Only the
/// `posts` field of each user is touched.
pub fn attach_posts(users: &mut [User], mut posts: Vec<Post>) {
    for user in users.iter_mut() {
        user.posts.clear();
    }

    posts.sort_by_key(|post| post.user_id);

    // 0 is a sentinel for "no run yet"; flushing it is a no-op since the
    // run is still empty.
    let mut current_owner: u64 = 0;
    let mut run: Vec<Post> = Vec::new();

    for post in posts {
        if post.user_id != current_owner {
            flush_run(users, current_owner, &mut run);
            current_owner = post.user_id;
        }
        run.push(post);
    }
    flush_run(users, current_owner, &mut run);
}

/// Hand the accumulated run to the user owning it, if any.
fn flush_run(users: &mut [User], owner: u64, run: &mut Vec<Post>) {
    if run.is_empty() {
        return;
    }
    match users.iter_mut().find(|user| user.id == owner) {
        Some(user) => user.posts = std::mem::take(run),
        None => run.clear(),
    }
}
