// src/pipeline/pipeline.rs

//! Full report pipeline: fetch -> validate -> decode -> join -> analyze.

use chrono::Utc;

use crate::error::Result;
use crate::services::RecordSource;
use crate::utils::log_duration;

use super::analyze::{count_users_posts, repeated_titles};
use super::join::attach_posts;
use super::neighbors::find_closest_user;
use super::validate::{decode_posts, decode_users, validate_posts, validate_users};

/// The three derived reports.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Per-user post count lines, input order
    pub counts: Vec<String>,
    /// Titles appearing more than once across all users
    pub repeated: Vec<String>,
    /// Nearest-neighbor line per user, input order
    pub neighbors: Vec<String>,
}

/// Run the full pipeline against a record source.
pub async fn run_report(source: &dyn RecordSource) -> Result<Report> {
    let started = Utc::now();

    let (raw_users, raw_posts) =
        futures::try_join!(source.fetch_users(), source.fetch_posts())?;
    log::info!(
        "Fetched {} user and {} post records",
        raw_users.len(),
        raw_posts.len()
    );

    validate_users(&raw_users)?;
    validate_posts(&raw_posts)?;

    let mut users = decode_users(raw_users)?;
    let posts = decode_posts(raw_posts)?;

    attach_posts(&mut users, posts);

    let report = Report {
        counts: count_users_posts(Some(&users))?,
        repeated: repeated_titles(Some(&users))?,
        neighbors: find_closest_user(Some(&users))?,
    };

    log_duration("report pipeline", started, Utc::now());
    Ok(report)
}

/// Fetch and validate both collections without analyzing them.
///
/// Confirms that the configured endpoints serve structurally complete
/// records.
pub async fn run_validate(source: &dyn RecordSource) -> Result<(usize, usize)> {
    let (raw_users, raw_posts) =
        futures::try_join!(source.fetch_users(), source.fetch_posts())?;

    validate_users(&raw_users)?;
    validate_posts(&raw_posts)?;

    Ok((raw_users.len(), raw_posts.len()))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::error::AppError;

    /// In-memory record source for exercising the pipeline offline.
    struct StaticSource {
        users: Vec<Value>,
        posts: Vec<Value>,
    }

    #[async_trait]
    impl RecordSource for StaticSource {
        async fn fetch_users(&self) -> Result<Vec<Value>> {
            Ok(self.users.clone())
        }

        async fn fetch_posts(&self) -> Result<Vec<Value>> {
            Ok(self.posts.clone())
        }
    }

    /// Record source whose post endpoint always fails.
    struct BrokenPostsSource;

    #[async_trait]
    impl RecordSource for BrokenPostsSource {
        async fn fetch_users(&self) -> Result<Vec<Value>> {
            Ok(Vec::new())
        }

        async fn fetch_posts(&self) -> Result<Vec<Value>> {
            Err(AppError::fetch("posts"))
        }
    }

    fn raw_user(id: u64, username: &str, lat: f64) -> Value {
        json!({
            "id": id,
            "name": format!("User {id}"),
            "username": username,
            "email": format!("{username}@example.com"),
            "address": {
                "street": "Main St",
                "suite": "Apt. 1",
                "city": "Springfield",
                "zipcode": "00000",
                "geo": { "lat": lat.to_string(), "lng": "0.0" }
            },
            "phone": "555-0100",
            "website": "example.com",
            "company": {
                "name": "Acme",
                "catchPhrase": "Do things",
                "bs": "synergy"
            }
        })
    }

    fn raw_post(id: u64, user_id: u64, title: &str) -> Value {
        json!({ "userId": user_id, "id": id, "title": title, "body": "text" })
    }

    #[tokio::test]
    async fn test_full_pipeline_over_static_source() {
        let source = StaticSource {
            users: vec![
                raw_user(1, "ann", 0.00),
                raw_user(2, "bob", 0.05),
                raw_user(3, "cat", 0.08),
            ],
            posts: vec![
                raw_post(10, 1, "first"),
                raw_post(11, 1, "shared"),
                raw_post(12, 2, "shared"),
            ],
        };

        let report = run_report(&source).await.unwrap();

        assert_eq!(
            report.counts,
            vec![
                "ann wrote 2 posts",
                "bob wrote 1 posts",
                "cat wrote 0 posts",
            ]
        );
        assert_eq!(report.repeated, vec!["shared"]);
        assert_eq!(report.neighbors.len(), 3);
        assert_eq!(report.neighbors[0], "Closest to ann lives: bob");
    }

    #[tokio::test]
    async fn test_empty_collections_yield_empty_report() {
        let source = StaticSource {
            users: Vec::new(),
            posts: Vec::new(),
        };

        let report = run_report(&source).await.unwrap();
        assert!(report.counts.is_empty());
        assert!(report.repeated.is_empty());
        assert!(report.neighbors.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let err = run_report(&BrokenPostsSource).await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot get posts from API");
    }

    #[tokio::test]
    async fn test_integrity_failure_stops_pipeline() {
        let source = StaticSource {
            users: vec![json!({ "id": 1, "title": "not a user" })],
            posts: Vec::new(),
        };

        let err = run_report(&source).await.unwrap_err();
        assert!(matches!(err, AppError::Integrity(_)));
    }

    #[tokio::test]
    async fn test_run_validate_counts_records() {
        let source = StaticSource {
            users: vec![raw_user(1, "ann", 0.0)],
            posts: vec![raw_post(10, 1, "first"), raw_post(11, 1, "second")],
        };

        let (users, posts) = run_validate(&source).await.unwrap();
        assert_eq!(users, 1);
        assert_eq!(posts, 2);
    }
}
