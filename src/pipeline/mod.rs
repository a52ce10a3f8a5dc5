//! Pipeline stages for the report run.
//!
//! - `validate`: structural checks on raw fetched records
//! - `join`: attach posts to their authoring users
//! - `analyze`: post counts and duplicated titles
//! - `neighbors`: nearest user by great-circle distance
//! - `pipeline`: orchestration of a full run

pub mod analyze;
pub mod join;
pub mod neighbors;
pub mod pipeline;
pub mod validate;

pub use analyze::{count_users_posts, repeated_titles};
pub use join::attach_posts;
pub use neighbors::{find_closest_user, haversine_km};
pub use pipeline::{Report, run_report, run_validate};
pub use validate::{decode_posts, decode_users, validate_posts, validate_users};
