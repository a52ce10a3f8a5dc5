// src/models/mod.rs

//! Domain models for the insights application.

mod post;
mod user;

// Re-export all public types
pub use post::Post;
pub use user::{Address, Company, Geolocation, User};
