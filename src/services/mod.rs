//! Service layer for the insights application.
//!
//! This module contains the boundary with the record source:
//! - `RecordSource` trait for fetching raw user and post records
//! - `HttpRecordSource` backed by a configured HTTP client

mod source;

pub use source::{HttpRecordSource, RecordSource};
