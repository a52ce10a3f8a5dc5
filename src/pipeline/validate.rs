// src/pipeline/validate.rs

//! Structural validation of fetched records.
//!
//! Runs on the raw JSON records before typed decoding, so a structurally
//! incompatible source (e.g. a todos endpoint answering where a user
//! endpoint was expected) surfaces as a data-integrity failure instead of
//! a bare deserialization error.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{Post, User};

/// Fields every raw user record must carry.
const USER_REQUIRED: &[&str] = &[
    "id", "name", "email", "address", "phone", "website", "company",
];

/// Fields every raw post record must carry.
const POST_REQUIRED: &[&str] = &["title", "userId", "body", "id"];

/// Check that every raw user record is structurally complete.
pub fn validate_users(records: &[Value]) -> Result<()> {
    if records.iter().all(|r| has_required(r, USER_REQUIRED)) {
        Ok(())
    } else {
        Err(AppError::integrity(
            "Users fetched from the API do not meet the requirements",
        ))
    }
}

/// Check that every raw post record is structurally complete.
pub fn validate_posts(records: &[Value]) -> Result<()> {
    if records.iter().all(|r| has_required(r, POST_REQUIRED)) {
        Ok(())
    } else {
        Err(AppError::integrity(
            "Posts fetched from the API do not meet the requirements",
        ))
    }
}

/// Decode validated raw user records into typed users.
pub fn decode_users(records: Vec<Value>) -> Result<Vec<User>> {
    Ok(serde_json::from_value(Value::Array(records))?)
}

/// Decode validated raw post records into typed posts.
pub fn decode_posts(records: Vec<Value>) -> Result<Vec<Post>> {
    Ok(serde_json::from_value(Value::Array(records))?)
}

/// A record is complete when every required field is present and truthy.
fn has_required(record: &Value, fields: &[&str]) -> bool {
    fields.iter().all(|field| {
        record
            .get(field)
            .map(is_truthy)
            .unwrap_or(false)
    })
}

/// Truthiness in the sense of the upstream contract: empty strings,
/// zero numbers, null, and false all count as missing.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
