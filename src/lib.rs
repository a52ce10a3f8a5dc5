// src/lib.rs

//! insights: user/post report pipeline library

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
