//! # Atrium Common Library
//!
//! Shared code for the Atrium content gateway:
//! - Error types
//! - Configuration loading
//! - Text normalization for CMS field values
//! - Tagged TTL response cache
//! - WordPress REST client and item types
//! - Invalidation rule tables

pub mod cache;
pub mod config;
pub mod error;
pub mod normalize;
pub mod revalidation;
pub mod wordpress;

pub use error::{Error, Result};
