//! Type definitions for the blog service
//!
//! This module contains all type definitions organized by category.

/// Collection names
pub mod collection;
/// Stored record shapes
pub mod records;
/// System-wide error types
pub mod error;

// Re-export commonly used types for convenience
pub use collection::Collection;
pub use records::{
    BoardPost, BoardPostInput, Comment, Post, Profile, ProfileInput, Record, Stored, User,
};
pub use error::{Error, Result};
