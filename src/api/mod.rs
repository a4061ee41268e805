//! # API Module
//!
//! HTTP interface of the blog service.
//!
//! ## Endpoints Overview
//!
//! ### System
//! - `GET /version` - API version, counted
//! - `GET /stats` - Request counters, counted
//!
//! ### Posts
//! - `POST /posts` - Create post (document store)
//! - `GET /posts/{id}` - Get post by string id (document store)
//! - `PUT /posts/{id}` - Replace board post by integer id
//! - `DELETE /posts/{id}` - Delete board post by integer id
//!
//! ### Comments, Users
//! - `POST /comments`, `GET /comments/{id}`
//! - `POST /users`, `GET /users/{id}`
//!
//! ### Profiles
//! - `POST /profiles?user_id=..` - Create profile from a JSON body
//! - `GET /profiles/{user_id}` - Get profile by owning user id

/// Request input extraction
pub mod extract;

/// HTTP request handlers
pub mod handlers;

/// Error responses
pub mod response;

/// HTTP server implementation
pub mod server;

// Re-export commonly used items
pub use server::{create_app, start_server};
