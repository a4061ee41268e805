//! HTTP request handlers for the blog service API
//!
//! Posts come in two flavours that share the `/posts` path:
//! - `POST /posts` and `GET /posts/{id}` use the document store and opaque
//!   string ids
//! - `PUT /posts/{id}` and `DELETE /posts/{id}` use the in-memory board and
//!   integer ids
//!
//! The two never see each other's records.

use axum::{
    extract::{Path, State},
    http::Uri,
    response::Json,
};
use serde::{Deserialize, Serialize};

use super::extract::{parse_board_id, query, Input};
use crate::core::AppState;
use crate::storage::board;
use crate::system::{Counter, CounterSnapshot};
use crate::types::{
    BoardPost, BoardPostInput, Comment, Error, Post, Profile, ProfileInput, Result, Stored, User,
};

/// API version reported by `/version`
pub const API_VERSION: &str = "1.0";

/// Version response
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    /// API version
    pub version: &'static str,
}

/// Confirmation message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: &'static str,
}

/// Query parameters accepted by profile creation
#[derive(Debug, Default, Deserialize)]
pub struct ProfileOwner {
    /// Owning user id
    pub user_id: Option<String>,
}

// System handlers

/// Report the API version
pub async fn read_version(State(state): State<AppState>) -> Json<VersionResponse> {
    state.counters.increment(Counter::Version);
    Json(VersionResponse {
        version: API_VERSION,
    })
}

/// Report the request counters, including this call
pub async fn read_stats(State(state): State<AppState>) -> Json<CounterSnapshot> {
    state.counters.increment(Counter::Stats);
    Json(state.counters.snapshot())
}

// Document-store posts

/// Read a document-store post
pub async fn read_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Stored<Post>>> {
    state.repository::<Post>().get(&post_id).await.map(Json)
}

/// Create a document-store post
pub async fn create_post(
    State(state): State<AppState>,
    Input(post): Input<Post>,
) -> Result<Json<Stored<Post>>> {
    state.repository::<Post>().create(post).await.map(Json)
}

// Board posts

/// Replace a board post. The posts counter moves even when the post is missing.
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Input(input): Input<BoardPostInput>,
) -> Result<Json<BoardPost>> {
    let id = parse_board_id(&post_id)?;
    state.counters.increment(Counter::Posts);
    let id = id.ok_or_else(|| Error::not_found(board::NOT_FOUND))?;
    let post = state.board.update(id, input)?;
    tracing::info!(id, "board post updated");
    Ok(Json(post))
}

/// Remove a board post. The posts counter moves even when the post is missing.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_board_id(&post_id)?;
    state.counters.increment(Counter::Posts);
    let id = id.ok_or_else(|| Error::not_found(board::NOT_FOUND))?;
    state.board.delete(id)?;
    tracing::info!(id, "board post deleted");
    Ok(Json(MessageResponse {
        message: "Post deleted",
    }))
}

// Comments

/// Create a comment
pub async fn create_comment(
    State(state): State<AppState>,
    Input(comment): Input<Comment>,
) -> Result<Json<Stored<Comment>>> {
    state.repository::<Comment>().create(comment).await.map(Json)
}

/// Read a comment
pub async fn read_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<Json<Stored<Comment>>> {
    state.repository::<Comment>().get(&comment_id).await.map(Json)
}

// Users

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    Input(user): Input<User>,
) -> Result<Json<Stored<User>>> {
    state.repository::<User>().create(user).await.map(Json)
}

/// Read a user
pub async fn read_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Stored<User>>> {
    state.repository::<User>().get(&user_id).await.map(Json)
}

// Profiles

/// Create a profile for a user.
///
/// `user_id` comes from the query string, falling back to the body.
pub async fn create_profile(
    State(state): State<AppState>,
    uri: Uri,
    Input(mut input): Input<ProfileInput>,
) -> Result<Json<Stored<Profile>>> {
    let owner: ProfileOwner = query(&uri)?;
    let user_id = owner
        .user_id
        .or_else(|| input.user_id.take())
        .ok_or_else(|| Error::invalid_input("missing field `user_id`"))?;
    state
        .repository::<Profile>()
        .create(input.into_profile(user_id))
        .await
        .map(Json)
}

/// Read the profile belonging to a user
pub async fn read_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Stored<Profile>>> {
    state
        .repository::<Profile>()
        .find_by("user_id", &user_id)
        .await
        .map(Json)
}
