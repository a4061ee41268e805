//! Record shapes stored in the document store and the post board
//!
//! Every create input is a typed struct: serde enforces presence and type of
//! each field, so a request missing `title` or sending `age: -1` never reaches
//! the store.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::Collection;

/// A type persisted in one document-store collection
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection holding records of this type
    const COLLECTION: Collection;

    /// Message returned when a lookup misses
    const NOT_FOUND: &'static str;
}

/// A record together with its store-assigned identifier.
///
/// Serializes flat: `{"id": "...", "title": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stored<T> {
    /// Identifier assigned by the store on insert
    pub id: String,
    /// The record fields
    #[serde(flatten)]
    pub record: T,
}

/// Post kept in the document store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Author (not checked against users)
    pub user_id: String,
}

impl Record for Post {
    const COLLECTION: Collection = Collection::Posts;
    const NOT_FOUND: &'static str = "Post not found";
}

/// Comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Commented post (not checked against posts)
    pub post_id: String,
    /// Comment body
    pub content: String,
    /// Author (not checked against users)
    pub user_id: String,
}

impl Record for Comment {
    const COLLECTION: Collection = Collection::Comments;
    const NOT_FOUND: &'static str = "Comment not found";
}

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, not unique
    pub username: String,
    /// Contact address, not validated
    pub email: String,
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;
    const NOT_FOUND: &'static str = "User not found";
}

/// Profile attached to a user id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Age in years
    pub age: u32,
    /// Owning user, the lookup key for reads
    pub user_id: String,
}

impl Record for Profile {
    const COLLECTION: Collection = Collection::Profiles;
    const NOT_FOUND: &'static str = "Profile not found";
}

/// Profile payload accepted on create
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInput {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Age in years; negative values fail to deserialize
    pub age: u32,
    /// Owner, used only when the query string carries none
    #[serde(default)]
    pub user_id: Option<String>,
}

impl ProfileInput {
    /// Merge the payload with its owning user id
    pub fn into_profile(self, user_id: String) -> Profile {
        Profile {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            user_id,
        }
    }
}

/// Post kept in the in-memory board, keyed by a caller-chosen integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPost {
    /// Board key
    pub id: i64,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
}

/// Replacement fields for a board post
#[derive(Debug, Clone, Deserialize)]
pub struct BoardPostInput {
    /// New title
    pub title: String,
    /// New body
    pub content: String,
}
