//! In-memory post board
//!
//! Integer-keyed posts that live beside the document store. The board serves
//! `PUT /posts/{id}` and `DELETE /posts/{id}` only and shares no identifiers
//! with document-store posts. Contents are lost on restart.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::types::{BoardPost, BoardPostInput, Error, Result};

/// Message for a board key that holds no post
pub(crate) const NOT_FOUND: &str = "Post not found";

/// Mutex-guarded map of board posts
///
/// Every operation takes the lock once for its whole check-and-mutate, so
/// concurrent calls on the same key serialize.
pub struct PostBoard {
    posts: Mutex<BTreeMap<i64, BoardPost>>,
}

impl PostBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(BTreeMap::new()),
        }
    }

    /// Create the board with the two startup posts (ids 1 and 2)
    pub fn seeded() -> Self {
        let board = Self::new();
        {
            let mut posts = board.posts.lock();
            for (id, title, content) in [
                (1, "First post", "This is the content of the first post"),
                (2, "Second post", "This is the content of the second post"),
            ] {
                posts.insert(
                    id,
                    BoardPost {
                        id,
                        title: title.to_string(),
                        content: content.to_string(),
                    },
                );
            }
        }
        board
    }

    /// Read a post
    #[cfg(test)]
    pub(crate) fn get(&self, id: i64) -> Option<BoardPost> {
        self.posts.lock().get(&id).cloned()
    }

    /// Replace an existing post entirely
    pub fn update(&self, id: i64, input: BoardPostInput) -> Result<BoardPost> {
        let mut posts = self.posts.lock();
        let post = posts.get_mut(&id).ok_or_else(|| Error::not_found(NOT_FOUND))?;
        *post = BoardPost {
            id,
            title: input.title,
            content: input.content,
        };
        Ok(post.clone())
    }

    /// Remove an existing post
    pub fn delete(&self, id: i64) -> Result<BoardPost> {
        self.posts
            .lock()
            .remove(&id)
            .ok_or_else(|| Error::not_found(NOT_FOUND))
    }

    /// Number of posts on the board
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.posts.lock().len()
    }

}

impl Default for PostBoard {
    fn default() -> Self {
        Self::new()
    }
}
