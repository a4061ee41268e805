//! Named document collections

use std::fmt;

/// The four collections the service reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Document-store posts
    Posts,
    /// Comments on posts
    Comments,
    /// User accounts
    Users,
    /// Per-user profiles, looked up by `user_id`
    Profiles,
}

impl Collection {
    /// Every collection, in provisioning order
    pub const ALL: [Collection; 4] = [
        Collection::Posts,
        Collection::Comments,
        Collection::Users,
        Collection::Profiles,
    ];

    /// Collection name as stored in the database
    pub fn name(self) -> &'static str {
        match self {
            Collection::Posts => "posts",
            Collection::Comments => "comments",
            Collection::Users => "users",
            Collection::Profiles => "profiles",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
