//! In-process store of merged user info, keyed by username.

use std::sync::Arc;

use dashmap::DashMap;

use crate::models::UserInfo;

/// Concurrent username → [`UserInfo`] map.
///
/// Keys are matched exactly (case-sensitive). Entries are never evicted.
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct UserInfoCache {
    entries: Arc<DashMap<String, UserInfo>>,
}

impl UserInfoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached info for `username`, if any.
    pub fn get(&self, username: &str) -> Option<UserInfo> {
        self.entries.get(username).map(|entry| entry.value().clone())
    }

    /// Store `info` under `username`, replacing any previous value.
    pub fn insert(&self, username: &str, info: UserInfo) {
        self.entries.insert(username.to_string(), info);
    }

    pub fn contains(&self, username: &str) -> bool {
        self.entries.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
