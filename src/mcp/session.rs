// ABOUTME: Bounded session registry for SSE session ids with LRU eviction
// ABOUTME: Replaces the write-only session map of earlier revisions with consultable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Session Registry
//!
//! Every SSE response carries a freshly issued session id. Earlier
//! revisions of this server wrote those ids into a map that nothing ever
//! read; this registry replaces that with explicit, bounded state: an LRU
//! keyed by session id, capacity-evicting so an id flood cannot grow
//! memory without bound. There is no persistent streaming yet, so entries
//! only record issuance metadata.

use chrono::{DateTime, Utc};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use uuid::Uuid;

/// Default maximum number of tracked sessions
const DEFAULT_CAPACITY: usize = 1024;

/// Metadata recorded at session issuance
#[derive(Debug, Clone)]
pub struct SessionInfo {
    /// When the session id was issued
    pub created_at: DateTime<Utc>,
}

/// Bounded registry of issued SSE session ids
pub struct SessionRegistry {
    sessions: Mutex<LruCache<String, SessionInfo>>,
}

impl SessionRegistry {
    /// Create a registry with the given capacity (minimum 1)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Issue a fresh session id and record it
    #[must_use]
    pub fn issue(&self) -> String {
        let id = Uuid::new_v4().to_string();
        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.put(
                id.clone(),
                SessionInfo {
                    created_at: Utc::now(),
                },
            );
        }
        id
    }

    /// Whether a session id is currently tracked
    #[must_use]
    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions
            .lock()
            .map(|sessions| sessions.contains(session_id))
            .unwrap_or(false)
    }

    /// Number of tracked sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_records_session() {
        let registry = SessionRegistry::default();
        let id = registry.issue();
        assert!(registry.contains(&id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = SessionRegistry::default();
        assert_ne!(registry.issue(), registry.issue());
    }

    #[test]
    fn test_capacity_eviction() {
        let registry = SessionRegistry::new(2);
        let first = registry.issue();
        let _second = registry.issue();
        let _third = registry.issue();
        assert_eq!(registry.len(), 2);
        assert!(!registry.contains(&first));
    }
}
