// ABOUTME: In-process conversation state keyed by session id
// ABOUTME: Serializes turns within a session, runs sessions in parallel, and evicts idle sessions lazily
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Session store
//!
//! Each session's [`ConversationState`] sits behind its own async mutex.
//! [`SessionStore::begin_turn`] hands out an owned guard, so a second turn of
//! the same session waits until the first one finishes while other sessions
//! are never blocked. The map shard lock is released before awaiting the
//! session lock.
//!
//! Sessions untouched for longer than the idle timeout are dropped lazily:
//! once the map grows past the cleanup threshold, the next turn sweeps it.
//! A session that is locked or awaited by a turn is never dropped.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;
use uuid::Uuid;

use crate::constants::defaults::{SESSION_CLEANUP_THRESHOLD, SESSION_IDLE_TIMEOUT_SECS};
use crate::models::ConversationState;

/// Exclusive access to one session for the length of a turn
pub type TurnGuard = OwnedMutexGuard<ConversationState>;

#[derive(Debug)]
struct SessionSlot {
    state: Arc<Mutex<ConversationState>>,
    last_touched: Instant,
}

impl SessionSlot {
    /// A turn holds the lock or a clone of the mutex while waiting for it
    fn in_use(&self) -> bool {
        Arc::strong_count(&self.state) > 1 || self.state.try_lock().is_err()
    }
}

/// Conversation states of the local turn API
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, SessionSlot>,
    idle_timeout: Duration,
    cleanup_threshold: usize,
}

impl SessionStore {
    /// Store with the default idle timeout and cleanup threshold
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(
            Duration::from_secs(SESSION_IDLE_TIMEOUT_SECS),
            SESSION_CLEANUP_THRESHOLD,
        )
    }

    /// Store evicting sessions idle for `idle_timeout` once more than
    /// `cleanup_threshold` sessions exist
    #[must_use]
    pub fn with_limits(idle_timeout: Duration, cleanup_threshold: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
            cleanup_threshold,
        }
    }

    /// Fresh random session id
    #[must_use]
    pub fn new_session_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Lock `session_id` for one turn, creating the session when unknown
    pub async fn begin_turn(&self, session_id: &str) -> TurnGuard {
        // Lazy cleanup: only when the map is growing, before taking a shard lock
        if self.sessions.len() > self.cleanup_threshold {
            self.evict_idle();
        }
        let slot = self.session_slot(session_id);
        slot.lock_owned().await
    }

    /// Copy of the current state, waiting for any running turn to finish
    pub async fn snapshot(&self, session_id: &str) -> Option<ConversationState> {
        let slot = self
            .sessions
            .get(session_id)
            .map(|entry| Arc::clone(&entry.value().state))?;
        let state = slot.lock().await;
        Some(state.clone())
    }

    /// Drop a session; returns whether it existed
    pub fn end_session(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Drop every idle session that no turn is using; returns how many went
    pub fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, slot| {
            slot.in_use() || now.duration_since(slot.last_touched) < self.idle_timeout
        });
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            debug!(evicted, remaining = self.sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    /// Number of known sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session exists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn session_slot(&self, session_id: &str) -> Arc<Mutex<ConversationState>> {
        let mut entry = self
            .sessions
            .entry(session_id.to_owned())
            .or_insert_with(|| {
                debug!(session.id = %session_id, "Creating conversation session");
                SessionSlot {
                    state: Arc::new(Mutex::new(ConversationState::new(session_id))),
                    last_touched: Instant::now(),
                }
            });
        entry.last_touched = Instant::now();
        Arc::clone(&entry.state)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
