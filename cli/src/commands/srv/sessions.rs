//! # Solace Chat Sessions
//!
//! File: cli/src/commands/srv/sessions.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Keeps one `Responder` per chat session, so the reply rotation of one
//! conversation never affects another. Sessions live in a bounded LRU map:
//! when it is full, the least recently active session is dropped and starts
//! fresh if it ever comes back.
//!
//! The store itself is not synchronized; the server wraps it in a mutex and
//! holds the lock only for the synchronous `respond` call.
//!
use crate::responder::{Reply, Responder, ResponderOptions};
use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::debug;

/// Bounded map from session id to that session's responder.
pub struct SessionStore {
    options: ResponderOptions,
    responders: LruCache<String, Responder>,
}

impl SessionStore {
    /// Creates a store holding at most `capacity` sessions (minimum 1).
    pub fn new(options: ResponderOptions, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            options,
            responders: LruCache::new(capacity),
        }
    }

    /// Responds within `session_id`'s conversation, creating it on first use.
    pub fn respond(&mut self, session_id: &str, message: &str) -> Reply {
        let key = session_id.to_string();
        if let Some(responder) = self.responders.get_mut(&key) {
            return responder.respond(message);
        }

        let mut responder = Responder::new(self.options.clone());
        let reply = responder.respond(message);
        if let Some((evicted, _)) = self.responders.push(key, responder) {
            debug!("Session store full, evicted session {}", evicted);
        }
        debug!("Started session {} ({} active)", session_id, self.responders.len());
        reply
    }

    pub fn len(&self) -> usize {
        self.responders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responders.is_empty()
    }

    #[cfg(test)]
    fn contains(&self, session_id: &str) -> bool {
        self.responders.contains(&session_id.to_string())
    }
}
