//! Session registry: per-session mutual exclusion and the persistence seam.
//!
//! Sessions are independently mutable units; operations on different
//! sessions never block one another. Within a session, mutations are
//! serialized: `mutate` takes the session's write lock without waiting and
//! reports contention as the retryable `SessionBusy`.
//!
//! Mutations are compute-then-commit: the closure runs on a clone of the
//! session and the clone replaces the original only on `Ok`. A failed
//! operation can never leave a half-mutated session behind.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::{generate_slug, GameError, GameRng};
use crate::session::GameSession;

/// Persistence adapter interface.
///
/// The core never blocks on I/O; adapters commit snapshots after a
/// successful mutation. Saves are expected to be atomic per session.
pub trait SessionStore: Send + Sync {
    /// Load a full session snapshot by slug.
    fn load(&self, slug: &str) -> Result<GameSession, GameError>;

    /// Persist a session snapshot.
    fn save(&self, session: &GameSession) -> Result<(), GameError>;
}

/// In-memory `SessionStore`, used in tests and as the default backend.
#[derive(Default)]
pub struct MemoryStore {
    sessions: RwLock<FxHashMap<String, GameSession>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, slug: &str) -> Result<GameSession, GameError> {
        self.sessions
            .read()
            .get(slug)
            .cloned()
            .ok_or_else(|| GameError::SessionNotFound(slug.to_string()))
    }

    fn save(&self, session: &GameSession) -> Result<(), GameError> {
        self.sessions
            .write()
            .insert(session.slug().to_string(), session.clone());
        Ok(())
    }
}

/// Registry of live sessions, one lock per session.
pub struct SessionRegistry {
    sessions: RwLock<FxHashMap<String, Arc<RwLock<GameSession>>>>,
    slug_rng: parking_lot::Mutex<GameRng>,
}

impl SessionRegistry {
    /// Create an empty registry. Slug generation is seeded for
    /// reproducibility in tests.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            sessions: RwLock::new(FxHashMap::default()),
            slug_rng: parking_lot::Mutex::new(GameRng::new(seed)),
        }
    }

    /// Create and register a fresh lobby session, returning its slug.
    ///
    /// Slugs regenerate until unique among live sessions.
    pub fn create_session(&self, seed: u64) -> String {
        let mut sessions = self.sessions.write();
        let mut rng = self.slug_rng.lock();
        let slug = loop {
            let candidate = generate_slug(&mut rng);
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        let session = GameSession::new(slug.clone(), seed);
        sessions.insert(slug.clone(), Arc::new(RwLock::new(session)));
        info!(%slug, "session created");
        slug
    }

    /// Register an existing session (e.g. loaded from a store).
    ///
    /// Fails with `InvalidOperation` if the slug is already live.
    pub fn adopt(&self, session: GameSession) -> Result<(), GameError> {
        let mut sessions = self.sessions.write();
        if sessions.contains_key(session.slug()) {
            return Err(GameError::InvalidOperation("slug already registered"));
        }
        sessions.insert(
            session.slug().to_string(),
            Arc::new(RwLock::new(session)),
        );
        Ok(())
    }

    /// Whether a session is live under this slug.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.sessions.read().contains_key(slug)
    }

    /// Drop a session from the registry. Returns the final snapshot so the
    /// caller can archive it.
    pub fn remove(&self, slug: &str) -> Result<GameSession, GameError> {
        let handle = self
            .sessions
            .write()
            .remove(slug)
            .ok_or_else(|| GameError::SessionNotFound(slug.to_string()))?;
        let session = handle.read().clone();
        debug!(slug, "session removed");
        Ok(session)
    }

    /// Run a read-only closure against a consistent snapshot of a session.
    ///
    /// Reads may run concurrently with each other; they wait out any
    /// in-flight mutation rather than observing a partial one.
    pub fn read<R>(
        &self,
        slug: &str,
        f: impl FnOnce(&GameSession) -> R,
    ) -> Result<R, GameError> {
        let handle = self.handle(slug)?;
        let guard = handle.read();
        Ok(f(&guard))
    }

    /// Run a mutating closure against a session with compute-then-commit
    /// semantics.
    ///
    /// At most one mutation is in flight per session; contention surfaces
    /// as `SessionBusy` instead of blocking. On `Err` from the closure,
    /// the session is untouched.
    pub fn mutate<R>(
        &self,
        slug: &str,
        f: impl FnOnce(&mut GameSession) -> Result<R, GameError>,
    ) -> Result<R, GameError> {
        let handle = self.handle(slug)?;
        let mut guard = handle.try_write().ok_or(GameError::SessionBusy)?;

        let mut working = guard.clone();
        let out = f(&mut working)?;
        *guard = working;

        debug!(slug, "session mutated");
        Ok(out)
    }

    fn handle(&self, slug: &str) -> Result<Arc<RwLock<GameSession>>, GameError> {
        self.sessions
            .read()
            .get(slug)
            .cloned()
            .ok_or_else(|| GameError::SessionNotFound(slug.to_string()))
    }
}
