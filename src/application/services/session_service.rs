//! Session lifecycle and per-session submission handling.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use crate::domain::entities::LinkRecord;
use crate::domain::registry::{LinkRegistry, UnknownCode};
use crate::domain::submission::{Outcome, SubmissionError, admit, validate_input};
use crate::utils::code_generator::{CodeGenerator, generate_session_id};

/// Errors raised by session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound(String),

    #[error("A submission is already pending")]
    SubmissionPending,

    #[error("Too many active sessions")]
    TooManySessions { limit: usize },
}

/// Whether a session is currently processing a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Pending,
}

/// One visitor's link registry plus its submission lock.
///
/// The submission lock is held from the moment a submission is accepted for
/// processing until its outcome is known, including the simulated latency.
/// While it is held, [`Session::state`] reports [`SubmissionState::Pending`]
/// and further submissions are refused.
pub struct Session {
    id: String,
    created_at: DateTime<Utc>,
    registry: RwLock<LinkRegistry>,
    submission: Mutex<()>,
    latency: Duration,
    started: Instant,
    /// Milliseconds after `started` of the last access.
    last_seen_ms: AtomicU64,
}

impl Session {
    /// Creates a session with an empty registry.
    pub fn new(id: String, generator: Arc<dyn CodeGenerator>, latency: Duration) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            registry: RwLock::new(LinkRegistry::new(generator)),
            submission: Mutex::new(()),
            latency,
            started: Instant::now(),
            last_seen_ms: AtomicU64::new(0),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn state(&self) -> SubmissionState {
        match self.submission.try_lock() {
            Ok(_) => SubmissionState::Idle,
            Err(_) => SubmissionState::Pending,
        }
    }

    /// Marks the session as used now.
    pub fn touch(&self) {
        let elapsed = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.last_seen_ms.store(elapsed, Ordering::Relaxed);
    }

    /// Time since the session was last used.
    pub fn idle_for(&self) -> Duration {
        let last_seen = Duration::from_millis(self.last_seen_ms.load(Ordering::Relaxed));
        self.started.elapsed().saturating_sub(last_seen)
    }

    /// Runs the submission workflow for `raw_input`.
    ///
    /// Input checks happen immediately, and so does the capacity check when
    /// the registry is already full. Otherwise a valid URL waits out the
    /// configured latency before the registry is asked to add it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SubmissionPending`] if another submission on
    /// this session has not settled yet. Rejections are not errors; they are
    /// reported as [`Outcome::Rejected`].
    pub async fn submit(&self, raw_input: &str) -> Result<Outcome, SessionError> {
        self.touch();

        let _pending = self.submission.try_lock().map_err(|_| {
            tracing::warn!(session = %self.id, "Submission refused, another one is pending");
            SessionError::SubmissionPending
        })?;

        let url = match validate_input(raw_input) {
            Ok(url) => url,
            Err(reason) => {
                tracing::debug!(session = %self.id, reason = %reason, "Submission rejected");
                return Ok(Outcome::Rejected(reason));
            }
        };

        if self.registry.read().await.is_full() {
            tracing::debug!(session = %self.id, "Submission rejected, registry full");
            return Ok(Outcome::Rejected(SubmissionError::CapacityExceeded));
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut registry = self.registry.write().await;
        let outcome = admit(&mut registry, url);

        match &outcome {
            Outcome::Accepted(record) => tracing::info!(
                session = %self.id,
                code = %record.short_code,
                size = registry.size(),
                "Link shortened"
            ),
            Outcome::Rejected(reason) => {
                tracing::debug!(session = %self.id, reason = %reason, "Submission rejected")
            }
        }

        self.touch();
        Ok(outcome)
    }

    /// Copy of the session's records in insertion order.
    pub async fn links(&self) -> Vec<LinkRecord> {
        self.registry.read().await.list().to_vec()
    }

    pub async fn size(&self) -> usize {
        self.registry.read().await.size()
    }

    pub async fn capacity(&self) -> usize {
        self.registry.read().await.capacity()
    }

    /// Forwards a click from the tracking collaborator to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCode`] if the code is not in this session.
    pub async fn record_click(
        &self,
        short_code: &str,
        location: Option<String>,
    ) -> Result<LinkRecord, UnknownCode> {
        self.registry
            .write()
            .await
            .record_click(short_code, location)
    }
}

/// Creates, looks up and destroys sessions.
///
/// Each session owns its registry; nothing is shared between sessions.
/// Sessions unused for longer than the idle timeout are evicted, both by
/// [`run_session_sweeper`] and on demand when the table is full.
pub struct SessionService {
    sessions: RwLock<HashMap<String, Arc<Session>>>,
    generator: Arc<dyn CodeGenerator>,
    latency: Duration,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl SessionService {
    /// Creates a new session service.
    ///
    /// # Arguments
    ///
    /// - `generator` - short code source shared by every session's registry
    /// - `latency` - simulated delay applied to each valid submission
    /// - `max_sessions` - upper bound on concurrently live sessions
    /// - `idle_timeout` - how long a session may go unused before eviction
    pub fn new(
        generator: Arc<dyn CodeGenerator>,
        latency: Duration,
        max_sessions: usize,
        idle_timeout: Duration,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            generator,
            latency,
            max_sessions,
            idle_timeout,
        }
    }

    /// Starts a new session with an empty registry.
    ///
    /// Idle sessions are evicted first when the table is full.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::TooManySessions`] when the limit is reached
    /// and no session is idle.
    pub async fn create(&self) -> Result<Arc<Session>, SessionError> {
        let mut sessions = self.sessions.write().await;

        if sessions.len() >= self.max_sessions {
            Self::evict_from(&mut sessions, self.idle_timeout);
        }

        if sessions.len() >= self.max_sessions {
            return Err(SessionError::TooManySessions {
                limit: self.max_sessions,
            });
        }

        let id = loop {
            let candidate = generate_session_id();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };

        let session = Arc::new(Session::new(
            id.clone(),
            self.generator.clone(),
            self.latency,
        ));
        sessions.insert(id, session.clone());

        tracing::info!(session = %session.id(), active = sessions.len(), "Session created");
        Ok(session)
    }

    /// Looks up a live session and marks it as used.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for unknown or destroyed sessions.
    pub async fn get(&self, id: &str) -> Result<Arc<Session>, SessionError> {
        let session = self
            .sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        session.touch();
        Ok(session)
    }

    /// Ends a session and drops its registry.
    ///
    /// A submission already in flight on the session still settles; its
    /// result is simply no longer reachable through this service.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for unknown or destroyed sessions.
    pub async fn destroy(&self, id: &str) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(id).is_none() {
            return Err(SessionError::NotFound(id.to_string()));
        }

        tracing::info!(session = %id, active = sessions.len(), "Session destroyed");
        Ok(())
    }

    /// Drops every session idle for longer than the timeout.
    ///
    /// Sessions with a pending submission are kept. Returns how many were
    /// evicted.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        Self::evict_from(&mut sessions, self.idle_timeout)
    }

    fn evict_from(sessions: &mut HashMap<String, Arc<Session>>, idle_timeout: Duration) -> usize {
        let before = sessions.len();
        sessions.retain(|_, session| {
            session.state() == SubmissionState::Pending || session.idle_for() <= idle_timeout
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, active = sessions.len(), "Idle sessions evicted");
        }
        evicted
    }

    /// Number of live sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }
}

/// Background task evicting idle sessions every `every`.
///
/// Runs until the process exits.
pub async fn run_session_sweeper(service: Arc<SessionService>, every: Duration) {
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        let evicted = service.evict_idle().await;
        tracing::debug!(evicted, "Session sweep finished");
    }
}
