//! Lifecycle of decoded-audio playback sessions.
//!
//! Each file selection is one load attempt that ends `Active` or `Failed`.
//! At most one session is active; the previous handle is released before the
//! next one is even constructed, so two sessions never feed the analyser at
//! once. A failure before that point leaves the playing session alone.

use crate::error::AudioLoadError;

/// Platform handle for a playing session (e.g. a buffer source node).
pub trait PlaybackHandle {
    /// Stop playback and detach from the audio graph. Called exactly once.
    fn release(&mut self);
}

/// Identifies one load attempt; newer tickets supersede older ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Loading,
    Active,
    Failed(AudioLoadError),
}

/// What the caller must do after a load attempt completes.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The new session is playing; `replaced` tells whether an older one was released.
    Activated { replaced: bool },
    /// Show exactly one notification; any active session is untouched.
    /// Also returned for failures of superseded attempts.
    Failed(AudioLoadError),
    /// A newer load was started meanwhile; the decoded result was discarded.
    Superseded,
}

pub struct SessionManager<H: PlaybackHandle> {
    active: Option<H>,
    state: SessionState,
    latest: u64,
}

impl<H: PlaybackHandle> Default for SessionManager<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: PlaybackHandle> SessionManager<H> {
    pub fn new() -> Self {
        Self {
            active: None,
            state: SessionState::Idle,
            latest: 0,
        }
    }

    /// State of the most recent load attempt. A failed attempt reports
    /// `Failed` even while an older session keeps playing.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn active(&self) -> Option<&H> {
        self.active.as_ref()
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start a load attempt. Any earlier pending attempt becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest += 1;
        self.state = SessionState::Loading;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Finish a load attempt.
    ///
    /// `decoded` is the outcome of reading and decoding. On success the
    /// previous session is released first, then `start` builds and starts the
    /// new one. Stale tickets drop decoded data without starting anything, but
    /// a stale failure is still reported as `Failed` so it gets its notification.
    pub fn complete<T, F>(
        &mut self,
        ticket: LoadTicket,
        decoded: Result<T, AudioLoadError>,
        start: F,
    ) -> LoadOutcome
    where
        F: FnOnce(T) -> Result<H, AudioLoadError>,
    {
        let current = self.is_current(ticket);
        let decoded = match decoded {
            Ok(d) => d,
            Err(err) if current => return self.fail(err),
            // A newer load owns `state`, but the user still hears about this one.
            Err(err) => return LoadOutcome::Failed(err),
        };
        if !current {
            log::debug!("[audio] load #{} superseded by #{}", ticket.0, self.latest);
            return LoadOutcome::Superseded;
        }
        let replaced = self.release_active();
        match start(decoded) {
            Ok(handle) => {
                self.active = Some(handle);
                self.state = SessionState::Active;
                LoadOutcome::Activated { replaced }
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: AudioLoadError) -> LoadOutcome {
        self.state = SessionState::Failed(err.clone());
        LoadOutcome::Failed(err)
    }

    /// Release the active session, if any. Returns whether one was released.
    pub fn release_active(&mut self) -> bool {
        match self.active.take() {
            Some(mut old) => {
                old.release();
                true
            }
            None => false,
        }
    }
}
