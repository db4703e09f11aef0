use crate::controllers::interactive::ports::frame_host::{FrameHost, FrameRequestError};
use crate::controllers::interactive::ports::renderer::Renderer;
use crate::core::actions::cancellation::{SessionToken, TokenIssuer};
use crate::core::actions::paint_step::paint_step::{PaintReport, paint_step};
use crate::core::actions::paint_step::ports::display_surface::DisplaySurface;
use crate::core::data::frame_view::FrameViewError;
use crate::core::data::step_sequence::StepSequence;
use log::{debug, error, trace, warn};
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session has been started.
    Idle,
    /// Created, first callback requested, nothing painted yet.
    Scheduled,
    /// At least one pass painted; `step` is the next pass to run.
    Running { step: usize },
    Completed,
    Cancelled,
    /// The host refused a callback before pass `step` could run.
    Stalled { step: usize },
}

impl SessionState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Cancelled | Self::Stalled { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSession {
    token: SessionToken,
    step_index: usize,
    state: SessionState,
}

impl RenderSession {
    fn new(token: SessionToken) -> Self {
        Self {
            token,
            step_index: 0,
            state: SessionState::Scheduled,
        }
    }

    #[must_use]
    pub fn token(&self) -> SessionToken {
        self.token
    }

    /// Number of passes this session has completed.
    #[must_use]
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The token was stale or its session already finished; nothing ran.
    Discarded,
    Advanced {
        step: usize,
        paint: PaintReport,
    },
    Completed {
        step: usize,
        paint: PaintReport,
    },
    /// The pass was painted but the host refused the next callback.
    Stalled {
        step: usize,
        paint: PaintReport,
        error: FrameRequestError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickError {
    Frame(FrameViewError),
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frame(err) => write!(f, "renderer buffer is unusable: {}", err),
        }
    }
}

impl Error for TickError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Frame(err) => Some(err),
        }
    }
}

/// Drives one refinement pass per host frame callback.
///
/// Owns the single active [`RenderSession`]. Starting a new session revokes the
/// previous token before anything else runs, so a callback that was already queued
/// for the old session is discarded when it fires.
pub struct FrameScheduler {
    steps: StepSequence,
    tokens: TokenIssuer,
    session: Option<RenderSession>,
}

impl FrameScheduler {
    #[must_use]
    pub fn new(steps: StepSequence) -> Self {
        Self {
            steps,
            tokens: TokenIssuer::new(),
            session: None,
        }
    }

    #[must_use]
    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    #[must_use]
    pub fn session(&self) -> Option<&RenderSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session
            .as_ref()
            .map_or(SessionState::Idle, |session| session.state)
    }

    /// Supersedes any session in flight and requests the first callback.
    ///
    /// If the host refuses, the new session is left `Stalled` at step 0 and the
    /// refusal is returned; only another start can resume rendering.
    pub fn start_session<H>(&mut self, host: &mut H) -> Result<SessionToken, FrameRequestError>
    where
        H: FrameHost + ?Sized,
    {
        self.cancel(host);

        let token = self.tokens.issue();
        let session = self.session.insert(RenderSession::new(token));
        debug!("{} started ({} passes)", token, self.steps.len());

        if let Err(err) = host.request_frame(token) {
            warn!("{} could not be scheduled: {}", token, err);
            session.state = SessionState::Stalled { step: 0 };
            return Err(err);
        }

        Ok(token)
    }

    /// Revokes the current token. Returns it if a session was still in flight.
    pub fn cancel<H>(&mut self, host: &mut H) -> Option<SessionToken>
    where
        H: FrameHost + ?Sized,
    {
        let token = self.tokens.revoke()?;
        host.cancel_frame(token);

        let session = self.session.as_mut()?;
        if session.token != token || session.state.is_terminal() {
            return None;
        }

        session.state = SessionState::Cancelled;
        debug!("{} cancelled after {} passes", token, session.step_index);
        Some(token)
    }

    /// Runs the pass the session identified by `token` is waiting on.
    pub fn tick<R, S, H>(
        &mut self,
        token: SessionToken,
        renderer: &mut R,
        surface: &mut S,
        host: &mut H,
    ) -> Result<TickOutcome, TickError>
    where
        R: Renderer + ?Sized,
        S: DisplaySurface + ?Sized,
        H: FrameHost + ?Sized,
    {
        if !self.tokens.is_current(token) {
            trace!("discarding tick for stale {}", token);
            return Ok(TickOutcome::Discarded);
        }

        let Some(session) = self.session.as_mut().filter(|s| !s.state.is_terminal()) else {
            return Ok(TickOutcome::Discarded);
        };

        let step = session.step_index;
        let Some(block_size) = self.steps.block_size_at(step) else {
            session.state = SessionState::Completed;
            return Ok(TickOutcome::Discarded);
        };

        let started = Instant::now();
        renderer.compute_step(step);

        let frame = match renderer.frame_view() {
            Ok(frame) => frame,
            Err(err) => {
                error!("{} stopped at pass {}: {}", token, step, err);
                session.state = SessionState::Stalled { step };
                return Err(TickError::Frame(err));
            }
        };

        let paint = paint_step(surface, &frame, block_size);
        session.step_index = step + 1;
        debug!(
            "{} pass {} (block {}) took {} ms",
            token,
            step,
            block_size,
            started.elapsed().as_millis()
        );

        if self.steps.is_last_step(step) {
            session.state = SessionState::Completed;
            return Ok(TickOutcome::Completed { step, paint });
        }

        if let Err(err) = host.request_frame(token) {
            warn!("{} stalled before pass {}: {}", token, step + 1, err);
            session.state = SessionState::Stalled { step: step + 1 };
            return Ok(TickOutcome::Stalled { step, paint, error: err });
        }

        session.state = SessionState::Running { step: step + 1 };
        Ok(TickOutcome::Advanced { step, paint })
    }
}
