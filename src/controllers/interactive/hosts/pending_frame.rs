use crate::controllers::interactive::ports::frame_host::{FrameHost, FrameRequestError};
use crate::core::actions::cancellation::SessionToken;

/// Frame host for event loops that poll: holds at most one pending callback.
#[derive(Debug, Default)]
pub struct PendingFrame {
    pending: Option<SessionToken>,
    refuse_requests: bool,
    requests: u64,
}

impl PendingFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the pending callback, if any, for delivery to the scheduler.
    pub fn take(&mut self) -> Option<SessionToken> {
        self.pending.take()
    }

    #[must_use]
    pub fn pending(&self) -> Option<SessionToken> {
        self.pending
    }

    #[must_use]
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Makes subsequent requests fail, as when the host window has gone away.
    pub fn set_refuse_requests(&mut self, refuse: bool) {
        self.refuse_requests = refuse;
    }
}

impl FrameHost for PendingFrame {
    fn request_frame(&mut self, token: SessionToken) -> Result<(), FrameRequestError> {
        if self.refuse_requests {
            return Err(FrameRequestError::Unavailable);
        }

        self.requests += 1;
        self.pending = Some(token);
        Ok(())
    }

    fn cancel_frame(&mut self, token: SessionToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }
}
