use crate::core::actions::cancellation::SessionToken;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameRequestError {
    Unavailable,
    Refused { reason: String },
}

impl fmt::Display for FrameRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "host frame callbacks are unavailable"),
            Self::Refused { reason } => write!(f, "host refused frame request: {}", reason),
        }
    }
}

impl Error for FrameRequestError {}

/// Host display-refresh mechanism.
///
/// At most one callback is pending: a new request replaces the previous one.
/// When the callback fires, the host hands the token back to the scheduler.
pub trait FrameHost {
    fn request_frame(&mut self, token: SessionToken) -> Result<(), FrameRequestError>;

    fn cancel_frame(&mut self, _token: SessionToken) {}
}
