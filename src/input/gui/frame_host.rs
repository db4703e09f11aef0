use crate::controllers::interactive::hosts::PendingFrame;
use crate::controllers::interactive::ports::frame_host::{FrameHost, FrameRequestError};
use crate::core::actions::cancellation::SessionToken;
use winit::window::Window;

/// Turns frame requests into winit redraws.
///
/// The token waits in a [`PendingFrame`] until `RedrawRequested` takes it.
pub struct WinitFrameHost {
    window: &'static Window,
    pending: PendingFrame,
}

impl WinitFrameHost {
    #[must_use]
    pub fn new(window: &'static Window) -> Self {
        Self {
            window,
            pending: PendingFrame::new(),
        }
    }

    pub fn take(&mut self) -> Option<SessionToken> {
        self.pending.take()
    }
}

impl FrameHost for WinitFrameHost {
    fn request_frame(&mut self, token: SessionToken) -> Result<(), FrameRequestError> {
        self.pending.request_frame(token)?;
        self.window.request_redraw();
        Ok(())
    }

    fn cancel_frame(&mut self, token: SessionToken) {
        self.pending.cancel_frame(token);
    }
}
