use crate::controllers::interactive::frame_scheduler::FrameScheduler;
use crate::controllers::interactive::ports::frame_host::{FrameHost, FrameRequestError};
use crate::controllers::interactive::ports::renderer::Renderer;
use crate::core::actions::cancellation::SessionToken;
use crate::core::data::input_event::InputEvent;
use crate::core::data::logical_coordinate::LogicalCoordinate;
use crate::core::data::surface_geometry::SurfaceGeometry;
use crate::core::util::client_to_logical_coords::client_to_logical_coords;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Picked(LogicalCoordinate),
    Restarted(SessionToken),
}

/// Turns host input into renderer commands and session restarts.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDispatcher {
    geometry: SurfaceGeometry,
}

impl InputDispatcher {
    #[must_use]
    pub fn new(geometry: SurfaceGeometry) -> Self {
        Self { geometry }
    }

    #[must_use]
    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    pub fn set_geometry(&mut self, geometry: SurfaceGeometry) {
        self.geometry = geometry;
    }

    pub fn dispatch<R, H>(
        &self,
        event: InputEvent,
        scheduler: &mut FrameScheduler,
        renderer: &mut R,
        host: &mut H,
    ) -> Result<DispatchOutcome, FrameRequestError>
    where
        R: Renderer + ?Sized,
        H: FrameHost + ?Sized,
    {
        match event {
            InputEvent::Click { client_x, client_y } => {
                Ok(DispatchOutcome::Picked(self.click(client_x, client_y, renderer)))
            }
            InputEvent::KeyPress { code } => self
                .key_press(code, scheduler, renderer, host)
                .map(DispatchOutcome::Restarted),
        }
    }

    /// Forwards a pick to the renderer. Does not touch the active session.
    pub fn click<R>(&self, client_x: f64, client_y: f64, renderer: &mut R) -> LogicalCoordinate
    where
        R: Renderer + ?Sized,
    {
        let coordinate = client_to_logical_coords(
            client_x,
            client_y,
            &self.geometry,
            renderer.width(),
            renderer.height(),
        );

        debug!("click at row {} col {}", coordinate.row, coordinate.col);
        renderer.click(coordinate.row, coordinate.col);
        coordinate
    }

    /// Cancels the active session, forwards the key, then starts a fresh session.
    ///
    /// The key reaches the renderer before the new session's first tick can run,
    /// so every pass of the new session shows the post-keypress scene.
    pub fn key_press<R, H>(
        &self,
        code: u32,
        scheduler: &mut FrameScheduler,
        renderer: &mut R,
        host: &mut H,
    ) -> Result<SessionToken, FrameRequestError>
    where
        R: Renderer + ?Sized,
        H: FrameHost + ?Sized,
    {
        scheduler.cancel(host);
        debug!("key press {}", code);
        renderer.keydown(code);
        scheduler.start_session(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::frame_scheduler::{SessionState, TickOutcome};
    use crate::controllers::interactive::hosts::PendingFrame;
    use crate::controllers::interactive::test_support::{
        NullSurface, RecordingRenderer, RendererCall,
    };
    use crate::core::data::step_sequence::StepSequence;

    fn three_step_scheduler() -> FrameScheduler {
        FrameScheduler::new(StepSequence::new(vec![4, 2, 1]).unwrap())
    }

    #[test]
    fn click_forwards_mapped_coordinate() {
        let dispatcher = InputDispatcher::new(SurfaceGeometry::identity(8, 6, 1));
        let mut scheduler = three_step_scheduler();
        let mut renderer = RecordingRenderer::new(8, 6);
        let mut host = PendingFrame::new();

        let outcome = dispatcher
            .dispatch(
                InputEvent::Click {
                    client_x: 5.0,
                    client_y: 3.0,
                },
                &mut scheduler,
                &mut renderer,
                &mut host,
            )
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Picked(LogicalCoordinate::new(3, 5)));
        assert_eq!(renderer.calls(), &[RendererCall::Click { row: 3, col: 5 }]);
    }

    #[test]
    fn click_outside_is_clamped_not_rejected() {
        let dispatcher = InputDispatcher::new(SurfaceGeometry::identity(8, 6, 1));
        let mut renderer = RecordingRenderer::new(8, 6);

        let coordinate = dispatcher.click(-50.0, 600.0, &mut renderer);

        assert_eq!(coordinate, LogicalCoordinate::new(5, 0));
        assert_eq!(renderer.calls(), &[RendererCall::Click { row: 5, col: 0 }]);
    }

    #[test]
    fn click_does_not_start_or_cancel_a_session() {
        let dispatcher = InputDispatcher::new(SurfaceGeometry::identity(8, 6, 1));
        let mut scheduler = three_step_scheduler();
        let mut renderer = RecordingRenderer::new(8, 6);
        let mut host = PendingFrame::new();

        let token = scheduler.start_session(&mut host).unwrap();
        dispatcher
            .dispatch(
                InputEvent::Click {
                    client_x: 1.0,
                    client_y: 1.0,
                },
                &mut scheduler,
                &mut renderer,
                &mut host,
            )
            .unwrap();

        assert_eq!(scheduler.state(), SessionState::Scheduled);
        assert_eq!(host.pending(), Some(token));
    }

    #[test]
    fn key_press_restarts_and_forwards_key_before_first_tick() {
        let dispatcher = InputDispatcher::new(SurfaceGeometry::identity(8, 8, 1));
        let mut scheduler = three_step_scheduler();
        let mut renderer = RecordingRenderer::new(8, 8);
        let mut host = PendingFrame::new();

        let outcome = dispatcher
            .dispatch(
                InputEvent::KeyPress { code: 77 },
                &mut scheduler,
                &mut renderer,
                &mut host,
            )
            .unwrap();

        let DispatchOutcome::Restarted(token) = outcome else {
            panic!("expected a restart, got {:?}", outcome);
        };
        assert_eq!(host.pending(), Some(token));
        assert_eq!(scheduler.state(), SessionState::Scheduled);

        let tick = host.take().unwrap();
        scheduler
            .tick(tick, &mut renderer, &mut NullSurface, &mut host)
            .unwrap();

        assert_eq!(
            renderer.calls(),
            &[RendererCall::Keydown(77), RendererCall::ComputeStep(0)]
        );
    }

    #[test]
    fn key_press_mid_session_aborts_and_reruns_from_step_zero() {
        let dispatcher = InputDispatcher::new(SurfaceGeometry::identity(8, 8, 1));
        let mut scheduler = three_step_scheduler();
        let mut renderer = RecordingRenderer::new(8, 8);
        let mut host = PendingFrame::new();

        let first = scheduler.start_session(&mut host).unwrap();
        let tick = host.take().unwrap();
        scheduler
            .tick(tick, &mut renderer, &mut NullSurface, &mut host)
            .unwrap();
        assert_eq!(scheduler.state(), SessionState::Running { step: 1 });

        dispatcher
            .key_press(75, &mut scheduler, &mut renderer, &mut host)
            .unwrap();

        // The aborted session's queued callback still fires once.
        let stale = scheduler
            .tick(first, &mut renderer, &mut NullSurface, &mut host)
            .unwrap();
        assert_eq!(stale, TickOutcome::Discarded);

        while let Some(token) = host.take() {
            scheduler
                .tick(token, &mut renderer, &mut NullSurface, &mut host)
                .unwrap();
        }

        assert_eq!(renderer.computed_steps(), vec![0, 0, 1, 2]);
        assert_eq!(renderer.computed_steps().len(), 4);
        assert_eq!(scheduler.state(), SessionState::Completed);
    }

    #[test]
    fn key_press_with_refusing_host_reports_error() {
        let dispatcher = InputDispatcher::new(SurfaceGeometry::identity(8, 8, 1));
        let mut scheduler = three_step_scheduler();
        let mut renderer = RecordingRenderer::new(8, 8);
        let mut host = PendingFrame::new();
        host.set_refuse_requests(true);

        let result = dispatcher.key_press(13, &mut scheduler, &mut renderer, &mut host);

        assert_eq!(result, Err(FrameRequestError::Unavailable));
        assert_eq!(renderer.calls(), &[RendererCall::Keydown(13)]);
        assert_eq!(scheduler.state(), SessionState::Stalled { step: 0 });
    }
}
