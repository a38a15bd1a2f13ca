// The frame loop: poll -> update state -> rasterize -> present -> pace.

use crate::error::Error;
use crate::pacing::{FpsCounter, FramePacer};
use crate::session::{Event, Session};
use crate::types::Canvas;
use std::time::Instant;

/// The window side of the loop: where input comes from and where frames go.
pub trait Frontend {
    /// Append every event queued since the last call. Never blocks.
    fn poll_events(&mut self, events: &mut Vec<Event>);

    /// Show the canvas as it is right now.
    fn present(&mut self, canvas: &Canvas) -> Result<(), Error>;
}

/// Run until a quit event is seen. The iteration that sees it still renders and presents.
pub fn run<F: Frontend>(
    frontend: &mut F,
    session: &mut Session,
    pacer: &FramePacer,
) -> Result<(), Error> {
    info!(period = ?pacer.period(), "frame loop started");

    let mut events = Vec::new();
    let mut fps = FpsCounter::new(Instant::now());
    let mut frames: u64 = 0;

    while session.is_running() {
        let frame_start = Instant::now();

        frontend.poll_events(&mut events);
        for event in events.drain(..) {
            session.handle_event(event);
        }

        trace!(cursor = ?session.cursor(), state = ?session.state(), "frame");
        session.render_frame();
        frontend.present(session.canvas())?;
        frames += 1;

        if let Some(rate) = fps.tick(Instant::now()) {
            info!("FPS: {rate:.1}");
        }

        pacer.wait(frame_start);
    }

    info!(frames, "frame loop finished");
    Ok(())
}
