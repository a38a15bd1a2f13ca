// What you SEE:
// • A white 900x600 canvas with eight color swatches along the top edge.
// • Click a swatch to pick its color (starts on red).
// • Hold Left Mouse below the swatches to paint round dabs. ESC or closing the window quits.

use std::process::ExitCode;
use tracing::{error, info};
use ultra_paint::app;
use ultra_paint::config::PaintConfig;
use ultra_paint::draw::Drawer;
use ultra_paint::error::Error;
use ultra_paint::pacing::FramePacer;
use ultra_paint::session::Session;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match paint(&PaintConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "fatal");
            ExitCode::FAILURE
        }
    }
}

fn paint(config: &PaintConfig) -> Result<(), Error> {
    info!(
        title = %config.title,
        width = config.width,
        height = config.height,
        swatches = config.palette.len(),
        "opening window"
    );
    let mut drawer = Drawer::new(&config.title, config.width, config.height)?;
    let mut session = Session::new(config)?;
    let pacer = FramePacer::new(config.target_fps);

    app::run(&mut drawer, &mut session, &pacer)
    // Window handle is dropped here, before main picks the exit status.
}
