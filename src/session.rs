// Interaction state for one paint session and the Idle/Painting state machine.
// Visual: pressing below the swatches starts a stroke, releasing ends it,
// clicking a swatch changes the brush color.

use crate::config::PaintConfig;
use crate::error::Error;
use crate::raster::{fill_circle, fill_palette};
use crate::types::{Argb, Canvas, Palette};

/// Input as the frame loop sees it, already in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
    PointerMove(i32, i32),
    PointerDown(i32, i32),
    PointerUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintState {
    Idle,
    Painting,
}

pub struct Session {
    canvas: Canvas,
    palette: Palette,
    brush_radius: i32,
    cursor: (i32, i32),
    state: PaintState,
    color: Argb,
    running: bool,
}

impl Session {
    /// Build the canvas (filled with the background) and the starting state.
    pub fn new(config: &PaintConfig) -> Result<Self, Error> {
        let canvas = Canvas::new(config.width, config.height, config.background)?;
        Ok(Self {
            canvas,
            palette: config.palette.clone(),
            brush_radius: config.brush_radius,
            cursor: (0, 0),
            state: PaintState::Idle,
            color: config.initial_color(),
            running: true,
        })
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit => {
                debug!("quit requested");
                self.running = false;
            }
            Event::PointerMove(x, y) => self.cursor = (x, y),
            Event::PointerDown(x, y) => {
                self.cursor = (x, y);
                if self.palette.in_strip(y) {
                    self.select_at(x, y);
                } else {
                    self.state = PaintState::Painting;
                }
            }
            Event::PointerUp => self.state = PaintState::Idle,
        }
    }

    /// One frame of drawing: a dab at the cursor while painting, then the swatches on top.
    pub fn render_frame(&mut self) {
        if self.state == PaintState::Painting {
            let (x, y) = self.cursor;
            fill_circle(&mut self.canvas, x, y, self.brush_radius, self.color);
        }
        fill_palette(&mut self.canvas, &self.palette);
    }

    /// Palette hit-test. Returns the chosen swatch; a miss leaves the color alone.
    pub fn select_at(&mut self, x: i32, y: i32) -> Option<usize> {
        let index = self.palette.swatch_at(x, y)?;
        let color = self.palette.get(index)?;
        debug!(index, color = %format_args!("{color:#010X}"), "swatch selected");
        self.color = color;
        Some(index)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    pub fn current_color(&self) -> Argb {
        self.color
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}
