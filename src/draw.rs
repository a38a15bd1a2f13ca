// Window side of the paint tool.
// Visual: a fixed-size window showing the canvas; the mouse paints into it.

use crate::app::Frontend;
use crate::error::Error;
use crate::session::Event;
use crate::types::Canvas;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
    pointer: PointerTracker,
}

impl Drawer {
    /// Open a `width` x `height` window with the given title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // FramePacer owns the cadence; minifb must not sleep on its own.
        window.set_target_fps(0);
        Ok(Self { window, pointer: PointerTracker::default() })
    }

    /// Window closed or ESC held.
    fn quit_requested(&self) -> bool {
        !self.window.is_open() || self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels. Not clamped, so it can lie off-canvas.
    fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| (x.floor() as i32, y.floor() as i32))
    }
}

impl Frontend for Drawer {
    // minifb refreshes input state inside `update_with_buffer`, so this sees
    // everything that happened since the previous present.
    fn poll_events(&mut self, events: &mut Vec<Event>) {
        if self.quit_requested() {
            events.push(Event::Quit);
        }
        let pos = self.mouse_pos();
        let down = self.window.get_mouse_down(MouseButton::Left);
        self.pointer.update(pos, down, events);
    }

    fn present(&mut self, canvas: &Canvas) -> Result<(), Error> {
        self.window
            .update_with_buffer(canvas.pixels(), canvas.width(), canvas.height())
            .map_err(|e| Error::Surface(e.to_string()))
    }
}

/// Turns sampled mouse state into move/press/release events.
/// A press and release that both fall between two samples is not seen.
#[derive(Default)]
struct PointerTracker {
    last_pos: Option<(i32, i32)>,
    was_down: bool,
}

impl PointerTracker {
    fn update(&mut self, pos: Option<(i32, i32)>, down: bool, events: &mut Vec<Event>) {
        if let Some((x, y)) = pos {
            if self.last_pos != pos {
                events.push(Event::PointerMove(x, y));
                self.last_pos = pos;
            }
        }

        if down && !self.was_down {
            // Press without a known position (pointer never entered the window) is dropped.
            if let Some((x, y)) = self.last_pos {
                events.push(Event::PointerDown(x, y));
            }
        } else if !down && self.was_down {
            events.push(Event::PointerUp);
        }
        self.was_down = down;
    }
}
