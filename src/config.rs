// Fixed settings for one paint session, chosen once at construction.

use crate::types::{Argb, Palette, RED, WHITE};

#[derive(Clone, Debug)]
pub struct PaintConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub target_fps: u32,
    pub brush_radius: i32,
    pub background: Argb,
    pub palette: Palette,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            title: String::from("Ultra Paint"),
            width: 900,
            height: 600,
            target_fps: 60,
            brush_radius: 10,
            background: WHITE,
            palette: Palette::default(),
        }
    }
}

impl PaintConfig {
    /// Color selected when the session starts: the palette's third entry (red).
    pub fn initial_color(&self) -> Argb {
        self.palette
            .get(2)
            .or_else(|| self.palette.get(0))
            .unwrap_or(RED)
    }
}
