// Core types: the pixel surface we paint into and the swatch palette.

use crate::error::Error;

/// Packed 0xAARRGGBB. minifb ignores the alpha byte, so opaque colors show as-is.
pub type Argb = u32;

pub const BLACK: Argb = 0xFF_00_00_00;
pub const WHITE: Argb = 0xFF_FF_FF_FF;
pub const RED: Argb = 0xFF_FF_00_00;
pub const GREEN: Argb = 0xFF_00_FF_00;
pub const BLUE: Argb = 0xFF_00_00_FF;
pub const YELLOW: Argb = 0xFF_FF_FF_00;
pub const CYAN: Argb = 0xFF_00_FF_FF;
pub const MAGENTA: Argb = 0xFF_FF_00_FF;

/// The drawable area. Every write is bounds-checked; anything off-canvas is dropped.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Argb>, // row-major, length = width * height
}

impl Canvas {
    /// Allocate a `width` x `height` canvas filled with `background`.
    pub fn new(width: usize, height: usize, background: Argb) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::Surface(format!(
                "canvas must not be empty (got {width}x{height})"
            )));
        }
        // Coordinates travel as i32, so each side has to fit.
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(Error::Surface(format!(
                "canvas side too large (got {width}x{height})"
            )));
        }
        let len = width.checked_mul(height).ok_or_else(|| {
            Error::Surface(format!("canvas pixel count overflows ({width}x{height})"))
        })?;

        Ok(Self { width, height, pixels: vec![background; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixels, ready to hand to the window.
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// Read one pixel, or `None` when (x, y) is off-canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Argb> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Overwrite one pixel if (x, y) is inside bounds.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Argb) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Fill the rectangle [x, x+w) x [y, y+h), clipped to the canvas.
    /// Empty or negative extents draw nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Argb) {
        if w <= 0 || h <= 0 {
            return;
        }
        // i64 so x + w cannot overflow near i32::MAX.
        let x0 = i64::from(x).max(0);
        let y0 = i64::from(y).max(0);
        let x1 = (i64::from(x) + i64::from(w)).min(self.width as i64);
        let y1 = (i64::from(y) + i64::from(h)).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let (x0, x1) = (x0 as usize, x1 as usize);
        for row in y0 as usize..y1 as usize {
            let start = row * self.width;
            self.pixels[start + x0..start + x1].fill(color);
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

/// Ordered swatch colors shown as squares along the top edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Argb>,
    swatch_size: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![BLACK, WHITE, RED, GREEN, BLUE, YELLOW, CYAN, MAGENTA], 40)
    }
}

impl Palette {
    pub fn new(colors: Vec<Argb>, swatch_size: usize) -> Self {
        Self { colors, swatch_size }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Argb> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    /// Side length of one square swatch; also the height of the palette strip.
    pub fn swatch_size(&self) -> usize {
        self.swatch_size
    }

    /// True when (_, y) lies in the palette strip rather than the paintable area.
    pub fn in_strip(&self, y: i32) -> bool {
        y >= 0 && (y as i64) < self.swatch_size as i64
    }

    /// Which swatch a click at (x, y) lands on, if any.
    pub fn swatch_at(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_strip(y) || self.swatch_size == 0 {
            return None;
        }
        // Floor division: x = -5 is swatch -1, not swatch 0.
        let index = i64::from(x).div_euclid(self.swatch_size as i64);
        if index >= 0 && (index as u64) < self.colors.len() as u64 {
            Some(index as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_filled_with_background() {
        let canvas = Canvas::new(4, 3, WHITE).unwrap();
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert!(canvas.pixels().iter().all(|&p| p == WHITE));
    }

    #[test]
    fn empty_canvas_is_a_surface_error() {
        assert!(matches!(Canvas::new(0, 10, WHITE), Err(Error::Surface(_))));
        assert!(matches!(Canvas::new(10, 0, WHITE), Err(Error::Surface(_))));
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut canvas = Canvas::new(5, 5, WHITE).unwrap();
        canvas.put_pixel(-1, 0, RED);
        canvas.put_pixel(0, -1, RED);
        canvas.put_pixel(5, 0, RED);
        canvas.put_pixel(0, 5, RED);
        canvas.put_pixel(i32::MAX, i32::MIN, RED);
        assert!(canvas.pixels().iter().all(|&p| p == WHITE));

        canvas.put_pixel(4, 4, RED);
        assert_eq!(canvas.pixel(4, 4), Some(RED));
        assert_eq!(canvas.pixel(5, 4), None);
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut canvas = Canvas::new(6, 4, WHITE).unwrap();
        canvas.fill_rect(-2, 2, 4, 10, BLUE);

        for y in 0..4 {
            for x in 0..6 {
                let expected = if x < 2 && y >= 2 { BLUE } else { WHITE };
                assert_eq!(canvas.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn fill_rect_with_empty_extent_is_noop() {
        let mut canvas = Canvas::new(3, 3, WHITE).unwrap();
        canvas.fill_rect(0, 0, 0, 3, RED);
        canvas.fill_rect(0, 0, 3, -1, RED);
        canvas.fill_rect(10, 10, 3, 3, RED);
        canvas.fill_rect(i32::MAX, 0, i32::MAX, 1, RED);
        assert!(canvas.pixels().iter().all(|&p| p == WHITE));
    }

    #[test]
    fn swatch_at_maps_strip_columns_to_indices() {
        let palette = Palette::default();
        assert_eq!(palette.swatch_at(0, 0), Some(0));
        assert_eq!(palette.swatch_at(39, 39), Some(0));
        assert_eq!(palette.swatch_at(40, 0), Some(1));
        assert_eq!(palette.swatch_at(319, 10), Some(7));
    }

    #[test]
    fn swatch_at_rejects_points_outside_the_swatches() {
        let palette = Palette::default();
        // Past the last swatch, still inside the strip.
        assert_eq!(palette.swatch_at(320, 10), None);
        // Below the strip.
        assert_eq!(palette.swatch_at(10, 40), None);
        assert_eq!(palette.swatch_at(10, -1), None);
        // Negative x floors to a negative index.
        assert_eq!(palette.swatch_at(-5, 10), None);
    }
}
