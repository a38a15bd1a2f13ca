// Stateless fills that write straight into the canvas.
// Visual: the round brush dab and the swatch strip along the top edge.

use crate::types::{Argb, Canvas, Palette};

/// Fill every pixel whose center is within `radius` of (cx, cy).
/// A negative radius draws nothing; radius 0 draws the single center pixel.
pub fn fill_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, color: Argb) {
    if radius < 0 {
        return;
    }
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let r2 = r * r;

    // Bounding square clipped to the canvas. |dx|, |dy| <= r keeps the sum inside i64.
    let x0 = (cx - r).max(0);
    let y0 = (cy - r).max(0);
    let x1 = (cx + r).min(canvas.width() as i64 - 1);
    let y1 = (cy + r).min(canvas.height() as i64 - 1);

    for y in y0..=y1 {
        let dy = y - cy;
        for x in x0..=x1 {
            let dx = x - cx;
            if dx * dx + dy * dy <= r2 {
                canvas.put_pixel(x as i32, y as i32, color);
            }
        }
    }
}

/// Paint swatch i over [i*S, i*S+S) x [0, S). Run after brush dabs so the strip stays on top.
pub fn fill_palette(canvas: &mut Canvas, palette: &Palette) {
    let Ok(side) = i32::try_from(palette.swatch_size()) else {
        // Wider than any canvas: the first swatch alone covers the strip.
        if let Some(first) = palette.get(0) {
            canvas.fill_rect(0, 0, i32::MAX, i32::MAX, first);
        }
        return;
    };

    for (i, &color) in palette.colors().iter().enumerate() {
        let Some(x) = i32::try_from(i).ok().and_then(|i| i.checked_mul(side)) else {
            break; // every later swatch starts even further off-canvas
        };
        canvas.fill_rect(x, 0, side, side, color);
    }
}
