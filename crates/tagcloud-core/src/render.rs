//! Rasterize a placed cloud to an RGBA image.
//!
//! Rendering consumes the placement history; it relies only on the
//! no-overlap and size-fidelity guarantees, not on any coordinate range.

use crate::bounds::bounding_region;
use crate::error::Result;
use crate::model::Rect;
use image::{Rgba, RgbaImage};

/// Fill colors cycled per rectangle, in placement order.
const PALETTE: [[u8; 4]; 8] = [
    [0, 255, 255, 255],   // aqua
    [255, 228, 196, 255], // bisque
    [0, 0, 0, 255],       // black
    [0, 0, 255, 255],     // blue
    [138, 43, 226, 255],  // blue violet
    [165, 42, 42, 255],   // brown
    [127, 255, 0, 255],   // chartreuse
    [255, 140, 0, 255],   // dark orange
];

const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Draws each rectangle filled with the next palette color onto a white
/// canvas sized to the bounding region plus `margin` pixels on every side.
/// `outlines` adds a red 1px outline per rectangle for debugging. Fails with
/// `InvalidInput` on an empty history.
pub fn render_cloud(rects: &[Rect], margin: u32, outlines: bool) -> Result<RgbaImage> {
    let region = bounding_region(rects)?;

    let width = region.w as u32 + margin * 2;
    let height = region.h as u32 + margin * 2;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND));

    for (i, r) in rects.iter().enumerate() {
        // Offsets fit in u32: the region encloses every rectangle.
        let dx = (r.x - region.x) as u32 + margin;
        let dy = (r.y - region.y) as u32 + margin;
        fill_rect(&mut canvas, dx, dy, r.w as u32, r.h as u32, PALETTE[i % PALETTE.len()]);
        if outlines {
            draw_outline(&mut canvas, dx, dy, r.w as u32, r.h as u32, [255, 0, 0, 255]);
        }
    }

    Ok(canvas)
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, c: [u8; 4]) {
    let (cw, ch) = img.dimensions();
    for yy in y.min(ch)..(y.saturating_add(h)).min(ch) {
        for xx in x.min(cw)..(x.saturating_add(w)).min(cw) {
            img.put_pixel(xx, yy, Rgba(c));
        }
    }
}

fn draw_outline(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, c: [u8; 4]) {
    let (cw, ch) = img.dimensions();
    let by = (y + h).saturating_sub(1);
    let rx = (x + w).saturating_sub(1);
    for xx in x..(x + w).min(cw) {
        if y < ch {
            img.put_pixel(xx, y, Rgba(c));
        }
        if by < ch {
            img.put_pixel(xx, by, Rgba(c));
        }
    }
    for yy in y..(y + h).min(ch) {
        if x < cw {
            img.put_pixel(x, yy, Rgba(c));
        }
        if rx < cw {
            img.put_pixel(rx, yy, Rgba(c));
        }
    }
}
