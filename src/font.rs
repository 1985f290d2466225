//! Embedded 5x7 bitmap font, restricted to what numeric labels need.

use image::{Rgb, RgbImage};

/// Glyph size in font pixels, spacing excluded.
pub(crate) const GLYPH_W: u32 = 5;
pub(crate) const GLYPH_H: u32 = 7;
/// Horizontal advance in font pixels.
const ADVANCE: u32 = GLYPH_W + 1;

/// Each glyph: 7 rows, each row's lower 5 bits = pixels (MSB=left).
#[rustfmt::skip]
fn glyph(ch: char) -> Option<[u8; 7]> {
    Some(match ch {
        ' ' => [0x00,0x00,0x00,0x00,0x00,0x00,0x00],
        '+' => [0x00,0x04,0x04,0x1F,0x04,0x04,0x00],
        '-' => [0x00,0x00,0x00,0x1F,0x00,0x00,0x00],
        '.' => [0x00,0x00,0x00,0x00,0x00,0x00,0x04],
        '0' => [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E],
        '1' => [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E],
        '2' => [0x0E,0x11,0x01,0x02,0x04,0x08,0x1F],
        '3' => [0x1F,0x02,0x04,0x02,0x01,0x11,0x0E],
        '4' => [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02],
        '5' => [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E],
        '6' => [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E],
        '7' => [0x1F,0x01,0x02,0x04,0x08,0x08,0x08],
        '8' => [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E],
        '9' => [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C],
        'e' => [0x00,0x00,0x0E,0x11,0x1F,0x10,0x0E],
        _ => return None,
    })
}

/// Width in image pixels of `text` drawn at `scale`.
pub(crate) fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 { 0 } else { (n * ADVANCE - 1) * scale }
}

/// Draw `text` with its top-left corner at (`x`, `y`).  Pixels falling
/// outside the image are dropped, as are characters without a glyph.
pub(crate) fn draw_text(img: &mut RgbImage, x: i64, y: i64, text: &str,
                        scale: u32, color: Rgb<u8>) {
    let s = scale as i64;
    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else { continue };
        let x0 = x + i as i64 * ADVANCE as i64 * s;
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0 .. GLYPH_W {
                if bits & (0x10 >> col) == 0 { continue }
                let px = x0 + col as i64 * s;
                let py = y + row as i64 * s;
                fill(img, px, py, scale, scale, color);
            }
        }
    }
}

/// Fill a `w`×`h` rectangle, clipped to the image.
pub(crate) fn fill(img: &mut RgbImage, x: i64, y: i64, w: u32, h: u32,
                   color: Rgb<u8>) {
    let (iw, ih) = (img.width() as i64, img.height() as i64);
    for py in y.max(0) .. (y + h as i64).min(ih) {
        for px in x.max(0) .. (x + w as i64).min(iw) {
            img.put_pixel(px as u32, py as u32, color);
        }
    }
}
