//! Timestamp-style text overlay
//!
//! Draws the caller's string in the built-in bitmap font, bottom-left with a
//! fixed inset, amber on a black drop shadow so it stays readable over
//! whatever the filter produced. Always rendered after the pixel filter so
//! the text sits on top.

use super::font::{GLYPH_GAP, GLYPH_HEIGHT, GLYPH_WIDTH, glyph};
use super::frame::Frame;

/// Distance from the left and bottom frame edges, in output pixels
const INSET: u32 = 20;
/// Integer upscale applied to the 5x7 glyphs
const SCALE: u32 = 4;
/// Overlay text color (amber)
const ACCENT: [u8; 3] = [0xFF, 0x99, 0x00];
/// Drop shadow color
const SHADOW: [u8; 3] = [0x00, 0x00, 0x00];

/// Render `text` onto the frame, clipping at the frame edges.
pub(crate) fn draw_text(frame: &mut Frame, text: &str) {
    let glyph_height_px = GLYPH_HEIGHT * SCALE;
    let top = frame.height.saturating_sub(INSET + glyph_height_px);
    let shadow_offset = SCALE / 2 + 1;

    draw_text_at(frame, text, INSET + shadow_offset, top + shadow_offset, SHADOW);
    draw_text_at(frame, text, INSET, top, ACCENT);
}

fn draw_text_at(frame: &mut Frame, text: &str, origin_x: u32, origin_y: u32, color: [u8; 3]) {
    let advance = (GLYPH_WIDTH + GLYPH_GAP) * SCALE;
    for (i, c) in text.chars().enumerate() {
        let Some(bitmap) = glyph(c) else {
            continue;
        };
        let glyph_x = origin_x + i as u32 * advance;
        if glyph_x >= frame.width {
            break;
        }
        draw_glyph(frame, bitmap, glyph_x, origin_y, color);
    }
}

fn draw_glyph(frame: &mut Frame, bitmap: &[u8; 7], origin_x: u32, origin_y: u32, color: [u8; 3]) {
    for (row_idx, row) in bitmap.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if row & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                continue;
            }
            fill_cell(
                frame,
                origin_x + col * SCALE,
                origin_y + row_idx as u32 * SCALE,
                color,
            );
        }
    }
}

/// Fill one SCALE x SCALE block, skipping anything outside the frame
fn fill_cell(frame: &mut Frame, x0: u32, y0: u32, color: [u8; 3]) {
    for y in y0..(y0 + SCALE).min(frame.height) {
        for x in x0..(x0 + SCALE).min(frame.width) {
            let offset = frame.offset(x, y);
            frame.data[offset] = color[0];
            frame.data[offset + 1] = color[1];
            frame.data[offset + 2] = color[2];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_frame(width: u32, height: u32) -> Frame {
        let mut frame = Frame::new(width, height, vec![0; (width * height * 4) as usize]);
        for pixel in frame.data.chunks_exact_mut(4) {
            pixel[3] = 255;
        }
        frame
    }

    #[test]
    fn test_overlay_paints_accent_pixels_bottom_left() {
        let mut frame = black_frame(320, 240);
        draw_text(&mut frame, "12:34");

        let band_top = 240 - INSET - GLYPH_HEIGHT * SCALE;
        let accent_in_band = (band_top..240).any(|y| {
            (0..320).any(|x| {
                let o = frame.offset(x, y);
                frame.data[o..o + 3] == ACCENT
            })
        });
        assert!(accent_in_band);

        // nothing painted above the text band
        let untouched_above = (0..band_top).all(|y| {
            (0..320).all(|x| {
                let o = frame.offset(x, y);
                frame.data[o..o + 3] == [0, 0, 0]
            })
        });
        assert!(untouched_above);
    }

    #[test]
    fn test_overlay_clips_instead_of_panicking() {
        let mut tiny = black_frame(16, 8);
        draw_text(&mut tiny, "2024-01-01 00:00:00 A VERY LONG STAMP");
        assert!(tiny.validate().is_ok());
    }

    #[test]
    fn test_overlay_leaves_alpha_alone() {
        let mut frame = black_frame(120, 80);
        draw_text(&mut frame, "7");
        assert!(frame.data.chunks_exact(4).all(|p| p[3] == 255));
    }
}
