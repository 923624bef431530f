//! The grit pipeline: sepia tone, contrast stretch, per-pixel noise
//!
//! Each pixel is processed independently in a fixed order: tone transform,
//! contrast stretch around the midpoint, one shared noise draw added to all
//! three channels, then a final clamp. Alpha passes through untouched.

use std::thread;

use super::StylizeError;
use super::frame::{BYTES_PER_PIXEL, Frame};
use super::noise::NoiseSource;
use super::overlay;

/// Sepia tone matrix, rows produce r', g', b' from (r, g, b)
const TONE: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Contrast stretch factor around `CONTRAST_MIDPOINT`
const CONTRAST_FACTOR: f32 = 1.5;
const CONTRAST_MIDPOINT: f32 = 128.0;

/// Peak noise magnitude; draws are uniform in [-30, +30)
const NOISE_AMPLITUDE: f32 = 30.0;

/// Stylize a frame and stamp `overlay_text` in the bottom-left corner.
///
/// Returns a new frame of identical dimensions; the input is never touched.
/// Rejects malformed frames before any pixel work.
pub fn stylize(
    frame: &Frame,
    overlay_text: &str,
    noise: &dyn NoiseSource,
) -> Result<Frame, StylizeError> {
    frame.validate()?;

    let mut out = frame.clone();
    let stride = frame.width as usize * BYTES_PER_PIXEL;
    for (y, row) in out.data.chunks_exact_mut(stride).enumerate() {
        grit_row(row, y as u32, noise);
    }

    overlay::draw_text(&mut out, overlay_text);
    Ok(out)
}

/// Row-sharded variant of `stylize`.
///
/// Because noise is addressed by pixel coordinate, the output is
/// byte-identical to the sequential path for the same noise source, no
/// matter how rows land on threads.
pub fn stylize_parallel(
    frame: &Frame,
    overlay_text: &str,
    noise: &dyn NoiseSource,
    threads: usize,
) -> Result<Frame, StylizeError> {
    frame.validate()?;

    let mut out = frame.clone();
    let stride = frame.width as usize * BYTES_PER_PIXEL;
    let threads = threads.max(1);
    let rows_per_band = (frame.height as usize).div_ceil(threads);

    thread::scope(|scope| {
        for (band_idx, band) in out.data.chunks_mut(rows_per_band * stride).enumerate() {
            let first_row = band_idx * rows_per_band;
            scope.spawn(move || {
                for (offset, row) in band.chunks_exact_mut(stride).enumerate() {
                    grit_row(row, (first_row + offset) as u32, noise);
                }
            });
        }
    });

    overlay::draw_text(&mut out, overlay_text);
    Ok(out)
}

/// Apply the pipeline to one row of RGBA bytes
fn grit_row(row: &mut [u8], y: u32, noise: &dyn NoiseSource) {
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let n = noise.sample(x as u32, y) * NOISE_AMPLITUDE;
        let (r, g, b) = grit_pixel(pixel[0], pixel[1], pixel[2], n);
        pixel[0] = r;
        pixel[1] = g;
        pixel[2] = b;
        // pixel[3] (alpha) is left as captured
    }
}

/// Tone, contrast, noise, clamp - in that order, clamp last
fn grit_pixel(r: u8, g: u8, b: u8, noise: f32) -> (u8, u8, u8) {
    let input = [r as f32, g as f32, b as f32];
    let mut output = [0u8; 3];
    for (channel, row) in TONE.iter().enumerate() {
        let toned = row[0] * input[0] + row[1] * input[1] + row[2] * input[2];
        let stretched = CONTRAST_FACTOR * (toned - CONTRAST_MIDPOINT) + CONTRAST_MIDPOINT;
        output[channel] = (stretched + noise).clamp(0.0, 255.0) as u8;
    }
    (output[0], output[1], output[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylize::noise::SeededNoise;

    fn gradient_frame(width: u32, height: u32) -> Frame {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[
                    (x * 7 % 256) as u8,
                    (y * 11 % 256) as u8,
                    ((x + y) * 3 % 256) as u8,
                    200,
                ]);
            }
        }
        Frame::new(width, height, data)
    }

    #[test]
    fn test_white_pixel_clamps_instead_of_wrapping() {
        // all-white through tone (> 255 already) and max-positive noise
        let (r, g, b) = grit_pixel(255, 255, 255, NOISE_AMPLITUDE);
        assert_eq!((r, g, b), (255, 255, 255));

        let (r, g, b) = grit_pixel(0, 0, 0, -NOISE_AMPLITUDE);
        assert_eq!((r, g, b), (0, 0, 0));
    }

    #[test]
    fn test_stylize_never_mutates_input() {
        let frame = gradient_frame(64, 48);
        let before = frame.clone();
        let _ = stylize(&frame, "10:00", &SeededNoise::new(5)).unwrap();
        assert_eq!(frame, before);
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let frame = gradient_frame(33, 17);
        let out = stylize(&frame, "", &SeededNoise::new(5)).unwrap();
        assert_eq!((out.width, out.height), (33, 17));
        assert_eq!(out.data.len(), frame.data.len());
    }

    #[test]
    fn test_alpha_channel_untouched() {
        let frame = gradient_frame(16, 16);
        let out = stylize(&frame, "", &SeededNoise::new(9)).unwrap();
        for (pixel_in, pixel_out) in frame.data.chunks_exact(4).zip(out.data.chunks_exact(4)) {
            assert_eq!(pixel_in[3], pixel_out[3]);
        }
    }

    #[test]
    fn test_parallel_matches_sequential_for_same_seed() {
        let frame = gradient_frame(61, 47);
        let noise = SeededNoise::new(1234);
        let sequential = stylize(&frame, "12.08.2025 10:30:00", &noise).unwrap();
        for threads in [1, 2, 3, 8, 64] {
            let parallel =
                stylize_parallel(&frame, "12.08.2025 10:30:00", &noise, threads).unwrap();
            assert_eq!(sequential.data, parallel.data, "diverged at {threads} threads");
        }
    }

    #[test]
    fn test_rejects_malformed_buffer_before_processing() {
        let mut frame = gradient_frame(8, 8);
        frame.data.pop();
        let err = stylize(&frame, "", &SeededNoise::new(0)).unwrap_err();
        assert!(matches!(err, StylizeError::InvalidFrame { .. }));
    }

    #[test]
    fn test_noise_varies_across_pixels() {
        // a flat gray frame must come out non-flat thanks to per-pixel noise
        let flat = Frame::new(32, 1, [128, 128, 128, 255].repeat(32));
        let out = stylize(&flat, "", &SeededNoise::new(77)).unwrap();
        let first = out.data[0];
        assert!(out.data.chunks_exact(4).any(|p| p[0] != first));
    }
}
