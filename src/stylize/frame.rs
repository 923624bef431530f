use chrono::Utc;

use super::StylizeError;

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// A raw RGBA pixel buffer captured from an image source
///
/// `data` is row-major, 4 bytes per pixel, `width * height * 4` bytes long.
/// The stylizer never stores frames; they are owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    /// Capture time, Unix millis
    pub captured_at: i64,
}

impl Frame {
    /// Wrap an RGBA buffer, stamping it with the current time
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
            captured_at: Utc::now().timestamp_millis(),
        }
    }

    /// Check dimensions against the buffer before any pixel work.
    pub fn validate(&self) -> Result<(), StylizeError> {
        let expected = self.width as usize * self.height as usize * BYTES_PER_PIXEL;
        if self.width == 0 || self.height == 0 || self.data.len() != expected {
            return Err(StylizeError::InvalidFrame {
                width: self.width,
                height: self.height,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Byte offset of the pixel at (x, y)
    #[inline]
    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed() {
        let frame = Frame::new(3, 2, vec![0; 3 * 2 * 4]);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_buffer() {
        let frame = Frame::new(3, 2, vec![0; 3 * 2 * 4 - 1]);
        let err = frame.validate().unwrap_err();
        assert!(matches!(err, StylizeError::InvalidFrame { actual: 23, .. }));
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        assert!(Frame::new(0, 2, vec![]).validate().is_err());
        assert!(Frame::new(3, 0, vec![]).validate().is_err());
    }
}
