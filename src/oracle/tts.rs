//! Speech clip handling
//!
//! The speech endpoint returns raw little-endian 16-bit PCM; this module
//! carries the clip plus the conversion the playback layer needs.

/// Raw PCM returned by the speech endpoint
#[derive(Debug, Clone)]
pub struct SpeechClip {
    /// Mono 16-bit little-endian samples
    pub pcm: Vec<u8>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl SpeechClip {
    /// Clip length in seconds
    pub fn duration_secs(&self) -> f32 {
        let samples = self.pcm.len() / 2;
        samples as f32 / self.sample_rate as f32
    }
}

/// Decode little-endian 16-bit PCM into normalized f32 samples in [-1.0, 1.0)
pub fn pcm16_to_f32(pcm: &[u8]) -> Vec<f32> {
    pcm.chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcm_decode_normalizes() {
        let pcm: Vec<u8> = [0i16, i16::MAX, i16::MIN, -16384]
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();
        let samples = pcm16_to_f32(&pcm);
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], 0.0);
        assert!((samples[1] - 0.99997).abs() < 1e-4);
        assert_eq!(samples[2], -1.0);
        assert_eq!(samples[3], -0.5);
    }

    #[test]
    fn test_trailing_odd_byte_is_dropped() {
        let samples = pcm16_to_f32(&[0, 0, 5]);
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_duration() {
        let clip = SpeechClip {
            pcm: vec![0; 48_000],
            sample_rate: 24_000,
        };
        assert_eq!(clip.duration_secs(), 1.0);
    }
}
