//! Settings configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Override for the state database directory (defaults to ~/.paradise)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Voice playback settings
    #[serde(default)]
    pub voice: VoiceSettings,

    /// Oracle (generative text/speech API) settings
    #[serde(default)]
    pub oracle: OracleSettings,
}

/// Voice playback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Speak achievement unlocks and snarky one-liners out loud
    #[serde(default = "default_voice_enabled")]
    pub enabled: bool,

    /// Voice preset requested from the speech endpoint
    #[serde(default = "default_voice_name")]
    pub voice: String,
}

/// Oracle settings
///
/// The API key is never stored in the config file; it comes from the
/// `PARADISE_API_KEY` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleSettings {
    /// Master switch; when off, every oracle call yields its canned fallback
    #[serde(default = "default_oracle_enabled")]
    pub enabled: bool,

    /// Base URL of the generative API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Text-generation model id
    #[serde(default = "default_model")]
    pub model: String,

    /// Text-to-speech model id
    #[serde(default = "default_tts_model")]
    pub tts_model: String,
}

fn default_voice_enabled() -> bool {
    true
}

fn default_voice_name() -> String {
    "fenrir".to_string()
}

fn default_oracle_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://oracle.paradiseplanner.dev".to_string()
}

fn default_model() -> String {
    "snark-2-flash".to_string()
}

fn default_tts_model() -> String {
    "snark-2-tts".to_string()
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            enabled: default_voice_enabled(),
            voice: default_voice_name(),
        }
    }
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            enabled: default_oracle_enabled(),
            base_url: default_base_url(),
            model: default_model(),
            tts_model: default_tts_model(),
        }
    }
}
