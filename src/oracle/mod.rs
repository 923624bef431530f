//! Client for the generative text/speech API ("the oracle")
//!
//! All of the app's flavor text comes from here: task rewrites, excuses, the
//! daily madness event, vent-button roasts, psych profiles, and spoken
//! one-liners. Every operation degrades to a canned fallback on any failure -
//! a dead network or missing API key never reaches the tracker or stylizer.

mod persona;
mod tts;

pub use tts::{SpeechClip, pcm16_to_f32};

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::OracleSettings;
use crate::domain::MadnessEvent;

/// Sample rate of speech responses, Hz
const TTS_SAMPLE_RATE: u32 = 24_000;

/// Cap on raw speech payload size (4 MiB ~ 90 s of 24 kHz mono PCM)
const MAX_SPEECH_BYTES: u64 = 4 * 1024 * 1024;

/// Client for the generative text/speech API
pub struct Oracle {
    settings: OracleSettings,
    api_key: Option<String>,
    client: ureq::Agent,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    system: &'a str,
    prompt: &'a str,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    text: String,
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    voice: &'a str,
}

impl Oracle {
    /// Create a client; `api_key: None` means every call falls back
    pub fn new(settings: OracleSettings, api_key: Option<String>) -> Self {
        let client = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(60))
            .build();

        Self {
            settings,
            api_key,
            client,
        }
    }

    /// Client that never talks to the network (used when the oracle is
    /// disabled in settings, and in tests)
    pub fn offline(settings: OracleSettings) -> Self {
        Self::new(settings, None)
    }

    fn key(&self) -> Result<&str> {
        if !self.settings.enabled {
            anyhow::bail!("oracle disabled in settings");
        }
        self.api_key.as_deref().context("no API key configured")
    }

    // ========================================
    // TEXT OPERATIONS (infallible, canned fallbacks)
    // ========================================

    /// Rewrite a chore as a stupid quest objective
    pub fn absurd_task(&self, task: &str) -> String {
        match self.generate(&persona::absurd_task_prompt(task), 1.2, None) {
            Ok(text) => text,
            Err(err) => {
                warn!("absurd task rewrite failed: {err:#}");
                format!("Just go do \"{task}\" and don't ask questions.")
            }
        }
    }

    /// One-sentence excuse for ditching a task
    pub fn excuse(&self, task: &str) -> String {
        match self.generate(&persona::excuse_prompt(task), 1.4, None) {
            Ok(text) => text,
            Err(err) => {
                warn!("excuse generation failed: {err:#}");
                "I just didn't feel like it.".to_string()
            }
        }
    }

    /// The structured "madness of the day" event
    pub fn madness_event(&self) -> MadnessEvent {
        match self.generate_structured(&persona::madness_prompt(), 1.0) {
            Ok(event) => event,
            Err(err) => {
                warn!("madness event generation failed: {err:#}");
                if self.api_key.is_none() {
                    MadnessEvent {
                        title: "Connection Lost".to_string(),
                        description: "No internet. The aliens probably chewed through \
                                      the cable. Or you just didn't pay."
                            .to_string(),
                        buff: "-100 Signal".to_string(),
                    }
                } else {
                    MadnessEvent {
                        title: "A Quiet Day".to_string(),
                        description: "Nothing happened. That is suspicious.".to_string(),
                        buff: "+0 Anxiety".to_string(),
                    }
                }
            }
        }
    }

    /// Short roast for the vent button
    pub fn insult(&self) -> String {
        match self.generate(&persona::insult_prompt(), 1.3, Some(50)) {
            Ok(text) => text,
            Err(err) => {
                warn!("insult generation failed: {err:#}");
                "Poking buttons won't fix your life.".to_string()
            }
        }
    }

    /// Pseudo-bureaucratic dossier write-up for the given name
    pub fn psych_profile(&self, name: &str) -> String {
        match self.generate(&persona::psych_profile_prompt(name), 1.1, Some(100)) {
            Ok(text) => text,
            Err(err) => {
                warn!("psych profile generation failed: {err:#}");
                "Subject is boring and of no interest.".to_string()
            }
        }
    }

    /// Synthesize speech with the given voice preset; `None` when speech is
    /// unavailable
    pub fn speak(&self, text: &str, voice: &str) -> Option<SpeechClip> {
        match self.fetch_speech(text, voice) {
            Ok(clip) => Some(clip),
            Err(err) => {
                warn!("speech synthesis failed: {err:#}");
                None
            }
        }
    }

    // ========================================
    // WIRE CALLS
    // ========================================

    fn generate(&self, prompt: &str, temperature: f32, max_tokens: Option<u32>) -> Result<String> {
        let key = self.key()?;
        let url = format!(
            "{}/v1/generate/{}",
            self.settings.base_url, self.settings.model
        );

        let response: GenerateResponse = self
            .client
            .post(&url)
            .set("x-api-key", key)
            .send_json(GenerateRequest {
                system: persona::SYSTEM_PERSONA,
                prompt,
                temperature,
                max_tokens,
            })
            .context("generative request failed")?
            .into_json()
            .context("failed to parse generative response")?;

        let text = response.text.trim().to_string();
        if text.is_empty() {
            anyhow::bail!("empty generative response");
        }
        Ok(text)
    }

    fn generate_structured(&self, prompt: &str, temperature: f32) -> Result<MadnessEvent> {
        let key = self.key()?;
        let url = format!(
            "{}/v1/generate/{}:structured",
            self.settings.base_url, self.settings.model
        );

        let event: MadnessEvent = self
            .client
            .post(&url)
            .set("x-api-key", key)
            .send_json(GenerateRequest {
                system: persona::SYSTEM_PERSONA,
                prompt,
                temperature,
                max_tokens: None,
            })
            .context("structured generative request failed")?
            .into_json()
            .context("failed to parse structured response")?;

        Ok(event)
    }

    fn fetch_speech(&self, text: &str, voice: &str) -> Result<SpeechClip> {
        let key = self.key()?;
        let url = format!(
            "{}/v1/speech/{}",
            self.settings.base_url, self.settings.tts_model
        );

        let response = self
            .client
            .post(&url)
            .set("x-api-key", key)
            .send_json(SpeechRequest { text, voice })
            .context("speech request failed")?;

        let mut pcm = Vec::new();
        response
            .into_reader()
            .take(MAX_SPEECH_BYTES)
            .read_to_end(&mut pcm)
            .context("failed to read speech payload")?;

        if pcm.is_empty() {
            anyhow::bail!("empty speech payload");
        }

        Ok(SpeechClip {
            pcm,
            sample_rate: TTS_SAMPLE_RATE,
        })
    }
}
