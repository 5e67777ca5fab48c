use serde::Deserialize;
use spectrum_bars::render::output::OutputFormat;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,
    #[serde(default = "default_amplitude_max")]
    pub amplitude_max: f64,
    #[serde(default = "default_smoothness")]
    pub smoothness: f64,
    #[serde(default)]
    pub frequency_max: Option<f64>,
    #[serde(default)]
    pub octave_scale: bool,
    #[serde(default)]
    pub octave_parts: Option<u32>,
    #[serde(default)]
    pub decibel_scale: bool,
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            read_buffer_size: default_read_buffer_size(),
            amplitude_max: default_amplitude_max(),
            smoothness: default_smoothness(),
            frequency_max: None,
            octave_scale: false,
            octave_parts: None,
            decibel_scale: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            format: OutputFormat::default(),
        }
    }
}

pub fn default_read_buffer_size() -> usize { 2048 }
pub fn default_amplitude_max() -> f64 { 5e6 }
pub fn default_smoothness() -> f64 { 10.0 }
pub fn default_height() -> u32 { 16 }

pub fn load_config(path: &Path) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("Invalid config {}: {}", path.display(), err);
            None
        }
    }
}
