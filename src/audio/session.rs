//! Per-playback settings and the state derived from them once.

use super::pcm::SAMPLE_BITS;
use crate::dsp::{
    frequency_step, get_spectrum, make_frequency_bins, AmplitudeScale, FrequencyScale,
    SpectrumOptions,
};
use crate::error::{Result, SpectrumError};

/// Everything that stays fixed for one playback session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub sample_rate: u32,
    pub channels: usize,
    /// Bytes of interleaved 16-bit PCM consumed per frame.
    pub read_buffer_size: usize,
    /// Reference level for decibels and for full bar height.
    pub amplitude_max: f64,
    /// Weight of the previous frame when smoothing; 1 disables smoothing.
    pub smoothness: f64,
    /// Highest displayed frequency; the Nyquist frequency when unset.
    pub frequency_max: Option<f64>,
    pub octave_scale: bool,
    pub octave_parts: Option<u32>,
    pub decibel_scale: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            channels: 2,
            read_buffer_size: 2048,
            amplitude_max: 5e6,
            smoothness: 10.0,
            frequency_max: None,
            octave_scale: false,
            octave_parts: None,
            decibel_scale: false,
        }
    }
}

/// A validated session with its bar layout built.
#[derive(Debug, Clone)]
pub struct Session {
    settings: SessionSettings,
    block_len: usize,
    step: f64,
    frequency_max: f64,
    frequency_bins: Vec<f64>,
}

fn invalid(name: &'static str, reason: impl Into<String>) -> SpectrumError {
    SpectrumError::InvalidSetting {
        name,
        reason: reason.into(),
    }
}

impl Session {
    pub fn new(settings: SessionSettings) -> Result<Self> {
        if settings.sample_rate == 0 {
            return Err(invalid("sample_rate", "must be positive"));
        }
        if settings.channels == 0 {
            return Err(invalid("channels", "must be positive"));
        }
        if !settings.amplitude_max.is_finite() || settings.amplitude_max <= 0.0 {
            return Err(invalid(
                "amplitude_max",
                format!("must be positive, got {}", settings.amplitude_max),
            ));
        }
        if settings.decibel_scale && settings.amplitude_max <= 1.0 {
            return Err(invalid(
                "amplitude_max",
                format!("must exceed 1 on a decibel scale, got {}", settings.amplitude_max),
            ));
        }
        if !settings.smoothness.is_finite() || settings.smoothness < 1.0 {
            return Err(invalid(
                "smoothness",
                format!("must be at least 1, got {}", settings.smoothness),
            ));
        }

        let bytes_per_frame = settings.channels * (SAMPLE_BITS as usize / 8);
        let block_len = settings.read_buffer_size / bytes_per_frame;
        if settings.read_buffer_size % bytes_per_frame != 0 || !block_len.is_power_of_two() {
            return Err(invalid(
                "read_buffer_size",
                format!(
                    "{} bytes of {}-channel audio is not a power-of-two number of frames",
                    settings.read_buffer_size, settings.channels
                ),
            ));
        }

        let nyquist = settings.sample_rate as f64 / 2.0;
        let frequency_max = settings.frequency_max.unwrap_or(nyquist);
        if frequency_max > nyquist {
            return Err(invalid(
                "frequency_max",
                format!("{}Hz is above the Nyquist frequency {}Hz", frequency_max, nyquist),
            ));
        }
        let scale = if settings.octave_scale {
            FrequencyScale::octave_parts(settings.octave_parts.unwrap_or(0))?
        } else {
            FrequencyScale::Linear
        };

        let step = frequency_step(settings.sample_rate, block_len)?;
        let frequency_bins = make_frequency_bins(frequency_max, step, scale)?;

        log::debug!(
            "Session: {} samples/frame, step={:.2}Hz, max={:.0}Hz, {} bars ({:?})",
            block_len,
            step,
            frequency_max,
            frequency_bins.len(),
            scale
        );

        Ok(Self {
            settings,
            block_len,
            step,
            frequency_max,
            frequency_bins,
        })
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Mono samples per frame.
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Interleaved PCM samples per frame.
    pub fn interleaved_len(&self) -> usize {
        self.block_len * self.settings.channels
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn frequency_max(&self) -> f64 {
        self.frequency_max
    }

    pub fn frequency_bins(&self) -> &[f64] {
        &self.frequency_bins
    }

    /// Magnitude drawn at full bar height.
    pub fn display_max(&self) -> f64 {
        if self.settings.decibel_scale {
            20.0 * self.settings.amplitude_max.log10()
        } else {
            self.settings.amplitude_max
        }
    }

    /// Bar magnitudes for one block of mono samples.
    pub fn spectrum(&self, block: &[f64]) -> Result<Vec<f64>> {
        let amplitude_scale = if self.settings.decibel_scale {
            AmplitudeScale::Decibel {
                amplitude_max: self.settings.amplitude_max,
            }
        } else {
            AmplitudeScale::Linear
        };
        get_spectrum(
            block,
            &SpectrumOptions {
                step: self.step,
                frequency_bins: Some(self.frequency_bins.as_slice()),
                amplitude_scale,
                frequency_max: self.frequency_max,
            },
        )
    }
}
