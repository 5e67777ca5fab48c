//! Folds an FFT into displayable per-bar magnitudes.

use super::fft::fft;
use crate::error::Result;

/// Amplitude axis of the spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmplitudeScale {
    Linear,
    /// Decibels relative to `amplitude_max`.
    Decibel { amplitude_max: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct SpectrumOptions<'a> {
    /// Frequency distance between consecutive FFT bins, in Hz.
    pub step: f64,
    /// Bar boundaries. `None` gives one output value per FFT bin below Nyquist.
    pub frequency_bins: Option<&'a [f64]>,
    pub amplitude_scale: AmplitudeScale,
    /// FFT bins above this frequency are ignored.
    pub frequency_max: f64,
}

/// Convert a linear magnitude to decibels against `amplitude_max`.
///
/// Zero stays zero; anything else is floored at 1 first so the result is
/// never negative.
pub fn to_decibels(magnitude: f64, amplitude_max: f64) -> f64 {
    if magnitude == 0.0 {
        return 0.0;
    }
    let magnitude = magnitude.max(1.0);
    20.0 * (magnitude / amplitude_max).log10() + 20.0 * amplitude_max.log10()
}

/// Run the FFT over `samples` and accumulate magnitudes into bars.
///
/// Every FFT bin between 0 Hz and `frequency_max` is added to the bar whose
/// range contains it; bars never move backwards, so adjacent FFT bins that
/// land in one bar are summed.
pub fn get_spectrum(samples: &[f64], opts: &SpectrumOptions<'_>) -> Result<Vec<f64>> {
    let ft = fft(samples)?;
    let half = &ft[..ft.len() / 2];

    let len = match opts.frequency_bins {
        Some(bins) => bins.len().max(1),
        None => half.len(),
    };
    let mut magnitudes = vec![0.0; len];

    let mut freq = 0.0;
    let mut bin = 0;
    for (i, c) in half.iter().enumerate() {
        if freq > opts.frequency_max {
            break;
        }

        let mut mag = c.norm();
        if let AmplitudeScale::Decibel { amplitude_max } = opts.amplitude_scale {
            mag = to_decibels(mag, amplitude_max);
        }

        match opts.frequency_bins {
            Some(bins) => {
                while bin + 1 < bins.len() && freq >= bins[bin + 1] {
                    bin += 1;
                }
                magnitudes[bin] += mag;
            }
            None => magnitudes[i] += mag,
        }
        freq += opts.step;
    }

    Ok(magnitudes)
}
