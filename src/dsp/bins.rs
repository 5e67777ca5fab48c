//! Frequency bin layout: the boundaries of every displayed bar.
//!
//! Bin `i` covers `[bins[i], bins[i + 1])`; the last bin runs up to the
//! frequency max.

use std::collections::VecDeque;

use crate::error::{Result, SpectrumError};

/// Spacing of the frequency axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrequencyScale {
    /// Evenly spaced at the FFT resolution.
    Linear,
    /// Logarithmic in the upper range, `fraction` of an octave per bar,
    /// falling back to linear where octave steps get finer than the resolution.
    Octave { fraction: f64 },
}

impl FrequencyScale {
    /// Octave scale split into `parts` bars per octave.
    pub fn octave_parts(parts: u32) -> Result<Self> {
        if parts == 0 {
            return Err(SpectrumError::ZeroOctaveParts);
        }
        Ok(FrequencyScale::Octave {
            fraction: 1.0 / parts as f64,
        })
    }
}

/// Frequency distance between consecutive FFT bins of a `block_len`-sample
/// block: `(sample_rate / 2) / (block_len / 2)`.
pub fn frequency_step(sample_rate: u32, block_len: usize) -> Result<f64> {
    let step = sample_rate as f64 / block_len as f64;
    if !step.is_finite() || step <= 0.0 {
        return Err(SpectrumError::InvalidStep(step));
    }
    Ok(step)
}

/// Build the ascending bin boundaries for one session.
///
/// Boundaries are produced from `frequency_max` downward and prepended. With
/// an octave scale, the range is divided by `2^fraction` for as long as the
/// next division is still at least `step` wide; the rest of the range is
/// then filled linearly. The lowest boundary is the first one at or below
/// zero, so the first bin always holds 0 Hz.
pub fn make_frequency_bins(frequency_max: f64, step: f64, scale: FrequencyScale) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(SpectrumError::InvalidStep(step));
    }
    if !frequency_max.is_finite() || frequency_max <= 0.0 {
        return Err(SpectrumError::InvalidFrequencyMax(frequency_max));
    }

    let mut bins = VecDeque::new();
    let mut freq = frequency_max;

    if let FrequencyScale::Octave { fraction } = scale {
        if !fraction.is_finite() || fraction <= 0.0 {
            return Err(SpectrumError::InvalidSetting {
                name: "octave",
                reason: format!("fraction must be positive, got {}", fraction),
            });
        }
        let ratio = 2f64.powf(fraction);
        loop {
            freq /= ratio;
            bins.push_front(freq);
            if freq - freq / ratio < step {
                break;
            }
        }
    }

    while freq > 0.0 {
        let next = freq - step;
        if next == freq {
            return Err(SpectrumError::StepBelowPrecision { step, frequency: freq });
        }
        freq = next;
        bins.push_front(freq);
    }

    Ok(bins.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ascending(bins: &[f64]) {
        assert!(bins.windows(2).all(|w| w[0] < w[1]), "not ascending: {:?}", bins);
    }

    #[test]
    fn linear_layout() {
        let bins = make_frequency_bins(1000.0, 100.0, FrequencyScale::Linear).unwrap();
        let expected: Vec<f64> = (0..10).map(|i| i as f64 * 100.0).collect();
        assert_eq!(bins, expected);
    }

    #[test]
    fn octave_layout_falls_back_to_linear() {
        let scale = FrequencyScale::octave_parts(1).unwrap();
        let bins = make_frequency_bins(1600.0, 100.0, scale).unwrap();
        assert_eq!(bins, vec![0.0, 100.0, 200.0, 400.0, 800.0]);
    }

    #[test]
    fn finer_octave_parts_give_more_bins() {
        let step = frequency_step(44100, 512).unwrap();
        let coarse = make_frequency_bins(22050.0, step, FrequencyScale::octave_parts(1).unwrap()).unwrap();
        let fine = make_frequency_bins(22050.0, step, FrequencyScale::octave_parts(6).unwrap()).unwrap();
        assert!(fine.len() > coarse.len());
        assert_ascending(&coarse);
        assert_ascending(&fine);
        assert!(*fine.last().unwrap() <= 22050.0);
        assert!(fine[0] <= 0.0);
    }

    #[test]
    fn deterministic() {
        let scale = FrequencyScale::octave_parts(3).unwrap();
        let a = make_frequency_bins(11025.0, 43.0, scale).unwrap();
        let b = make_frequency_bins(11025.0, 43.0, scale).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn linear_stays_below_max() {
        let bins = make_frequency_bins(4000.0, 86.1328125, FrequencyScale::Linear).unwrap();
        assert_ascending(&bins);
        assert!(*bins.last().unwrap() < 4000.0);
        assert!(bins[0] <= 0.0 && bins[1] > 0.0);
    }

    #[test]
    fn step_is_resolution_of_block() {
        assert_eq!(frequency_step(44100, 512).unwrap(), 86.1328125);
        assert_eq!(frequency_step(8000, 1024).unwrap(), 7.8125);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(FrequencyScale::octave_parts(0), Err(SpectrumError::ZeroOctaveParts));
        assert_eq!(
            make_frequency_bins(1000.0, 0.0, FrequencyScale::Linear),
            Err(SpectrumError::InvalidStep(0.0))
        );
        assert_eq!(
            make_frequency_bins(-5.0, 10.0, FrequencyScale::Linear),
            Err(SpectrumError::InvalidFrequencyMax(-5.0))
        );
        assert!(frequency_step(44100, 0).is_err());
        assert!(matches!(
            make_frequency_bins(1e20, 86.0, FrequencyScale::Linear),
            Err(SpectrumError::StepBelowPrecision { .. })
        ));
    }
}
