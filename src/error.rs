use thiserror::Error;

/// Precondition violations raised by the spectrum pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("FFT input length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("frequency step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("step {step} Hz is lost in the precision of {frequency} Hz")]
    StepBelowPrecision { step: f64, frequency: f64 },

    #[error("frequency max must be finite and positive, got {0}")]
    InvalidFrequencyMax(f64),

    #[error("octave scale needs at least one octave part")]
    ZeroOctaveParts,

    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SpectrumError>;
