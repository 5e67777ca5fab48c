//! Real-time audio spectrum pipeline: FFT, bar layout and amplitude scaling,
//! plus the decoding and rendering collaborators used by the
//! `spectrum-bars` binary.

pub mod audio;
pub mod dsp;
pub mod error;
pub mod render;

pub use error::SpectrumError;
