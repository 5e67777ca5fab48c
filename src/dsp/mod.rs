pub mod bins;
pub mod complex;
pub mod fft;
pub mod spectrum;

pub use bins::{frequency_step, make_frequency_bins, FrequencyScale};
pub use complex::Complex;
pub use fft::{dft, fft};
pub use spectrum::{get_spectrum, AmplitudeScale, SpectrumOptions};
