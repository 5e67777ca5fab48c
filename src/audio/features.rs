use serde::Serialize;

/// Bar magnitudes for one read block.
#[derive(Clone, Debug, Serialize)]
pub struct SpectrumFrame {
    /// Position of the block in the stream
    pub index: usize,
    /// Start of the block in seconds
    pub time: f64,
    /// One value per displayed bar
    pub magnitudes: Vec<f64>,
}
