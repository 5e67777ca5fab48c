/// Width of the PCM samples handled by the pipeline.
pub const SAMPLE_BITS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

/// Average interleaved frames down to one sample per frame.
pub fn downmix(interleaved: &[i16], channels: usize) -> Vec<f64> {
    assert!(channels > 0, "channel count must be positive");
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().map(|&s| s as f64).sum::<f64>() / channels as f64)
        .collect()
}

/// Decode a block of signed 16-bit PCM bytes and downmix it to mono.
/// A trailing odd byte is ignored.
pub fn samples_from_bytes(bytes: &[u8], channels: usize, order: ByteOrder) -> Vec<f64> {
    let shorts: Vec<i16> = bytes
        .chunks_exact(2)
        .map(|b| match order {
            ByteOrder::Little => i16::from_le_bytes([b[0], b[1]]),
            ByteOrder::Big => i16::from_be_bytes([b[0], b[1]]),
        })
        .collect();
    downmix(&shorts, channels)
}
