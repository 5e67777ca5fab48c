use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::io::{ErrorKind, Read};

use super::features::SpectrumFrame;
use super::pcm::{downmix, samples_from_bytes, ByteOrder};
use super::session::Session;

/// Compute the spectrum of every read block in an interleaved stream.
///
/// Blocks are independent, so they are transformed in parallel against the
/// session's shared bar layout. The last partial block is zero-padded.
pub fn analyze(session: &Session, stream: &[i16], progress: &ProgressBar) -> Result<Vec<SpectrumFrame>> {
    let block = session.interleaved_len();
    let channels = session.settings().channels;
    let seconds_per_block = session.block_len() as f64 / session.settings().sample_rate as f64;
    let total = stream.len().div_ceil(block);

    log::info!("Analyzing {} frames...", total);
    progress.set_length(total as u64);

    stream
        .par_chunks(block)
        .enumerate()
        .map(|(index, chunk)| {
            let mut mono = downmix(chunk, channels);
            mono.resize(session.block_len(), 0.0);

            let magnitudes = session
                .spectrum(&mono)
                .with_context(|| format!("Spectrum failed for frame {}", index))?;
            progress.inc(1);

            Ok::<_, anyhow::Error>(SpectrumFrame {
                index,
                time: index as f64 * seconds_per_block,
                magnitudes,
            })
        })
        .collect()
}

/// Read raw PCM blocks from `reader` until end of input, handing each
/// frame's spectrum to `on_frame` as soon as it is computed.
///
/// Returns the number of frames produced.
pub fn analyze_reader<R, F>(session: &Session, mut reader: R, order: ByteOrder, mut on_frame: F) -> Result<usize>
where
    R: Read,
    F: FnMut(SpectrumFrame) -> Result<()>,
{
    let mut bytes = vec![0u8; session.settings().read_buffer_size];
    let seconds_per_block = session.block_len() as f64 / session.settings().sample_rate as f64;
    let mut index = 0;

    loop {
        let filled = read_block(&mut reader, &mut bytes).context("Failed to read PCM input")?;
        if filled == 0 {
            break;
        }
        bytes[filled..].fill(0);

        let mono = samples_from_bytes(&bytes, session.settings().channels, order);
        let magnitudes = session.spectrum(&mono)?;
        on_frame(SpectrumFrame {
            index,
            time: index as f64 * seconds_per_block,
            magnitudes,
        })?;

        index += 1;
        if filled < bytes.len() {
            break;
        }
    }

    log::debug!("Input ended after {} frames", index);
    Ok(index)
}

/// Fill `buf` from `reader`, stopping early only at end of input.
fn read_block<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
