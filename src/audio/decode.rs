use anyhow::{bail, Context, Result};
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Interleaved 16-bit PCM as read from a file.
pub struct PcmStream {
    pub samples: Vec<i16>,
    pub channels: usize,
    pub sample_rate: u32,
}

impl PcmStream {
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.channels as f64 / self.sample_rate as f64
    }
}

/// The first audio track of a container, ready to be pulled from.
struct AudioTrack {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    id: u32,
    sample_rate: u32,
}

fn open_track(path: &Path) -> Result<AudioTrack> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open audio file: {}", path.display()))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let format = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .with_context(|| format!("Unrecognized audio container: {}", path.display()))?
        .format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("No audio tracks found")?;
    let sample_rate = track.codec_params.sample_rate.context("Unknown sample rate")?;
    let decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("Failed to create audio decoder")?;
    let id = track.id;

    Ok(AudioTrack {
        format,
        decoder,
        id,
        sample_rate,
    })
}

/// Decode the first audio track of `path` into interleaved `i16` samples.
///
/// The channel layout is fixed by the first decoded packet; a stream that
/// changes it midway cannot be split into frames and is rejected.
pub fn decode_pcm(path: &Path) -> Result<PcmStream> {
    let mut track = open_track(path)?;
    let mut samples: Vec<i16> = Vec::new();
    let mut channels: Option<usize> = None;
    let mut skipped = 0usize;

    loop {
        let packet = match track.format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        };
        if packet.track_id() != track.id {
            continue;
        }

        let decoded = match track.decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(err)) => {
                log::debug!("Dropping undecodable packet at ts {}: {}", packet.ts(), err);
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let spec = *decoded.spec();
        let count = spec.channels.count();
        match channels {
            None => channels = Some(count),
            Some(c) if c != count => bail!("Channel count changed from {} to {} mid-stream", c, count),
            Some(_) => {}
        }

        let mut buf = SampleBuffer::<i16>::new(decoded.capacity() as u64, spec);
        buf.copy_interleaved_ref(decoded);
        samples.extend_from_slice(buf.samples());
    }

    let channels = channels.context("Audio track contains no decodable packets")?;
    if skipped > 0 {
        log::warn!("{} packet(s) could not be decoded and were dropped", skipped);
    }

    let stream = PcmStream {
        samples,
        channels,
        sample_rate: track.sample_rate,
    };
    log::info!(
        "{:.1}s of {}Hz audio across {} channel(s)",
        stream.duration(),
        stream.sample_rate,
        stream.channels
    );
    Ok(stream)
}
