use clap::Parser;
use spectrum_bars::render::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spectrum-bars", about = "Real-time audio spectrum visualizer for the terminal")]
pub struct Cli {
    /// Input audio file (WAV, MP3, FLAC, OGG)
    pub input: Option<PathBuf>,

    /// Read signed 16-bit PCM from stdin instead of a file
    #[arg(long, conflicts_with = "input")]
    pub raw: bool,

    /// Sample rate of raw input
    #[arg(long, default_value_t = 8000, requires = "raw")]
    pub sample_rate: u32,

    /// Channel count of raw input
    #[arg(long, default_value_t = 1, requires = "raw")]
    pub channels: usize,

    /// Raw input is big-endian
    #[arg(long, requires = "raw")]
    pub big_endian: bool,

    /// Write frames to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./spectrum-bars.toml or the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bytes of PCM consumed per frame
    #[arg(long, default_value_t = 2048)]
    pub read_buffer_size: usize,

    /// Amplitude drawn at full bar height
    #[arg(long, default_value_t = 5e6)]
    pub amplitude_max: f64,

    /// Weight of the previous frame (1 = no smoothing)
    #[arg(long, default_value_t = 10.0)]
    pub smoothness: f64,

    /// Highest displayed frequency in Hz (default: Nyquist)
    #[arg(long)]
    pub frequency_max: Option<f64>,

    /// Space bars by octave fractions instead of linearly
    #[arg(long)]
    pub octave_scale: bool,

    /// Bars per octave when --octave-scale is set
    #[arg(long)]
    pub octave_parts: Option<u32>,

    /// Show amplitudes in decibels
    #[arg(long)]
    pub decibel_scale: bool,

    /// Bar height in rows
    #[arg(long, default_value_t = 16)]
    pub height: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Bars)]
    pub format: OutputFormat,
}
