mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use cli::Cli;
use spectrum_bars::audio::analysis::{analyze, analyze_reader};
use spectrum_bars::audio::decode::decode_pcm;
use spectrum_bars::audio::pcm::ByteOrder;
use spectrum_bars::audio::session::{Session, SessionSettings};
use spectrum_bars::render::output::{FrameWriter, OutputFormat};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut cli = Cli::parse();

    // Explicit --config path, or auto-detect spectrum-bars.toml / user config
    let config_path = cli.config.clone().or_else(|| {
        let local = PathBuf::from("spectrum-bars.toml");
        if local.exists() {
            return Some(local);
        }
        let user = dirs::config_dir()?.join("spectrum-bars").join("config.toml");
        user.exists().then_some(user)
    });
    if let Some(ref path) = config_path {
        if let Some(cfg) = config::load_config(path) {
            log::info!("Loaded config from {}", path.display());
            // Config values apply only when the CLI is at its default
            if cli.read_buffer_size == config::default_read_buffer_size() {
                cli.read_buffer_size = cfg.audio.read_buffer_size;
            }
            if cli.amplitude_max == config::default_amplitude_max() {
                cli.amplitude_max = cfg.audio.amplitude_max;
            }
            if cli.smoothness == config::default_smoothness() {
                cli.smoothness = cfg.audio.smoothness;
            }
            if cli.frequency_max.is_none() {
                cli.frequency_max = cfg.audio.frequency_max;
            }
            if !cli.octave_scale {
                cli.octave_scale = cfg.audio.octave_scale;
            }
            if cli.octave_parts.is_none() {
                cli.octave_parts = cfg.audio.octave_parts;
            }
            if !cli.decibel_scale {
                cli.decibel_scale = cfg.audio.decibel_scale;
            }
            if cli.height == config::default_height() {
                cli.height = cfg.display.height;
            }
            if cli.format == OutputFormat::default() {
                cli.format = cfg.display.format;
            }
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }

    let out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    if cli.raw {
        run_raw(&cli, out)
    } else {
        run_file(&cli, out)
    }
}

fn settings(cli: &Cli, sample_rate: u32, channels: usize) -> SessionSettings {
    SessionSettings {
        sample_rate,
        channels,
        read_buffer_size: cli.read_buffer_size,
        amplitude_max: cli.amplitude_max,
        smoothness: cli.smoothness,
        frequency_max: cli.frequency_max,
        octave_scale: cli.octave_scale,
        octave_parts: cli.octave_parts,
        decibel_scale: cli.decibel_scale,
    }
}

fn frame_writer<W: Write>(cli: &Cli, session: &Session, out: W) -> FrameWriter<W> {
    log::info!(
        "Drawing {} bars at {:.2}Hz resolution up to {:.0}Hz",
        session.frequency_bins().len(),
        session.step(),
        session.frequency_max()
    );
    FrameWriter::new(
        out,
        cli.format,
        session.settings().smoothness,
        session.display_max(),
        cli.height,
    )
}

/// Live path: process stdin block by block until it closes.
fn run_raw(cli: &Cli, out: Box<dyn Write>) -> Result<()> {
    let session = Session::new(settings(cli, cli.sample_rate, cli.channels))?;
    let order = if cli.big_endian { ByteOrder::Big } else { ByteOrder::Little };

    log::info!(
        "Reading raw PCM from stdin: {}Hz, {} channel(s), {:?} endian",
        cli.sample_rate, cli.channels, order
    );

    let mut writer = frame_writer(cli, &session, out);
    let frames = analyze_reader(&session, std::io::stdin().lock(), order, |frame| {
        writer.write_frame(frame)
    })?;
    writer.finish()?;

    log::info!("Done: {} frames", frames);
    Ok(())
}

fn run_file(cli: &Cli, out: Box<dyn Write>) -> Result<()> {
    let input = cli.input.as_ref().context("Input audio file is required (or use --raw)")?;
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    log::info!("Input: {}", input.display());
    let stream = decode_pcm(input)?;
    let session = Session::new(settings(cli, stream.sample_rate, stream.channels))?;

    let pb = if cli.output.is_some() {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} frames ({eta} remaining)")?
                .progress_chars("=>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let frames = analyze(&session, &stream.samples, &pb)?;
    pb.finish_and_clear();

    let total = frames.len();
    let mut writer = frame_writer(cli, &session, out);
    for frame in frames {
        writer.write_frame(frame)?;
    }
    writer.finish()?;

    match cli.output {
        Some(ref path) => log::info!("Done! {} frames written to {}", total, path.display()),
        None => log::info!("Done! {} frames", total),
    }
    Ok(())
}
