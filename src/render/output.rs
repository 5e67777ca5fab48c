use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::bars::{bar_heights, render_line, Smoother};
use crate::audio::features::SpectrumFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line of block glyphs per frame
    #[default]
    Bars,
    /// One JSON object per frame
    Json,
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    index: usize,
    time: f64,
    magnitudes: &'a [f64],
}

/// Smooths frames and writes them out in the chosen format.
pub struct FrameWriter<W: Write> {
    out: W,
    format: OutputFormat,
    smoother: Smoother,
    reference: f64,
    height: f64,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W, format: OutputFormat, smoothness: f64, reference: f64, height: u32) -> Self {
        Self {
            out,
            format,
            smoother: Smoother::new(smoothness),
            reference,
            height: height as f64,
        }
    }

    pub fn write_frame(&mut self, frame: SpectrumFrame) -> Result<()> {
        let magnitudes = self.smoother.smooth(frame.magnitudes);
        match self.format {
            OutputFormat::Bars => {
                let heights = bar_heights(&magnitudes, self.reference, self.height);
                writeln!(self.out, "{}", render_line(&heights, self.height))?;
            }
            OutputFormat::Json => {
                let json = JsonFrame {
                    index: frame.index,
                    time: frame.time,
                    magnitudes: &magnitudes,
                };
                serde_json::to_writer(&mut self.out, &json).context("Failed to encode frame")?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
