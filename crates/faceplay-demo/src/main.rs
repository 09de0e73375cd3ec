//! Faceplay Demo: replays frames through the face filter pipeline.
//!
//! Frames come from still images, face detections from a recorded JSON
//! script. After the run every display tile is written as a PNG together
//! with a JSON run report.
//!
//! Usage:
//!   faceplay frame.jpg                              # snapshot on frame 0
//!   faceplay a.png b.png -d faces.json --face-mode blur --sound

mod app;
mod config;
mod detector;
mod image_loader;
mod render;
mod sound;
mod source;
mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::FrameOrchestrator;
use crate::config::AppConfig;
use crate::detector::ScriptedDetector;
use crate::sound::LoggingSink;
use crate::source::StillFrames;
use crate::state::FaceMode;

#[derive(Parser, Debug)]
#[command(name = "faceplay")]
#[command(author, version, about = "Face-driven image filter playground", long_about = None)]
struct Args {
    /// Input frames, replayed in order
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Recorded detector output (JSON)
    #[arg(short, long)]
    detections: Option<PathBuf>,

    /// Initial face mode
    #[arg(long, value_enum)]
    face_mode: Option<FaceMode>,

    /// Start with sound control enabled
    #[arg(long)]
    sound: bool,

    /// Keys pressed before the first frame (0-4 face mode, s sound)
    #[arg(short, long, default_value = "")]
    keys: String,

    /// Number of frames to process
    #[arg(short, long)]
    frames: Option<u32>,

    /// Frame on which the snapshot is taken
    #[arg(long)]
    snapshot_frame: Option<u32>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Red threshold
    #[arg(long)]
    red: Option<i32>,

    /// Green threshold
    #[arg(long)]
    green: Option<i32>,

    /// Blue threshold
    #[arg(long)]
    blue: Option<i32>,

    /// Cr threshold
    #[arg(long)]
    cr: Option<i32>,

    /// HSV value threshold
    #[arg(long)]
    value: Option<i32>,

    /// Pixelate block size
    #[arg(long)]
    block_size: Option<u32>,

    /// Print the run report to stdout
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Override `config` with the flags given, then validate the result.
    fn apply(&self, config: &mut AppConfig) -> anyhow::Result<()> {
        if let Some(mode) = self.face_mode {
            config.face_mode = mode;
        }
        if self.sound {
            config.sound_on = true;
        }
        if let Some(v) = self.frames {
            config.frames = v;
        }
        if let Some(v) = self.snapshot_frame {
            config.snapshot_frame = v;
        }
        if let Some(v) = &self.output {
            config.output_dir = v.clone();
        }
        if let Some(v) = self.block_size {
            config.block_size = v;
        }
        let t = &mut config.thresholds;
        for (arg, slot) in [
            (self.red, &mut t.red),
            (self.green, &mut t.green),
            (self.blue, &mut t.blue),
            (self.cr, &mut t.cr),
            (self.value, &mut t.v),
        ] {
            if let Some(v) = arg {
                *slot = v;
            }
        }
        config.validate().context("invalid configuration")?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = AppConfig::default();
    args.apply(&mut config)?;

    let source = StillFrames::load(&args.images, config.frame_width, config.frame_height)
        .context("loading input frames")?;
    let detector = match &args.detections {
        Some(path) => ScriptedDetector::from_file(path)
            .with_context(|| format!("loading detections from {}", path.display()))?,
        None => ScriptedDetector::default(),
    };
    info!(
        frames = config.frames,
        face_mode = %config.face_mode,
        sound_on = config.sound_on,
        inputs = args.images.len(),
        "starting at {}x{}",
        config.frame_width,
        config.frame_height
    );

    let output_dir = config.output_dir.clone();
    let mut app = FrameOrchestrator::new(config, source, detector, LoggingSink::default());
    for key in args.keys.chars() {
        app.press(key);
    }

    if let Some(last) = app.run()? {
        info!(
            volume = last.signal.volume,
            rate = ?last.signal.rate,
            peak_bar = last.bars.iter().cloned().fold(0.0_f32, f32::max),
            "last frame {}x{}",
            last.frame.width(),
            last.frame.height()
        );
    }

    let tiles = app.render()?;
    for tile in &tiles {
        let path = output_dir.join(format!("{}.png", tile.name));
        image_loader::save_png(&tile.image, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    let report = app.report(&tiles);
    let json = serde_json::to_string_pretty(&report)?;
    let report_path = output_dir.join("report.json");
    std::fs::create_dir_all(&output_dir)?;
    std::fs::write(&report_path, &json)
        .with_context(|| format!("writing {}", report_path.display()))?;
    if args.json {
        println!("{json}");
    }

    Ok(())
}
