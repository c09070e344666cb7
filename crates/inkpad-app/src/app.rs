//! Headless application shell: configuration, script replay and PNG output.

use crate::controls::ControlRegistry;
use crate::script::{Step, apply_step, load_script};
use clap::Parser;
use inkpad_core::{ColorParseError, ConfigError, HistoryStatus, InkColor, SketchConfig, Sketchpad};
use inkpad_render::{PixmapSurface, RendererError, encode_png};
use peniko::Color;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid input script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid background color: {0}")]
    Background(ColorParseError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("No drawing surface available")]
    NoSurface,
    #[error("Step {index}: {source}")]
    Color {
        index: usize,
        source: ColorParseError,
    },
    #[error("Step {index}: scale must be positive, got {scale}")]
    InvalidScale { index: usize, scale: f64 },
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "inkpad", about = "Replay an Inkpad input script and render it to PNG")]
pub struct Cli {
    /// JSON input script (array of contact events and controls).
    #[arg(required_unless_present = "list_controls")]
    pub script: Option<PathBuf>,

    /// Output PNG path.
    #[arg(short, long, default_value = "inkpad.png")]
    pub output: PathBuf,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Sketchpad config (JSON). Missing fields use defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Background color for the PNG. Transparent when omitted.
    #[arg(long)]
    pub background: Option<String>,

    /// Print the available script controls and exit.
    #[arg(long)]
    pub list_controls: bool,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub background: Option<Color>,
    pub sketch: SketchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: None,
            sketch: SketchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build from command line arguments, loading the sketch config file if given.
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let sketch = match &cli.config {
            Some(path) => SketchConfig::from_json(&read_to_string(path)?)?,
            None => SketchConfig::default(),
        };
        let background = cli
            .background
            .as_deref()
            .map(InkColor::parse)
            .transpose()
            .map_err(AppError::Background)?
            .map(Color::from);

        Ok(Self {
            width: cli.width,
            height: cli.height,
            background,
            sketch,
        })
    }
}

/// What a script run left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub actions: usize,
    pub history: HistoryStatus,
    pub scale_label: String,
    pub brush_width_label: String,
}

/// Replay `steps` on a fresh surface and encode the result as PNG.
pub fn render_script(config: &AppConfig, steps: &[Step]) -> Result<(Vec<u8>, RunSummary), AppError> {
    let surface = PixmapSurface::new(config.width, config.height)
        .inspect_err(|e| log::error!("Failed to create surface: {}", e))
        .ok();
    let mut pad = Sketchpad::attach(surface, config.sketch.clone()).ok_or(AppError::NoSurface)?;

    for (index, step) in steps.iter().enumerate() {
        apply_step(&mut pad, index, step)?;
    }

    let summary = RunSummary {
        steps: steps.len(),
        actions: pad.engine().actions().len(),
        history: pad.history(),
        scale_label: pad.scale_label(),
        brush_width_label: pad.brush_width_label(),
    };
    let png = encode_png(pad.surface(), config.background)?;
    Ok((png, summary))
}

/// Run the command line application.
pub fn run(cli: Cli) -> Result<(), AppError> {
    if cli.list_controls {
        ControlRegistry::print_all();
        return Ok(());
    }
    let Some(script) = cli.script.as_deref() else {
        return Ok(());
    };

    let config = AppConfig::from_cli(&cli)?;
    let steps = load_script(script)?;
    log::info!("Loaded {} steps from {:?}", steps.len(), script);

    let (png, summary) = render_script(&config, &steps)?;
    std::fs::write(&cli.output, png).map_err(|source| AppError::Write {
        path: cli.output.clone(),
        source,
    })?;

    log::info!(
        "Rendered {} strokes (scale {}, brush {}) to {:?}",
        summary.actions,
        summary.scale_label,
        summary.brush_width_label,
        cli.output
    );
    Ok(())
}

fn read_to_string(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}
