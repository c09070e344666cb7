//! Inkpad Application
//!
//! Headless host for the Inkpad sketchpad: feeds a scripted sequence of
//! contact events and control presses through the core and writes the
//! resulting raster as PNG.

mod app;
mod controls;
mod script;

pub use app::{AppConfig, AppError, Cli, RunSummary, render_script, run};
pub use controls::{ControlInfo, ControlRegistry};
pub use script::{ControlAction, Step, apply_step, load_script, parse_script};
