pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod renderer;
pub mod ui;

pub use app::{App, RunState, RunSummary};
pub use config::{Bounds, Canvas, Params, ParticleStyle, SimConfig};
pub use error::{AppError, CliError, ProfileError, SurfaceError};
pub use renderer::{HeadlessSurface, ParticleHandle, Surface, WindowSurface};
