//! Startup errors. Nothing after startup can fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The window surface could not be built.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixel buffer: {0}")]
    Pixels(#[from] pixels::Error),
}

/// Bad command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("flag needs an argument: {0}")]
    MissingValue(String),
    #[error("flag provided but not defined: {0}")]
    UnknownFlag(String),
}

#[derive(Debug, Error)]
#[error("could not create profile file {}: {source}", .path.display())]
pub struct ProfileError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl AppError {
    /// Process exit status. Usage errors get 2, everything else 1.
    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::Cli(_) => 2,
            AppError::Profile(_) | AppError::Surface(_) => 1,
        }
    }
}
