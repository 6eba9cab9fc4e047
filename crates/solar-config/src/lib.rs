//! Configuration system for the solar scene.
//!
//! Runtime-configurable settings persisted to disk as a RON file, with CLI
//! overrides via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{AssetConfig, BackgroundConfig, Config, DebugConfig, WindowConfig};
pub use error::ConfigError;
