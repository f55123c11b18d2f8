#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CalcArgs, CliConfig, Command};
pub use settings::{ColorMode, LogFormat, LoggingSettings, OutputFormat, Settings};
