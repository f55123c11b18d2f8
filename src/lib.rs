pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CalcArgs, CliConfig, Command};

pub use app::{calculate_once, Session, SessionSummary};
pub use config::Settings;
pub use crate::core::{
    compute_base_xp, compute_breakdown, compute_final_modifier, compute_potential_score,
    compute_starting_xp, Attributes, CharacterInput, XpBreakdown,
};
pub use utils::error::{Result, XpError};
