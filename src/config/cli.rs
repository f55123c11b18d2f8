use crate::config::settings::{ColorMode, OutputFormat, Settings};
use crate::config::toml_config::TomlConfig;
use crate::domain::model::{
    Attributes, CharacterInput, InputField, AGE_FIELD, DISCIPLINE_FIELD, GENERATION_FIELD, KNOWLEDGE_FIELD,
    TALENT_FIELD,
};
use crate::utils::error::Result;
use crate::utils::validation::{parse_bounded_integer, validate_range, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vtm-xp")]
#[command(about = "Starting XP calculator for VtM characters")]
pub struct CliConfig {
    /// Path to a TOML session file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (overrides the session file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Colored output (overrides the session file)
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Calculate once from flags instead of prompting
    Calc(CalcArgs),
}

#[derive(Debug, Clone, Copy, Args)]
pub struct CalcArgs {
    /// Character's age in years
    #[arg(long, allow_negative_numbers = true, value_parser = age_arg)]
    pub age: i32,

    /// Talent (1-10)
    #[arg(long, allow_negative_numbers = true, value_parser = talent_arg)]
    pub talent: i32,

    /// Work discipline (1-10)
    #[arg(long, allow_negative_numbers = true, value_parser = discipline_arg)]
    pub discipline: i32,

    /// Access to knowledge (1-10)
    #[arg(long, allow_negative_numbers = true, value_parser = knowledge_arg)]
    pub knowledge: i32,

    /// Generation (4-13)
    #[arg(long, allow_negative_numbers = true, value_parser = generation_arg)]
    pub generation: i32,
}

/// Flags go through the same parser as the interactive prompts.
fn field_arg(field: &InputField, raw: &str) -> std::result::Result<i32, String> {
    parse_bounded_integer(field.name, raw, field.min, field.max).map_err(|e| e.to_string())
}

fn age_arg(raw: &str) -> std::result::Result<i32, String> {
    field_arg(&AGE_FIELD, raw)
}

fn talent_arg(raw: &str) -> std::result::Result<i32, String> {
    field_arg(&TALENT_FIELD, raw)
}

fn discipline_arg(raw: &str) -> std::result::Result<i32, String> {
    field_arg(&DISCIPLINE_FIELD, raw)
}

fn knowledge_arg(raw: &str) -> std::result::Result<i32, String> {
    field_arg(&KNOWLEDGE_FIELD, raw)
}

fn generation_arg(raw: &str) -> std::result::Result<i32, String> {
    field_arg(&GENERATION_FIELD, raw)
}

impl CalcArgs {
    pub fn to_input(self) -> CharacterInput {
        CharacterInput {
            age: self.age,
            attributes: Attributes::new(self.talent, self.discipline, self.knowledge, self.generation),
        }
    }
}

impl Validate for CalcArgs {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            (&AGE_FIELD, self.age),
            (&TALENT_FIELD, self.talent),
            (&DISCIPLINE_FIELD, self.discipline),
            (&KNOWLEDGE_FIELD, self.knowledge),
            (&GENERATION_FIELD, self.generation),
        ] {
            validate_range(field.name, value, field.min, field.max)?;
        }
        Ok(())
    }
}

impl CliConfig {
    /// Defaults, then the session file if one was given, then flags.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let base = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => Settings::default(),
        };

        let settings = base.with_overrides(self.color, self.format);
        settings.validate()?;
        Ok(settings)
    }
}
