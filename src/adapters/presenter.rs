use crate::config::settings::{DisplaySettings, OutputFormat};
use crate::domain::model::{CharacterInput, XpBreakdown};
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

pub const RESULTS_HEADER: &str = "--- CALCULATION RESULTS ---";

/// Human-readable result block. Numbers always use `.` as decimal separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter {
    color: bool,
}

impl TextPresenter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Presenter for TextPresenter {
    fn render(&self, _input: &CharacterInput, breakdown: &XpBreakdown) -> Result<String> {
        let modifier_line = format!(
            "Potential Modifier (Balanced Model): {}",
            format_percent(breakdown.modifier)
        );
        let total_line = format!(
            "-----------> FINAL STARTING XP: {:.2} <-----------",
            breakdown.total_xp
        );

        let (modifier_line, total_line) = if self.color {
            (
                modifier_line.cyan().to_string(),
                total_line.green().to_string(),
            )
        } else {
            (modifier_line, total_line)
        };

        Ok(format!(
            "{}\nBase XP (From Age Only): {:.2}\nPotential Score (10-100 scale): {:.2}\n{}\n{}\n",
            RESULTS_HEADER, breakdown.base_xp, breakdown.potential_score, modifier_line, total_line
        ))
    }

    fn render_rejection(&self, message: &str) -> String {
        if self.color {
            message.red().to_string()
        } else {
            message.to_string()
        }
    }
}

/// `0.6604` becomes `66.04 %`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2} %", fraction * 100.0)
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a CharacterInput,
    result: &'a XpBreakdown,
}

/// One pretty-printed JSON object per calculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&self, input: &CharacterInput, breakdown: &XpBreakdown) -> Result<String> {
        let report = Report {
            input,
            result: breakdown,
        };
        let mut rendered = serde_json::to_string_pretty(&report)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

pub fn presenter_for(display: &DisplaySettings) -> Box<dyn Presenter> {
    match display.format {
        OutputFormat::Text => Box::new(TextPresenter::new(display.color.enabled())),
        OutputFormat::Json => Box::new(JsonPresenter),
    }
}
