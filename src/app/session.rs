use crate::core::compute_breakdown;
use crate::domain::model::{
    Attributes, CharacterInput, InputField, AGE_FIELD, DISCIPLINE_FIELD, GENERATION_FIELD,
    KNOWLEDGE_FIELD, TALENT_FIELD,
};
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use crate::utils::validation::parse_bounded_integer;
use std::io::{BufRead, Write};

pub const BANNER: &str = "--- VtM Advanced Character XP Calculator (Balanced Model v1.5) ---";
pub const ROUND_SEPARATOR: &str = "-------------------------------------------";
pub const CONTINUE_PROMPT: &str =
    "Press Enter to perform a new calculation (or type 'q' to quit): ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub calculations: usize,
}

/// Interactive prompt loop over any line reader and writer.
///
/// End of input at any prompt ends the session the same way as `q`.
pub struct Session<R, W> {
    input: R,
    output: W,
    presenter: Box<dyn Presenter>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, presenter: Box<dyn Presenter>) -> Self {
        Self {
            input,
            output,
            presenter,
        }
    }

    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        writeln!(self.output, "{}", BANNER)?;

        loop {
            writeln!(self.output, "\n{}", ROUND_SEPARATOR)?;

            let Some(input) = self.read_character()? else {
                tracing::debug!("Input closed while prompting");
                break;
            };

            let breakdown = compute_breakdown(input.age, &input.attributes);
            tracing::debug!(
                age = input.age,
                potential_score = breakdown.potential_score,
                modifier = breakdown.modifier,
                total_xp = breakdown.total_xp,
                "Calculated starting XP"
            );

            writeln!(self.output)?;
            self.output
                .write_all(self.presenter.render(&input, &breakdown)?.as_bytes())?;
            summary.calculations += 1;

            if !self.prompt_continue()? {
                break;
            }
        }

        tracing::info!(calculations = summary.calculations, "Session ended");
        Ok(summary)
    }

    fn read_character(&mut self) -> Result<Option<CharacterInput>> {
        let mut values = [0; 5];
        let fields = [
            AGE_FIELD,
            TALENT_FIELD,
            DISCIPLINE_FIELD,
            KNOWLEDGE_FIELD,
            GENERATION_FIELD,
        ];

        for (slot, field) in values.iter_mut().zip(fields.iter()) {
            match self.prompt_for_integer(field)? {
                Some(value) => *slot = value,
                None => return Ok(None),
            }
        }

        let [age, talent, discipline, knowledge_access, generation] = values;
        Ok(Some(CharacterInput {
            age,
            attributes: Attributes::new(talent, discipline, knowledge_access, generation),
        }))
    }

    /// Ask until the answer parses and lies within the field's range.
    /// Returns `None` once input is exhausted.
    pub fn prompt_for_integer(&mut self, field: &InputField) -> Result<Option<i32>> {
        loop {
            write!(self.output, "{}", field.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_bounded_integer(field.name, &line, field.min, field.max) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::debug!("Rejected input: {}", e);
                    let message = format!(
                        "Invalid input! Please enter an integer between {} and {}.",
                        field.min, field.max
                    );
                    writeln!(self.output, "{}", self.presenter.render_rejection(&message))?;
                }
            }
        }
    }

    fn prompt_continue(&mut self) -> Result<bool> {
        write!(self.output, "\n{}", CONTINUE_PROMPT)?;
        self.output.flush()?;

        Ok(match self.read_line()? {
            Some(line) => !line.trim().eq_ignore_ascii_case("q"),
            None => false,
        })
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
