use crate::domain::model::{CharacterInput, XpBreakdown};
use crate::utils::error::Result;

/// Turns a finished calculation into the text shown to the user.
///
/// Styling lives here so the core only ever hands out plain numbers.
pub trait Presenter {
    fn render(&self, input: &CharacterInput, breakdown: &XpBreakdown) -> Result<String>;

    /// Message shown when a prompt answer is rejected.
    fn render_rejection(&self, message: &str) -> String {
        message.to_string()
    }
}
