use crate::core::compute_breakdown;
use crate::domain::model::{CharacterInput, XpBreakdown};
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use std::io::Write;

/// Compute and print a single result block.
pub fn calculate_once<W: Write>(
    input: &CharacterInput,
    presenter: &dyn Presenter,
    output: &mut W,
) -> Result<XpBreakdown> {
    let breakdown = compute_breakdown(input.age, &input.attributes);
    tracing::debug!(
        age = input.age,
        potential_score = breakdown.potential_score,
        modifier = breakdown.modifier,
        total_xp = breakdown.total_xp,
        "Calculated starting XP"
    );

    output.write_all(presenter.render(input, &breakdown)?.as_bytes())?;
    output.flush()?;
    Ok(breakdown)
}
