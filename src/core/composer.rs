use super::{compute_base_xp, compute_final_modifier, compute_potential_score};
use crate::domain::model::{Attributes, XpBreakdown};

/// Run the age curve, the scorer and the modifier curve, keeping every step.
pub fn compute_breakdown(age: i32, attributes: &Attributes) -> XpBreakdown {
    let base_xp = compute_base_xp(age);
    let attributes = attributes.clamped();
    let potential_score = compute_potential_score(
        attributes.talent,
        attributes.discipline,
        attributes.knowledge_access,
        attributes.generation,
    );
    let modifier = compute_final_modifier(potential_score);

    XpBreakdown {
        base_xp,
        potential_score,
        modifier,
        total_xp: base_xp * (1.0 + modifier),
    }
}

/// Final starting XP for a character.
pub fn compute_starting_xp(
    age: i32,
    talent: i32,
    discipline: i32,
    knowledge_access: i32,
    generation: i32,
) -> f64 {
    let attributes = Attributes::new(talent, discipline, knowledge_access, generation);
    compute_breakdown(age, &attributes).total_xp
}
