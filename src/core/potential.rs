//! Potential score: a weighted sum of four attributes, bounded to [10, 100].

pub const TALENT_WEIGHT: f64 = 3.0;
pub const DISCIPLINE_WEIGHT: f64 = 3.0;
pub const KNOWLEDGE_ACCESS_WEIGHT: f64 = 2.5;
pub const GENERATION_WEIGHT: f64 = 1.5;

pub const MIN_ATTRIBUTE: i32 = 1;
pub const MAX_ATTRIBUTE: i32 = 10;
pub const MIN_GENERATION: i32 = 4;
pub const MAX_GENERATION: i32 = 13;

pub const MIN_POTENTIAL_SCORE: f64 = 10.0;
pub const MAX_POTENTIAL_SCORE: f64 = 100.0;

/// Generation 4 scores 10, generation 13 scores 1.
const GENERATION_PIVOT: i32 = 14;

pub fn clamp_attribute(value: i32) -> i32 {
    value.clamp(MIN_ATTRIBUTE, MAX_ATTRIBUTE)
}

pub fn clamp_generation(value: i32) -> i32 {
    value.clamp(MIN_GENERATION, MAX_GENERATION)
}

/// Score the four attributes. Out-of-range inputs are clamped, never rejected.
pub fn compute_potential_score(
    talent: i32,
    discipline: i32,
    knowledge_access: i32,
    generation: i32,
) -> f64 {
    let talent = clamp_attribute(talent);
    let discipline = clamp_attribute(discipline);
    let knowledge_access = clamp_attribute(knowledge_access);
    let generation_score = GENERATION_PIVOT - clamp_generation(generation);

    let score = f64::from(talent) * TALENT_WEIGHT
        + f64::from(discipline) * DISCIPLINE_WEIGHT
        + f64::from(knowledge_access) * KNOWLEDGE_ACCESS_WEIGHT
        + f64::from(generation_score) * GENERATION_WEIGHT;

    score.clamp(MIN_POTENTIAL_SCORE, MAX_POTENTIAL_SCORE)
}
