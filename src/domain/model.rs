use crate::core::potential::{
    clamp_attribute, clamp_generation, MAX_ATTRIBUTE, MAX_GENERATION, MIN_ATTRIBUTE,
    MIN_GENERATION,
};
use serde::{Deserialize, Serialize};

/// A number the user is asked for, with the range the prompt accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputField {
    pub name: &'static str,
    pub prompt: &'static str,
    pub min: i32,
    pub max: i32,
}

pub const MAX_PROMPT_AGE: i32 = 10_000;

pub const AGE_FIELD: InputField = InputField {
    name: "age",
    prompt: "Enter Character's Age: ",
    min: 0,
    max: MAX_PROMPT_AGE,
};

pub const TALENT_FIELD: InputField = InputField {
    name: "talent",
    prompt: "Talent (1-10): ",
    min: MIN_ATTRIBUTE,
    max: MAX_ATTRIBUTE,
};

pub const DISCIPLINE_FIELD: InputField = InputField {
    name: "discipline",
    prompt: "Work Discipline (1-10): ",
    min: MIN_ATTRIBUTE,
    max: MAX_ATTRIBUTE,
};

pub const KNOWLEDGE_FIELD: InputField = InputField {
    name: "knowledge access",
    prompt: "Access to Knowledge (1-10): ",
    min: MIN_ATTRIBUTE,
    max: MAX_ATTRIBUTE,
};

pub const GENERATION_FIELD: InputField = InputField {
    name: "generation",
    prompt: "Generation (4-13): ",
    min: MIN_GENERATION,
    max: MAX_GENERATION,
};

/// The four attributes that feed the potential score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub talent: i32,
    pub discipline: i32,
    pub knowledge_access: i32,
    pub generation: i32,
}

impl Attributes {
    pub fn new(talent: i32, discipline: i32, knowledge_access: i32, generation: i32) -> Self {
        Self {
            talent,
            discipline,
            knowledge_access,
            generation,
        }
    }

    /// Same attributes with every value pulled into its valid range.
    pub fn clamped(&self) -> Self {
        Self {
            talent: clamp_attribute(self.talent),
            discipline: clamp_attribute(self.discipline),
            knowledge_access: clamp_attribute(self.knowledge_access),
            generation: clamp_generation(self.generation),
        }
    }
}

/// One full set of answers collected from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterInput {
    pub age: i32,
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// Every intermediate value of a starting XP calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XpBreakdown {
    pub base_xp: f64,
    pub potential_score: f64,
    pub modifier: f64,
    pub total_xp: f64,
}
