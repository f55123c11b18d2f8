pub mod base_age;
pub mod composer;
pub mod modifier;
pub mod potential;

pub use base_age::compute_base_xp;
pub use composer::{compute_breakdown, compute_starting_xp};
pub use modifier::compute_final_modifier;
pub use potential::compute_potential_score;

pub use crate::domain::model::{Attributes, CharacterInput, XpBreakdown};
