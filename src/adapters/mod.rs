// Adapters layer: concrete implementations of the domain ports.

pub mod presenter;

pub use presenter::{presenter_for, JsonPresenter, TextPresenter};
