pub mod calc;
pub mod session;

pub use calc::calculate_once;
pub use session::{Session, SessionSummary};
