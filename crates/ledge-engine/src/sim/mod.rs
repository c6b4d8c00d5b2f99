pub mod session;
pub mod step;

pub use session::Session;
pub use step::{step, substeps, PlayState, TickOutcome, MAX_SUBSTEPS};
