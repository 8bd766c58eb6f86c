mod frame;
mod service;
mod state;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use frame::{PointControl, QuestionOption, SessionFrame};
pub use service::{EditOutcome, EditRejection, SessionService};
