mod feedback;
mod session;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::LoadError;
pub use feedback::Feedback;
pub use session::{AdvanceTicket, LoadStatus, QuizSession};
pub use workflow::QuizLoopService;
