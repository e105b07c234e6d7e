//! Quiz session engine: state machine, countdown, scheduling and scoring.

mod result;
mod scheduler;
mod session;
mod shuffle;
mod timer;

pub use result::{percentage, QuizResult, ResultTier};
pub use scheduler::{Generation, Scheduler, Token};
pub use session::{AnswerRecord, QuizSession, SessionError};
pub use shuffle::Randomizer;
pub use timer::{Timer, TimerEvent, Urgency};
