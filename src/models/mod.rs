mod question;
mod state;

pub use question::{DisplayedOption, Question, RawQuestion, DEFAULT_CATEGORY};
pub use state::{Answer, QuestionPhase, SessionState};
