//! Messages exchanged between the quiz session and its presenter.
//!
//! The presenter only ever talks to the session through [`Command`]s and
//! only hears back through [`SessionEvent`]s and the session's read
//! accessors. Both serialize to tagged JSON for logging.

use serde::{Deserialize, Serialize};

use crate::models::DisplayedOption;
use crate::session::{QuizResult, Urgency};

/// Input forwarded by the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Draw a fresh pool and show the first question.
    Start,

    /// Answer the current question with the option's original index.
    Submit { original_index: usize },

    /// Skip the remaining auto-advance delay after an answer.
    Next,

    /// Abandon the play-through and return to the idle state.
    Restart,
}

/// Notifications produced by the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A question is on screen and its countdown is running.
    QuestionReady {
        number: usize,
        total: usize,
        prompt: String,
        options: Vec<DisplayedOption>,
    },

    /// The countdown moved by one unit.
    Tick { remaining: u32, urgency: Urgency },

    /// The player submitted an option.
    Answered {
        selected: usize,
        correct_index: usize,
        is_correct: bool,
        score: usize,
    },

    /// The countdown expired before an answer was submitted.
    TimedOut { correct_index: usize },

    /// The last question has been resolved.
    Completed { result: QuizResult },

    /// The session was reset and is waiting for a new start.
    Restarted,
}

impl SessionEvent {
    pub fn tick(remaining: u32) -> Self {
        Self::Tick {
            remaining,
            urgency: Urgency::from_remaining(remaining),
        }
    }
}
