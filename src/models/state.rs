use serde::Serialize;

/// What the player did with the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index")]
pub enum Answer {
    /// An option was submitted, identified by its index in the bank record.
    Chosen(usize),
    /// The countdown ran out before anything was submitted.
    TimedOut,
}

impl Answer {
    pub fn chosen_index(self) -> Option<usize> {
        match self {
            Answer::Chosen(index) => Some(index),
            Answer::TimedOut => None,
        }
    }

    /// Numeric form used by the original web front end: `-1` for a timeout.
    pub fn as_sentinel(self) -> i64 {
        match self {
            Answer::Chosen(index) => index as i64,
            Answer::TimedOut => -1,
        }
    }
}

/// Sub-phase of a question while the quiz is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuestionPhase {
    AwaitingAnswer,
    Answered,
}

/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    /// Ready for `start()`.
    Idle,
    InProgress(QuestionPhase),
    /// Every question in the pool has been answered or timed out.
    Complete,
}

impl SessionState {
    pub fn is_in_progress(self) -> bool {
        matches!(self, SessionState::InProgress(_))
    }
}
