use std::time::Duration;

use log::{debug, error};

use crate::models::{DisplayedOption, SessionState};
use crate::protocol::{Command, SessionEvent};
use crate::session::{QuizSession, SessionError};

/// Presenter state wrapped around a [`QuizSession`].
///
/// Holds the bits that only matter on screen (option cursor, results
/// scroll) and turns key-level intents into session commands.
pub struct App {
    session: QuizSession,
    cursor: usize,
    result_scroll: usize,
}

impl App {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            cursor: 0,
            result_scroll: 0,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.session.next_deadline()
    }

    pub fn advance_clock_to(&mut self, now: Duration) {
        self.session.advance_clock_to(now);
        self.sync();
    }

    pub fn start_quiz(&mut self) -> Result<(), SessionError> {
        self.send(Command::Start)
    }

    pub fn select_next_option(&mut self) {
        let count = self.session.displayed_options().len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.session.displayed_options().len();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Submit the option under the cursor.
    pub fn submit_answer(&mut self) -> Result<(), SessionError> {
        self.submit_displayed(self.cursor)
    }

    /// Submit the option shown at `position` (0-based, screen order).
    pub fn submit_displayed(&mut self, position: usize) -> Result<(), SessionError> {
        let Some(DisplayedOption { original_index, .. }) =
            self.session.displayed_options().get(position)
        else {
            return Ok(());
        };
        let original_index = *original_index;
        self.cursor = position;
        self.send(Command::Submit { original_index })
    }

    pub fn next_question(&mut self) -> Result<(), SessionError> {
        self.send(Command::Next)
    }

    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.send(Command::Restart)
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.history().len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Forward a command to the session.
    ///
    /// Stray input outside a running quiz is dropped; any other session
    /// error means the presenter drove the session out of sequence and is
    /// handed back to the caller.
    fn send(&mut self, command: Command) -> Result<(), SessionError> {
        let outcome = self.session.handle(command);
        self.sync();

        match outcome {
            Ok(_) => Ok(()),
            Err(SessionError::NotInProgress) => {
                debug!("{:?} ignored: no quiz in progress", command);
                Ok(())
            }
            Err(err) => {
                error!("{:?} failed: {}", command, err);
                Err(err)
            }
        }
    }

    fn sync(&mut self) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::QuestionReady { number, .. } => {
                    debug!("Showing question {}", number);
                    self.cursor = 0;
                }
                SessionEvent::Completed { .. } | SessionEvent::Restarted => {
                    self.result_scroll = 0;
                }
                _ => {}
            }
        }
    }
}
