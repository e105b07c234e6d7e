//! # timed-quiz
//!
//! A timed multiple-choice quiz for the terminal.
//!
//! Questions are loaded from a JSON bank, a random pool is drawn, and each
//! question runs against a countdown. The engine ([`QuizSession`]) is a
//! plain state machine driven by [`Command`]s and a virtual clock, so it can
//! be embedded or tested without a terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{Quiz, QuizConfig, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_json("questions.json", QuizConfig::default())?;
//!     quiz.run().await
//! }
//! ```

mod app;
pub mod config;
mod data;
mod models;
mod protocol;
pub mod session;
pub mod terminal;
mod ui;

use std::future;
use std::io;
use std::path::Path;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use log::{error, info};
use thiserror::Error;
use tokio::time::{self, Instant};

pub use app::App;
pub use config::QuizConfig;
pub use data::{normalize, QuestionBank, ValidationError, DEFAULT_QUESTIONS_PATH};
pub use models::{
    Answer, DisplayedOption, Question, QuestionPhase, RawQuestion, SessionState, DEFAULT_CATEGORY,
};
pub use protocol::{Command, SessionEvent};
pub use session::{QuizResult, QuizSession, ResultTier, SessionError, Urgency};

/// Error type for quiz operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Load(#[from] ValidationError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz ready to be played in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Self {
        Self {
            app: App::new(QuizSession::new(bank, config)),
        }
    }

    /// Load the question bank from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use timed_quiz::{Quiz, QuizConfig};
    ///
    /// let quiz = Quiz::from_json("questions.json", QuizConfig::default()).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        let bank = QuestionBank::load_path(path)?;
        Ok(Self::new(bank, config))
    }

    /// Take over the terminal and play until the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app).await;
        settle(result, terminal::restore())
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

/// Single-threaded driver: waits for either a key press or the session's
/// next wakeup, then feeds whichever came first into the session.
async fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    let started = Instant::now();
    let mut events = EventStream::new();

    loop {
        app.advance_clock_to(started.elapsed());
        terminal.draw(|frame| ui::render(frame, app))?;

        let deadline = app.next_deadline().map(|due| started + due);

        tokio::select! {
            event = events.next() => {
                let key = match event {
                    Some(Ok(Event::Key(key))) => key,
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                };
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                app.advance_clock_to(started.elapsed());
                if handle_input(app, key.code)? {
                    break;
                }
            }
            _ = sleep_until(deadline) => {}
        }
    }

    info!("Quiz closed");
    Ok(())
}

/// The loop's own failure outranks a failure to restore the terminal.
fn settle(result: Result<(), QuizError>, restored: io::Result<()>) -> Result<(), QuizError> {
    if let (Err(_), Err(err)) = (&result, &restored) {
        error!("Failed to restore terminal: {}", err);
    }
    result.and(restored.map_err(QuizError::from))
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => future::pending().await,
    }
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, SessionError> {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Ok(true);
    }

    match app.state() {
        SessionState::Idle => handle_welcome_input(app, key)?,
        SessionState::InProgress(_) => handle_quiz_input(app, key)?,
        SessionState::Complete => handle_result_input(app, key)?,
    }
    Ok(false)
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> Result<(), SessionError> {
    if key == KeyCode::Enter {
        app.start_quiz()?;
    }
    Ok(())
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Result<(), SessionError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer()?,
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.submit_displayed(digit as usize - 1)?;
            }
        }
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => app.next_question()?,
        _ => {}
    }
    Ok(())
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Result<(), SessionError> {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart()?,
        _ => {}
    }
    Ok(())
}
