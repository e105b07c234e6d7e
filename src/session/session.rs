//! The quiz state machine.
//!
//! A [`QuizSession`] owns everything that changes during a play-through:
//! the drawn pool, the position in it, the score, the countdown and the
//! queue of pending wakeups. It never blocks. The presenter feeds it
//! [`Command`]s and moves its clock forward; the session answers with
//! [`SessionEvent`]s and read accessors.

use std::mem;
use std::time::Duration;

use log::{debug, error, info, log_enabled, trace, Level};
use serde::Serialize;
use thiserror::Error;

use crate::config::QuizConfig;
use crate::data::QuestionBank;
use crate::models::{Answer, DisplayedOption, Question, QuestionPhase, SessionState};
use crate::protocol::{Command, SessionEvent};

use super::result::QuizResult;
use super::scheduler::{Generation, Scheduler, Token};
use super::shuffle::Randomizer;
use super::timer::{Timer, TimerEvent, Urgency};

/// Errors emitted by [`QuizSession`].
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("the question bank has no usable questions")]
    EmptyBank,
    #[error("no question at index {index} (pool has {pool_size})")]
    OutOfSequence { index: usize, pool_size: usize },
    #[error("no quiz is in progress")]
    NotInProgress,
}

/// How a single question of the pool was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub question_id: u32,
    pub prompt: String,
    pub answer: Answer,
    pub correct_index: usize,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy)]
enum Wakeup {
    Tick(Token),
    AutoAdvance(Token),
}

pub struct QuizSession {
    bank: QuestionBank,
    config: QuizConfig,
    randomizer: Randomizer,
    state: SessionState,
    pool: Vec<Question>,
    current_index: usize,
    score: usize,
    selected_answer: Option<Answer>,
    displayed_options: Vec<DisplayedOption>,
    history: Vec<AnswerRecord>,
    result: Option<QuizResult>,
    timer: Timer,
    auto_advance: Generation,
    scheduler: Scheduler<Wakeup>,
    events: Vec<SessionEvent>,
}

impl QuizSession {
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Self {
        let randomizer = match config.seed {
            Some(seed) => Randomizer::seeded(seed),
            None => Randomizer::from_os_rng(),
        };

        Self {
            bank,
            config,
            randomizer,
            state: SessionState::Idle,
            pool: Vec::new(),
            current_index: 0,
            score: 0,
            selected_answer: None,
            displayed_options: Vec::new(),
            history: Vec::new(),
            result: None,
            timer: Timer::new(),
            auto_advance: Generation::default(),
            scheduler: Scheduler::new(),
            events: Vec::new(),
        }
    }

    /// Apply a presenter command.
    ///
    /// Returns `false` when the command was valid but had no effect: an
    /// answer that was ignored, or "next" before the question is answered.
    pub fn handle(&mut self, command: Command) -> Result<bool, SessionError> {
        debug!("Handling {:?} in {:?}", command, self.state);
        let applied = match command {
            Command::Start => self.start().map(|_| true)?,
            Command::Submit { original_index } => self.submit_answer(original_index),
            Command::Next => self.next()?,
            Command::Restart => {
                self.restart();
                true
            }
        };

        if !applied {
            debug!("{:?} had no effect", command);
        }
        Ok(applied)
    }

    /// Draw a fresh pool from the bank and show its first question.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.bank.is_empty() {
            return Err(SessionError::EmptyBank);
        }

        self.cancel_pending();

        let pool_size = self.config.pool_size.max(1).min(self.bank.len());
        self.pool = self.randomizer.pick(self.bank.questions(), pool_size);
        self.current_index = 0;
        self.score = 0;
        self.selected_answer = None;
        self.history.clear();
        self.result = None;
        self.state = SessionState::InProgress(QuestionPhase::AwaitingAnswer);

        info!("Quiz started with {} questions", self.pool.len());
        self.load_question()
    }

    /// Show the question at the current index and start its countdown.
    pub fn load_question(&mut self) -> Result<(), SessionError> {
        if self.state == SessionState::Idle {
            error!("load_question called before start");
            return Err(SessionError::NotInProgress);
        }
        let Some(question) = self.pool.get(self.current_index) else {
            error!(
                "No question at index {} (pool has {})",
                self.current_index,
                self.pool.len()
            );
            return Err(SessionError::OutOfSequence {
                index: self.current_index,
                pool_size: self.pool.len(),
            });
        };

        let options: Vec<DisplayedOption> = question
            .options
            .iter()
            .enumerate()
            .map(|(original_index, text)| DisplayedOption {
                text: text.clone(),
                original_index,
            })
            .collect();
        self.displayed_options = self.randomizer.shuffle(&options);
        let prompt = question.prompt.clone();

        self.selected_answer = None;
        self.state = SessionState::InProgress(QuestionPhase::AwaitingAnswer);

        let token = self.timer.start(self.config.time_limit);
        self.scheduler.schedule(self.config.tick, Wakeup::Tick(token));

        debug!("Loaded question {}: {}", self.question_number(), prompt);
        self.emit(SessionEvent::QuestionReady {
            number: self.question_number(),
            total: self.pool.len(),
            prompt,
            options: self.displayed_options.clone(),
        });
        Ok(())
    }

    /// Answer the current question. Returns whether the answer was taken.
    ///
    /// Only the first answer to a question counts; anything submitted after
    /// that, or outside of a running question, is ignored.
    pub fn submit_answer(&mut self, original_index: usize) -> bool {
        if self.selected_answer.is_some()
            || self.state != SessionState::InProgress(QuestionPhase::AwaitingAnswer)
        {
            debug!("Ignoring answer {} in {:?}", original_index, self.state);
            return false;
        }
        let Some(question) = self.pool.get(self.current_index) else {
            return false;
        };

        let correct_index = question.correct_index;
        let is_correct = question.is_correct(original_index);
        let answer = Answer::Chosen(original_index);
        self.history.push(AnswerRecord {
            question_id: question.id,
            prompt: question.prompt.clone(),
            answer,
            correct_index,
            is_correct,
        });

        self.timer.cancel();
        self.selected_answer = Some(answer);
        if is_correct {
            self.score += 1;
        }
        self.state = SessionState::InProgress(QuestionPhase::Answered);
        self.schedule_auto_advance();

        self.emit(SessionEvent::Answered {
            selected: original_index,
            correct_index,
            is_correct,
            score: self.score,
        });
        true
    }

    /// Presenter "next" control.
    ///
    /// Moves on immediately once the question is answered, returning `true`.
    /// While still waiting for an answer it does nothing and returns `false`.
    pub fn next(&mut self) -> Result<bool, SessionError> {
        match self.state {
            SessionState::InProgress(QuestionPhase::Answered) => {
                self.advance()?;
                Ok(true)
            }
            SessionState::InProgress(QuestionPhase::AwaitingAnswer) => Ok(false),
            SessionState::Idle | SessionState::Complete => Err(SessionError::NotInProgress),
        }
    }

    /// Drop the current play-through, silence every pending wakeup and go
    /// back to idle. The next `start` draws a new pool.
    pub fn restart(&mut self) {
        self.cancel_pending();
        self.state = SessionState::Idle;
        self.pool.clear();
        self.current_index = 0;
        self.score = 0;
        self.selected_answer = None;
        self.displayed_options.clear();
        self.history.clear();
        self.result = None;

        debug!("Session restarted");
        self.emit(SessionEvent::Restarted);
    }

    /// Run every wakeup due at or before `now`, in order.
    pub fn advance_clock_to(&mut self, now: Duration) {
        while let Some(wakeup) = self.scheduler.pop_due(now) {
            self.dispatch(wakeup);
        }
        self.scheduler.settle(now);
    }

    pub fn elapse(&mut self, duration: Duration) {
        self.advance_clock_to(self.scheduler.now() + duration);
    }

    /// Clock time of the earliest pending wakeup.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        mem::take(&mut self.events)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn pool(&self) -> &[Question] {
        &self.pool
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based number of the question on screen.
    pub fn question_number(&self) -> usize {
        (self.current_index + 1).min(self.pool.len())
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.state.is_in_progress() {
            self.pool.get(self.current_index)
        } else {
            None
        }
    }

    pub fn displayed_options(&self) -> &[DisplayedOption] {
        &self.displayed_options
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_answer(&self) -> Option<Answer> {
        self.selected_answer
    }

    pub fn remaining_time(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn urgency(&self) -> Urgency {
        self.timer.urgency()
    }

    /// Share of the pool reached so far, counting the question on screen.
    pub fn progress(&self) -> f64 {
        if self.pool.is_empty() {
            return 0.0;
        }
        self.question_number() as f64 / self.pool.len() as f64
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn result(&self) -> Option<QuizResult> {
        self.result
    }

    fn advance(&mut self) -> Result<(), SessionError> {
        if !self.state.is_in_progress() {
            return Err(SessionError::NotInProgress);
        }

        self.auto_advance.revoke();
        self.timer.cancel();
        self.current_index += 1;

        if self.current_index >= self.pool.len() {
            self.finish();
            Ok(())
        } else {
            self.load_question()
        }
    }

    fn on_timer_expire(&mut self) {
        if self.selected_answer.is_some()
            || self.state != SessionState::InProgress(QuestionPhase::AwaitingAnswer)
        {
            return;
        }
        let Some(question) = self.pool.get(self.current_index) else {
            return;
        };

        let correct_index = question.correct_index;
        self.history.push(AnswerRecord {
            question_id: question.id,
            prompt: question.prompt.clone(),
            answer: Answer::TimedOut,
            correct_index,
            is_correct: false,
        });

        self.selected_answer = Some(Answer::TimedOut);
        self.state = SessionState::InProgress(QuestionPhase::Answered);
        self.schedule_auto_advance();

        debug!("Question {} timed out", self.question_number());
        self.emit(SessionEvent::TimedOut { correct_index });
    }

    fn finish(&mut self) {
        let result = QuizResult::new(self.score, self.pool.len());
        self.state = SessionState::Complete;
        self.result = Some(result);

        info!(
            "Quiz complete: {}/{} ({}%)",
            result.score, result.total, result.percentage
        );
        self.emit(SessionEvent::Completed { result });
    }

    fn schedule_auto_advance(&mut self) {
        let token = self.auto_advance.issue();
        self.scheduler.schedule(
            self.config.advance_delay_duration(),
            Wakeup::AutoAdvance(token),
        );
    }

    fn cancel_pending(&mut self) {
        self.timer.cancel();
        self.auto_advance.revoke();
        self.scheduler.clear();
    }

    fn dispatch(&mut self, wakeup: Wakeup) {
        match wakeup {
            Wakeup::Tick(token) => match self.timer.on_tick(token) {
                Some(TimerEvent::Tick { remaining, .. }) => {
                    self.emit(SessionEvent::tick(remaining));
                    self.scheduler.schedule(self.config.tick, Wakeup::Tick(token));
                }
                Some(TimerEvent::Expired) => {
                    self.emit(SessionEvent::tick(0));
                    self.on_timer_expire();
                }
                None => trace!("Discarding stale tick"),
            },
            Wakeup::AutoAdvance(token) => {
                if !self.auto_advance.is_current(token) {
                    trace!("Discarding stale auto-advance");
                    return;
                }
                if let Err(err) = self.advance() {
                    error!("Auto-advance failed: {}", err);
                }
            }
        }
    }

    fn emit(&mut self, event: SessionEvent) {
        if log_enabled!(Level::Trace) {
            if let Ok(json) = serde_json::to_string(&event) {
                trace!("{}", json);
            }
        }
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ResultTier;

    const SECOND: Duration = Duration::from_secs(1);

    fn bank(size: usize) -> QuestionBank {
        let questions = (0..size)
            .map(|i| Question {
                id: i as u32 + 1,
                prompt: format!("Question {}", i + 1),
                options: ["A", "B", "C", "D"]
                    .iter()
                    .map(|label| format!("{}{}", label, i))
                    .collect(),
                correct_index: i % 4,
                category: "Test".to_string(),
            })
            .collect();
        QuestionBank::new(questions)
    }

    fn session(size: usize) -> QuizSession {
        let config = QuizConfig {
            seed: Some(7),
            ..QuizConfig::default()
        };
        QuizSession::new(bank(size), config)
    }

    fn correct_index(session: &QuizSession) -> usize {
        session.current_question().unwrap().correct_index
    }

    fn wrong_index(session: &QuizSession) -> usize {
        (correct_index(session) + 1) % 4
    }

    #[test]
    fn test_start_requires_questions() {
        let mut session = QuizSession::new(QuestionBank::default(), QuizConfig::default());
        assert_eq!(session.start(), Err(SessionError::EmptyBank));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_start_draws_capped_pool() {
        let mut session = session(12);
        session.start().unwrap();

        assert_eq!(session.pool_size(), 10);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.question_number(), 1);
        assert_eq!(
            session.state(),
            SessionState::InProgress(QuestionPhase::AwaitingAnswer)
        );

        let mut ids: Vec<u32> = session.pool().iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        assert!(ids.iter().all(|id| (1..=12).contains(id)));
    }

    #[test]
    fn test_small_bank_uses_every_question() {
        let mut session = session(3);
        session.start().unwrap();
        assert_eq!(session.pool_size(), 3);
    }

    #[test]
    fn test_displayed_options_cover_original_indices() {
        let mut session = session(5);
        session.start().unwrap();

        let question = session.current_question().unwrap().clone();
        let mut shown: Vec<_> = session.displayed_options().to_vec();
        shown.sort_by_key(|option| option.original_index);

        assert_eq!(shown.len(), question.options.len());
        for (index, option) in shown.iter().enumerate() {
            assert_eq!(option.original_index, index);
            assert_eq!(option.text, question.options[index]);
        }
    }

    #[test]
    fn test_start_emits_question_ready() {
        let mut session = session(4);
        session.start().unwrap();

        let events = session.drain_events();
        assert!(matches!(
            events.as_slice(),
            [SessionEvent::QuestionReady { number: 1, total: 4, .. }]
        ));
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_correct_answer_scores() {
        let mut session = session(4);
        session.start().unwrap();

        let correct = correct_index(&session);
        assert!(session.submit_answer(correct));
        assert_eq!(session.score(), 1);
        assert_eq!(session.selected_answer(), Some(Answer::Chosen(correct)));
        assert_eq!(
            session.state(),
            SessionState::InProgress(QuestionPhase::Answered)
        );
        assert!(session.history()[0].is_correct);
    }

    #[test]
    fn test_wrong_answer_does_not_score() {
        let mut session = session(4);
        session.start().unwrap();

        let wrong = wrong_index(&session);
        assert!(session.submit_answer(wrong));
        assert_eq!(session.score(), 0);
        assert!(!session.history()[0].is_correct);
    }

    #[test]
    fn test_unknown_option_counts_as_wrong() {
        let mut session = session(4);
        session.start().unwrap();

        assert!(session.submit_answer(99));
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_answer(), Some(Answer::Chosen(99)));
    }

    #[test]
    fn test_double_submit_scores_once() {
        let mut session = session(4);
        session.start().unwrap();

        let correct = correct_index(&session);
        assert!(session.submit_answer(correct));
        assert!(!session.submit_answer(correct));
        assert_eq!(session.score(), 1);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_submit_outside_quiz_is_ignored() {
        let mut session = session(4);
        assert!(!session.submit_answer(0));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_countdown_ticks_with_urgency() {
        let mut session = session(4);
        session.start().unwrap();
        session.drain_events();

        session.elapse(SECOND);
        assert_eq!(session.remaining_time(), 14);
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::Tick {
                remaining: 14,
                urgency: Urgency::Normal
            }]
        );

        session.elapse(4 * SECOND);
        assert_eq!(session.remaining_time(), 10);
        assert_eq!(session.urgency(), Urgency::Warning);

        session.elapse(5 * SECOND);
        assert_eq!(session.urgency(), Urgency::Danger);
        assert_eq!(session.drain_events().len(), 9);
    }

    #[test]
    fn test_timeout_marks_sentinel_without_scoring() {
        let mut session = session(4);
        session.start().unwrap();

        session.elapse(14 * SECOND);
        assert_eq!(session.selected_answer(), None);

        session.elapse(SECOND);
        assert_eq!(session.selected_answer(), Some(Answer::TimedOut));
        assert_eq!(session.selected_answer().map(Answer::as_sentinel), Some(-1));
        assert_eq!(session.score(), 0);
        assert_eq!(
            session.state(),
            SessionState::InProgress(QuestionPhase::Answered)
        );
        assert!(
            session
                .drain_events()
                .iter()
                .any(|event| matches!(event, SessionEvent::TimedOut { .. }))
        );
    }

    #[test]
    fn test_single_question_timeout_completes() {
        let mut session = session(1);
        session.start().unwrap();

        session.elapse(15 * SECOND);
        assert_eq!(session.selected_answer(), Some(Answer::TimedOut));

        session.elapse(2 * SECOND);
        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(session.score(), 0);

        let result = session.result().unwrap();
        assert_eq!(result.percentage, 0);
        assert_eq!(result.tier, ResultTier::Encouragement);
    }

    #[test]
    fn test_auto_advance_after_delay() {
        let mut session = session(4);
        session.start().unwrap();

        let correct = correct_index(&session);
        session.submit_answer(correct);

        session.elapse(SECOND);
        assert_eq!(session.current_index(), 0);

        session.elapse(SECOND);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.selected_answer(), None);
        assert_eq!(session.remaining_time(), 15);
        assert_eq!(
            session.state(),
            SessionState::InProgress(QuestionPhase::AwaitingAnswer)
        );
    }

    #[test]
    fn test_answer_silences_countdown() {
        let mut session = session(1);
        session.start().unwrap();
        session.elapse(3 * SECOND);

        let correct = correct_index(&session);
        session.submit_answer(correct);
        session.drain_events();

        session.elapse(30 * SECOND);
        let events = session.drain_events();
        assert!(
            !events
                .iter()
                .any(|event| matches!(event, SessionEvent::Tick { .. } | SessionEvent::TimedOut { .. }))
        );
        assert_eq!(session.selected_answer(), Some(Answer::Chosen(correct)));
        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(session.result().unwrap().tier, ResultTier::Outstanding);
    }

    #[test]
    fn test_next_skips_pending_auto_advance() {
        let mut session = session(4);
        session.start().unwrap();

        let wrong = wrong_index(&session);
        session.submit_answer(wrong);
        assert_eq!(session.next(), Ok(true));
        assert_eq!(session.current_index(), 1);

        session.elapse(2 * SECOND);
        assert_eq!(session.current_index(), 1);
        assert_eq!(
            session.state(),
            SessionState::InProgress(QuestionPhase::AwaitingAnswer)
        );
        assert_eq!(session.remaining_time(), 13);
    }

    #[test]
    fn test_next_while_awaiting_answer_is_noop() {
        let mut session = session(4);
        session.start().unwrap();

        assert_eq!(session.next(), Ok(false));
        assert_eq!(session.current_index(), 0);
        assert_eq!(
            session.state(),
            SessionState::InProgress(QuestionPhase::AwaitingAnswer)
        );
    }

    #[test]
    fn test_next_outside_quiz_is_rejected() {
        let mut session = session(4);
        assert_eq!(session.next(), Err(SessionError::NotInProgress));
    }

    #[test]
    fn test_restart_cancels_everything() {
        let mut session = session(4);
        session.start().unwrap();
        let correct = correct_index(&session);
        session.submit_answer(correct);
        session.drain_events();

        session.restart();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.score(), 0);
        assert!(session.pool().is_empty());
        assert!(session.next_deadline().is_none());

        session.elapse(60 * SECOND);
        assert_eq!(session.drain_events(), vec![SessionEvent::Restarted]);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_restart_then_start_draws_fresh_pool() {
        let mut session = session(12);
        session.start().unwrap();
        let first: Vec<u32> = session.pool().iter().map(|q| q.id).collect();

        session.restart();
        session.start().unwrap();
        let second: Vec<u32> = session.pool().iter().map(|q| q.id).collect();

        assert_eq!(second.len(), 10);
        assert_ne!(first, second);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_load_question_after_completion_is_rejected() {
        let mut session = session(1);
        session.start().unwrap();
        let correct = correct_index(&session);
        session.submit_answer(correct);
        session.next().unwrap();

        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(
            session.load_question(),
            Err(SessionError::OutOfSequence {
                index: 1,
                pool_size: 1
            })
        );
        assert_eq!(session.state(), SessionState::Complete);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_perfect_run_of_twelve_question_bank() {
        let mut session = session(12);
        session.start().unwrap();

        while session.state().is_in_progress() {
            let correct = correct_index(&session);
            assert!(session.submit_answer(correct));
            session.elapse(2 * SECOND);
        }

        let result = session.result().unwrap();
        assert_eq!(session.pool_size(), 10);
        assert_eq!(result.score, 10);
        assert_eq!(result.percentage, 100);
        assert_eq!(result.tier, ResultTier::Outstanding);
        assert_eq!(session.history().len(), 10);
    }

    #[test]
    fn test_seven_of_ten_is_great() {
        let mut session = session(10);
        session.start().unwrap();

        let mut answered = 0;
        while session.state().is_in_progress() {
            let index = if answered < 7 {
                correct_index(&session)
            } else {
                wrong_index(&session)
            };
            session.submit_answer(index);
            session.next().unwrap();
            answered += 1;
        }

        let result = session.result().unwrap();
        assert_eq!(result.score, 7);
        assert_eq!(result.percentage, 70);
        assert_eq!(result.tier, ResultTier::Great);
    }

    #[test]
    fn test_score_stays_bounded_and_monotonic() {
        let mut session = session(12);
        session.start().unwrap();

        let mut last_score = 0;
        let mut step = 0;
        while session.state().is_in_progress() {
            match step % 3 {
                0 => {
                    let correct = correct_index(&session);
                    session.submit_answer(correct);
                    session.submit_answer(correct);
                }
                1 => {
                    let wrong = wrong_index(&session);
                    session.submit_answer(wrong);
                }
                _ => session.elapse(15 * SECOND),
            }
            session.elapse(2 * SECOND);

            assert!(session.score() >= last_score);
            assert!(session.score() <= session.pool_size());
            assert!(session.current_index() <= session.pool_size());
            last_score = session.score();
            step += 1;
        }

        assert_eq!(session.score(), 4);
        assert_eq!(session.history().len(), 10);
    }

    #[test]
    fn test_handle_dispatches_commands() {
        let mut session = session(2);
        assert_eq!(session.handle(Command::Start), Ok(true));
        assert_eq!(session.handle(Command::Next), Ok(false));

        let submit = Command::Submit {
            original_index: correct_index(&session),
        };
        assert_eq!(session.handle(submit), Ok(true));
        assert_eq!(session.handle(submit), Ok(false));
        assert_eq!(session.handle(Command::Next), Ok(true));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.score(), 1);

        assert_eq!(session.handle(Command::Restart), Ok(true));
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(
            session.handle(Command::Next),
            Err(SessionError::NotInProgress)
        );
    }

    #[test]
    fn test_load_question_before_start_is_rejected() {
        let mut session = session(2);
        assert_eq!(session.load_question(), Err(SessionError::NotInProgress));
    }

    #[test]
    fn test_progress_counts_current_question() {
        let mut session = session(4);
        assert_eq!(session.progress(), 0.0);

        session.start().unwrap();
        assert_eq!(session.progress(), 0.25);
    }
}
