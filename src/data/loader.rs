use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Question, RawQuestion, DEFAULT_CATEGORY};

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

const MIN_OPTIONS: usize = 2;

/// Errors raised while turning raw input into a question bank.
///
/// Any of these disables starting a quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid format: questions array not found")]
    MissingQuestions,
    #[error("no questions found")]
    NoQuestions,
    #[error("none of the {total} question records are usable")]
    NoUsableQuestions { total: usize },
}

/// The normalized set of questions a session draws its pool from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Build a bank from a parsed JSON document of the form
    /// `{ "questions": [ ... ] }`.
    ///
    /// Malformed records are dropped; the load only fails when the
    /// `questions` array is missing, empty, or has no usable record left.
    pub fn load(raw: &Value) -> Result<Self, ValidationError> {
        let records = raw
            .get("questions")
            .and_then(Value::as_array)
            .ok_or(ValidationError::MissingQuestions)?;

        if records.is_empty() {
            return Err(ValidationError::NoQuestions);
        }

        let questions: Vec<Question> = records
            .iter()
            .filter_map(|record| match RawQuestion::deserialize(record) {
                Ok(raw) => Some(raw),
                Err(err) => {
                    warn!("Dropping question record with unexpected shape: {}", err);
                    None
                }
            })
            .filter(is_well_formed)
            .enumerate()
            .filter_map(|(index, raw)| normalize(raw, index))
            .collect();

        if questions.is_empty() {
            return Err(ValidationError::NoUsableQuestions {
                total: records.len(),
            });
        }

        warn_on_duplicate_ids(&questions);
        info!(
            "Loaded {} questions ({} dropped)",
            questions.len(),
            records.len() - questions.len()
        );

        Ok(Self::new(questions))
    }

    pub fn load_str(json: &str) -> Result<Self, ValidationError> {
        let raw: Value = serde_json::from_str(json)?;
        Self::load(&raw)
    }

    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        debug!("Reading question bank from {}", path.display());

        let json_content = fs::read_to_string(path).map_err(|source| ValidationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::load_str(&json_content)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Turn a raw record into a [`Question`].
///
/// `correct` wins over `answer`. An `answer` that matches no option falls
/// back to index 0. Returns `None` when the record cannot produce a
/// question whose correct index points into its options.
pub fn normalize(raw: RawQuestion, fallback_index: usize) -> Option<Question> {
    if !is_well_formed(&raw) {
        return None;
    }
    let prompt = raw.question?;
    let options = raw.options?;

    let correct_index = match (raw.correct, raw.answer.as_deref()) {
        (Some(correct), _) => match usize::try_from(correct) {
            Ok(index) if index < options.len() => index,
            _ => {
                warn!(
                    "Dropping question {:?}: correct index {} is out of range",
                    prompt, correct
                );
                return None;
            }
        },
        (None, Some(answer)) => options
            .iter()
            .position(|option| option == answer)
            .unwrap_or_else(|| {
                warn!(
                    "Answer {:?} matches no option of {:?}, defaulting to the first option",
                    answer, prompt
                );
                0
            }),
        (None, None) => {
            warn!("Dropping question {:?}: no correct answer given", prompt);
            return None;
        }
    };

    let id = raw
        .id
        .filter(|id| *id > 0)
        .and_then(|id| u32::try_from(id).ok())
        .unwrap_or(fallback_index as u32 + 1);

    let category = raw
        .category
        .filter(|category| !category.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    Some(Question {
        id,
        prompt,
        options,
        correct_index,
        category,
    })
}

fn is_well_formed(raw: &RawQuestion) -> bool {
    let has_prompt = raw.question.as_deref().is_some_and(|q| !q.is_empty());
    let has_options = raw
        .options
        .as_ref()
        .is_some_and(|options| options.len() >= MIN_OPTIONS);
    has_prompt && has_options
}

fn warn_on_duplicate_ids(questions: &[Question]) {
    let mut seen = HashSet::with_capacity(questions.len());
    for question in questions {
        if !seen.insert(question.id) {
            warn!("Question id {} appears more than once", question.id);
        }
    }
}
