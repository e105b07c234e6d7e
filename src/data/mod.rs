mod loader;

pub use loader::{normalize, QuestionBank, ValidationError, DEFAULT_QUESTIONS_PATH};
