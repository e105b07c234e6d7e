use serde::Serialize;

/// Message band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultTier {
    Outstanding,
    Great,
    Good,
    Encouragement,
}

impl ResultTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => ResultTier::Outstanding,
            70..=89 => ResultTier::Great,
            50..=69 => ResultTier::Good,
            _ => ResultTier::Encouragement,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Outstanding => "Outstanding! You're a quiz master!",
            ResultTier::Great => "Great job! You have excellent knowledge!",
            ResultTier::Good => "Good effort! Keep learning!",
            ResultTier::Encouragement => "Don't give up! Practice makes perfect!",
        }
    }
}

/// Final tally of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: ResultTier,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            tier: ResultTier::from_percentage(percentage),
        }
    }
}

/// `score / total` as a whole percentage, rounded half up.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total > 0 {
        ((score as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    }
}
