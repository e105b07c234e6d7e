use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::error;
use timed_quiz::config::{
    DEFAULT_ADVANCE_DELAY, DEFAULT_POOL_SIZE, DEFAULT_TICK_MILLIS, DEFAULT_TIME_LIMIT,
};
use timed_quiz::{Quiz, QuizConfig, DEFAULT_QUESTIONS_PATH};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Maximum number of questions per round
    #[arg(short = 'n', long, default_value_t = DEFAULT_POOL_SIZE as u32, value_parser = clap::value_parser!(u32).range(1..))]
    pool_size: u32,

    /// Ticks allowed to answer each question
    #[arg(short, long, default_value_t = DEFAULT_TIME_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    time_limit: u32,

    /// Ticks to wait after an answer before the next question
    #[arg(short, long, default_value_t = DEFAULT_ADVANCE_DELAY)]
    advance_delay: u32,

    /// Length of one tick in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_MILLIS, value_parser = clap::value_parser!(u64).range(1..))]
    tick_millis: u64,

    /// Seed for question and option order
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> QuizConfig {
        QuizConfig {
            pool_size: self.pool_size as usize,
            time_limit: self.time_limit,
            advance_delay: self.advance_delay,
            tick: Duration::from_millis(self.tick_millis),
            seed: self.seed,
        }
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let args = Args::parse();
    let quiz = match Quiz::from_json(&args.questions, args.config()) {
        Ok(quiz) => quiz,
        Err(e) => {
            error!("{}", e);
            eprintln!("Cannot start quiz: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
