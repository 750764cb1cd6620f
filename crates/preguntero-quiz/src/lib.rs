// SPDX-License-Identifier: AGPL-3.0-or-later
//! Preguntero Quiz - interactive mock interview drill
//!
//! Questions come from a [`QuestionBank`] grouped by [`Difficulty`]. A
//! [`QuizSession`] samples distinct questions and scores self-assessed
//! recall; [`run_console`] drives one session over any reader and writer.

pub mod bank;
mod builtin;
pub mod console;
pub mod session;

pub use bank::{Difficulty, QuestionBank};
pub use console::run_console;
pub use session::{parse_count, QuizSession, Verdict, DEFAULT_COUNT};

use thiserror::Error;

/// Errors that can occur while running a quiz
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("No questions available for difficulty: {}", .0.label())]
    EmptyCategory(Difficulty),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
