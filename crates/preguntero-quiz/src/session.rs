// SPDX-License-Identifier: AGPL-3.0-or-later
//! Quiz session: random sampling and self-assessed scoring

use crate::bank::{Difficulty, QuestionBank};
use crate::{QuizError, Result};
use preguntero_core::QaItem;
use rand::seq::SliceRandom;
use rand::Rng;

/// Question count used when the requested count cannot be read
pub const DEFAULT_COUNT: usize = 5;

/// Overall assessment of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    Good,
    NeedsReview,
}

impl Verdict {
    /// Verdict for a percentage score (>= 80, >= 60, below)
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 60.0 {
            Self::Good
        } else {
            Self::NeedsReview
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "¡Excelente! Estás bien preparado.",
            Self::Good => "Bueno, pero sigue practicando.",
            Self::NeedsReview => "Necesitas repasar más. ¡Sigue estudiando!",
        }
    }
}

/// Read a requested question count.
///
/// Unreadable input falls back to [`DEFAULT_COUNT`]; the result is clamped
/// to `1..=available` (0 only when nothing is available).
pub fn parse_count(input: &str, available: usize) -> usize {
    let requested = input.trim().parse::<usize>().unwrap_or(DEFAULT_COUNT);
    requested.clamp(1, available.max(1)).min(available)
}

/// A sampled set of questions and the outcome recorded for each
#[derive(Debug, Clone)]
pub struct QuizSession {
    difficulty: Difficulty,
    questions: Vec<QaItem>,
    recalled: Vec<bool>,
}

impl QuizSession {
    /// Draw `count` distinct questions of one difficulty at random
    pub fn sample<R>(bank: &QuestionBank, difficulty: Difficulty, count: usize, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let pool = bank.items(difficulty);
        if pool.is_empty() {
            return Err(QuizError::EmptyCategory(difficulty));
        }
        let questions: Vec<QaItem> = pool.choose_multiple(rng, count.min(pool.len())).cloned().collect();
        tracing::debug!(
            difficulty = difficulty.label(),
            sampled = questions.len(),
            pool = pool.len(),
            "session sampled"
        );
        Ok(Self {
            difficulty,
            questions,
            recalled: Vec::new(),
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn questions(&self) -> &[QaItem] {
        &self.questions
    }

    /// Record the outcome of the next unanswered question
    pub fn record(&mut self, recalled: bool) {
        if self.recalled.len() < self.questions.len() {
            self.recalled.push(recalled);
        }
    }

    /// Number of questions planned for this session
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answered(&self) -> usize {
        self.recalled.len()
    }

    /// Questions the user recalled correctly
    pub fn score(&self) -> usize {
        self.recalled.iter().filter(|r| **r).count()
    }

    /// Score over answered questions, 0 when nothing was answered
    pub fn percentage(&self) -> f64 {
        if self.answered() == 0 {
            return 0.0;
        }
        self.score() as f64 / self.answered() as f64 * 100.0
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_percentage(self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3", 10), 3);
        assert_eq!(parse_count(" 7\n", 10), 7);
        assert_eq!(parse_count("muchas", 10), DEFAULT_COUNT);
        assert_eq!(parse_count("", 3), 3);
        assert_eq!(parse_count("40", 10), 10);
        assert_eq!(parse_count("0", 10), 1);
        assert_eq!(parse_count("2", 0), 0);
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_percentage(100.0), Verdict::Excellent);
        assert_eq!(Verdict::from_percentage(80.0), Verdict::Excellent);
        assert_eq!(Verdict::from_percentage(79.9), Verdict::Good);
        assert_eq!(Verdict::from_percentage(60.0), Verdict::Good);
        assert_eq!(Verdict::from_percentage(59.9), Verdict::NeedsReview);
        assert_eq!(Verdict::from_percentage(0.0), Verdict::NeedsReview);
    }

    #[test]
    fn test_sample_distinct_and_seeded() {
        let bank = QuestionBank::builtin();
        let mut first_rng = StdRng::seed_from_u64(7);
        let mut second_rng = StdRng::seed_from_u64(7);

        let first = QuizSession::sample(&bank, Difficulty::TheoryMedium, 6, &mut first_rng).unwrap();
        let second = QuizSession::sample(&bank, Difficulty::TheoryMedium, 6, &mut second_rng).unwrap();

        assert_eq!(first.questions(), second.questions());
        let unique: HashSet<_> = first.questions().iter().map(|q| &q.question).collect();
        assert_eq!(unique.len(), 6);
        for item in first.questions() {
            assert!(bank.items(Difficulty::TheoryMedium).contains(item));
        }
    }

    #[test]
    fn test_sample_more_than_available() {
        let bank = QuestionBank::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let session = QuizSession::sample(&bank, Difficulty::CodeSimple, 50, &mut rng).unwrap();
        assert_eq!(session.total(), 10);
    }

    #[test]
    fn test_sample_empty_difficulty() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = QuizSession::sample(&QuestionBank::new(), Difficulty::DesignSimple, 3, &mut rng).unwrap_err();
        assert!(matches!(err, QuizError::EmptyCategory(Difficulty::DesignSimple)));
    }

    #[test]
    fn test_scoring() {
        let bank = QuestionBank::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::sample(&bank, Difficulty::TheorySimple, 4, &mut rng).unwrap();
        assert_eq!(session.percentage(), 0.0);

        session.record(true);
        session.record(false);
        session.record(true);
        assert_eq!(session.answered(), 3);
        assert_eq!(session.score(), 2);
        assert!((session.percentage() - 66.666).abs() < 0.01);
        assert_eq!(session.verdict(), Verdict::Good);

        session.record(true);
        session.record(true);
        assert_eq!(session.answered(), 4);
        assert_eq!(session.verdict(), Verdict::Good);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        // Property: parsed counts never exceed what is available
        #[test]
        fn prop_count_within_bounds(input in "\\PC{0,6}", available in 0usize..20) {
            let count = parse_count(&input, available);
            prop_assert!(count <= available);
            if available > 0 {
                prop_assert!(count >= 1);
            }
        }

        // Property: percentage always lies in 0..=100
        #[test]
        fn prop_percentage_bounded(outcomes in prop::collection::vec(any::<bool>(), 0..10)) {
            let mut bank = QuestionBank::new();
            for i in 0..10 {
                bank.push(Difficulty::TheorySimple, QaItem::new(format!("Q{i}"), "A"));
            }
            let mut rng = StdRng::seed_from_u64(outcomes.len() as u64);
            let mut session = QuizSession::sample(&bank, Difficulty::TheorySimple, 10, &mut rng).unwrap();
            for outcome in &outcomes {
                session.record(*outcome);
            }
            let percentage = session.percentage();
            prop_assert!((0.0..=100.0).contains(&percentage));
            prop_assert_eq!(session.score(), outcomes.iter().filter(|o| **o).count());
        }
    }
}
