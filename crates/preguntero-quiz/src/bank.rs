// SPDX-License-Identifier: AGPL-3.0-or-later
//! Question banks keyed by difficulty
//!
//! Quiz content is independent of quiz mechanics: a bank comes either from
//! the built-in table or from any parsed question sheet.

use crate::builtin;
use preguntero_core::{Document, QaItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Difficulty category of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    TheorySimple,
    TheoryMedium,
    DesignSimple,
    TechnicalSimple,
    CodeSimple,
}

impl Difficulty {
    /// All difficulties in menu order
    pub const ALL: [Self; 5] = [
        Self::TheorySimple,
        Self::TheoryMedium,
        Self::DesignSimple,
        Self::TechnicalSimple,
        Self::CodeSimple,
    ];

    /// Display name, also used to match sheet category names
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TheorySimple => "Teóricas Simples",
            Self::TheoryMedium => "Teóricas Medias",
            Self::DesignSimple => "Diseño Simples",
            Self::TechnicalSimple => "Técnicas Simples",
            Self::CodeSimple => "Cuestiones de Código Simples",
        }
    }

    /// 1-based position in the selection menu
    pub const fn menu_number(&self) -> u8 {
        match self {
            Self::TheorySimple => 1,
            Self::TheoryMedium => 2,
            Self::DesignSimple => 3,
            Self::TechnicalSimple => 4,
            Self::CodeSimple => 5,
        }
    }

    /// Resolve a menu answer; anything unrecognised selects the first entry
    pub fn from_menu_choice(choice: &str) -> Self {
        let choice = choice.trim();
        Self::ALL
            .into_iter()
            .find(|d| choice == d.menu_number().to_string())
            .unwrap_or(Self::TheorySimple)
    }

    /// Difficulty whose label appears in a category name, ignoring case
    pub fn from_category_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| name.contains(&d.label().to_lowercase()))
    }

    fn builtin_items(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::TheorySimple => builtin::THEORY_SIMPLE,
            Self::TheoryMedium => builtin::THEORY_MEDIUM,
            Self::DesignSimple => builtin::DESIGN_SIMPLE,
            Self::TechnicalSimple => builtin::TECHNICAL_SIMPLE,
            Self::CodeSimple => builtin::CODE_SIMPLE,
        }
    }
}

/// Ordered questions per difficulty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    entries: BTreeMap<Difficulty, Vec<QaItem>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// The literal TaskFlow interview table
    pub fn builtin() -> Self {
        let mut bank = Self::new();
        for difficulty in Difficulty::ALL {
            for (question, answer) in difficulty.builtin_items() {
                bank.push(difficulty, QaItem::new(*question, *answer));
            }
        }
        bank
    }

    /// Collect questions from sheet categories named after a difficulty.
    ///
    /// Items without an answer are left out; categories that match no
    /// difficulty are skipped.
    pub fn from_document(doc: &Document) -> Self {
        let mut bank = Self::new();
        for category in &doc.categories {
            let Some(difficulty) = Difficulty::from_category_name(&category.name) else {
                tracing::debug!(category = %category.name, "category matches no difficulty");
                continue;
            };
            for item in &category.items {
                if item.answer.is_empty() {
                    tracing::debug!(question = %item.question, "unanswered question skipped");
                    continue;
                }
                bank.push(difficulty, item.clone());
            }
        }
        bank
    }

    pub fn push(&mut self, difficulty: Difficulty, item: QaItem) {
        self.entries.entry(difficulty).or_default().push(item);
    }

    /// Questions for one difficulty, in insertion order
    pub fn items(&self, difficulty: Difficulty) -> &[QaItem] {
        self.entries.get(&difficulty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of questions
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Difficulties that have at least one question
    pub fn difficulties(&self) -> impl Iterator<Item = Difficulty> + '_ {
        self.entries
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(difficulty, _)| *difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use preguntero_core::build;

    #[test]
    fn test_builtin_has_ten_per_difficulty() {
        let bank = QuestionBank::builtin();
        for difficulty in Difficulty::ALL {
            assert_eq!(bank.items(difficulty).len(), 10, "{}", difficulty.label());
        }
        assert_eq!(bank.len(), 50);
        assert_eq!(bank.items(Difficulty::TheorySimple)[0].question, "¿Qué es una API REST?");
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(Difficulty::from_menu_choice("3"), Difficulty::DesignSimple);
        assert_eq!(Difficulty::from_menu_choice(" 5 \n"), Difficulty::CodeSimple);
        assert_eq!(Difficulty::from_menu_choice("9"), Difficulty::TheorySimple);
        assert_eq!(Difficulty::from_menu_choice(""), Difficulty::TheorySimple);
    }

    #[test]
    fn test_category_name_matching() {
        assert_eq!(
            Difficulty::from_category_name("1. Preguntas TEÓRICAS SIMPLES"),
            Some(Difficulty::TheorySimple)
        );
        assert_eq!(
            Difficulty::from_category_name("Teóricas Medias (nivel 2)"),
            Some(Difficulty::TheoryMedium)
        );
        assert_eq!(Difficulty::from_category_name("Anexo"), None);
    }

    #[test]
    fn test_from_document() {
        let doc = build([
            "# Preguntero",
            "## Índice",
            "## Preguntas Teóricas Simples",
            "### ¿Qué es JPA?",
            "**Respuesta:** Una especificación.",
            "### ¿Sin respuesta?",
            "## Diseño Simples",
            "### ¿Qué es un CRUD?",
            "**Respuesta:** Create, Read, Update, Delete.",
        ]);
        let bank = QuestionBank::from_document(&doc);

        assert_eq!(bank.len(), 2);
        assert_eq!(
            bank.items(Difficulty::TheorySimple),
            [QaItem::new("¿Qué es JPA?", "Una especificación.")]
        );
        assert_eq!(
            bank.difficulties().collect::<Vec<_>>(),
            [Difficulty::TheorySimple, Difficulty::DesignSimple]
        );
        assert!(bank.items(Difficulty::CodeSimple).is_empty());
    }

    #[test]
    fn test_empty_bank() {
        let bank = QuestionBank::new();
        assert!(bank.is_empty());
        assert_eq!(bank.difficulties().count(), 0);
    }
}
