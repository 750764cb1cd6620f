// SPDX-License-Identifier: AGPL-3.0-or-later
//! Document builder: one top-to-bottom pass from classified lines to a tree
//!
//! The builder never fails. Structural problems in the source are recovered
//! locally and reported as [`Diagnostic`]s so malformed sheets are easy to
//! find without aborting the conversion.

use crate::ast::{Category, Document, QaItem};
use crate::classify::{LineClassifier, LineKind};
use crate::traits::{ParseConfig, Parser};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of recoverable problem found while building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Answer label with no question to attach to; the answer was dropped
    OrphanAnswer,
    /// Question before any category; an unnamed category was opened for it
    OrphanQuestion,
    /// Second title line; the later one replaced the earlier
    DuplicateTitle,
    /// Second answer label for the same question; the later one replaced it
    DuplicateAnswer,
}

impl DiagnosticKind {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::OrphanAnswer => "answer has no preceding question and was dropped",
            Self::OrphanQuestion => "question appears before any category",
            Self::DuplicateTitle => "document title set more than once",
            Self::DuplicateAnswer => "question already has an answer",
        }
    }
}

/// A recoverable problem at a 1-based source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind.message())
    }
}

/// Result of a build: the finished tree plus everything worth surfacing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

/// Mutable state threaded through a single build pass.
///
/// The current category is always the last one in the document and the
/// current item is always the last item of that category, so neither needs
/// its own handle.
#[derive(Debug, Default)]
struct ParseState {
    document: Document,
    title_set: bool,
    /// Current item already received an answer label
    item_answered: bool,
    /// Answer text being accumulated; `Some` only while an item is current
    pending_answer: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl ParseState {
    fn current_item(&mut self) -> Option<&mut QaItem> {
        self.document.categories.last_mut()?.items.last_mut()
    }

    fn report(&mut self, line: usize, kind: DiagnosticKind) {
        tracing::warn!(line, "{}", kind.message());
        self.diagnostics.push(Diagnostic { line, kind });
    }

    /// Move the pending answer into the current item
    fn flush_answer(&mut self) {
        if let Some(answer) = self.pending_answer.take() {
            if let Some(item) = self.current_item() {
                tracing::debug!(chars = answer.chars().count(), "answer flushed");
                item.answer = answer;
            }
        }
    }

    fn set_title(&mut self, line: usize, title: &str) {
        self.flush_answer();
        if self.title_set {
            self.report(line, DiagnosticKind::DuplicateTitle);
        }
        self.document.title = title.to_string();
        self.title_set = true;
    }

    fn open_category(&mut self, name: &str) {
        self.flush_answer();
        tracing::debug!(category = name, "category opened");
        self.document.categories.push(Category::new(name));
        self.item_answered = false;
    }

    fn open_question(&mut self, line: usize, question: String) {
        self.flush_answer();
        if self.document.categories.is_empty() {
            self.report(line, DiagnosticKind::OrphanQuestion);
            self.document.categories.push(Category::new(""));
        }
        if let Some(category) = self.document.categories.last_mut() {
            tracing::debug!(question = %question, "item appended");
            category.items.push(QaItem::new(question, ""));
        }
        self.item_answered = false;
    }

    fn start_answer(&mut self, line: usize, payload: &str) {
        self.flush_answer();
        if self.current_item().is_none() {
            self.report(line, DiagnosticKind::OrphanAnswer);
            return;
        }
        if self.item_answered {
            self.report(line, DiagnosticKind::DuplicateAnswer);
        }
        self.item_answered = true;
        self.pending_answer = Some(payload.to_string());
    }

    /// Append a continuation line; returns false when nothing is accumulating
    fn continue_answer(&mut self, text: &str) -> bool {
        match self.pending_answer.as_mut() {
            Some(buffer) => {
                if !buffer.is_empty() {
                    buffer.push(' ');
                }
                buffer.push_str(text);
                true
            }
            None => false,
        }
    }

    fn separator(&mut self) {
        if self.pending_answer.is_some() {
            self.flush_answer();
        } else if let Some(item) = self.current_item() {
            item.rule_after = true;
        }
    }

    fn finish(mut self) -> Parsed {
        self.flush_answer();
        Parsed {
            document: self.document,
            diagnostics: self.diagnostics,
        }
    }
}

/// Builds a [`Document`] from source lines
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    classifier: LineClassifier,
}

impl DocumentBuilder {
    pub fn new(config: &ParseConfig) -> Self {
        Self {
            classifier: LineClassifier::new(config.answer_label.clone()),
        }
    }

    /// Build the tree, discarding diagnostics
    pub fn build<I, S>(&self, lines: I) -> Document
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build_with_diagnostics(lines).document
    }

    /// Build the tree and collect every recoverable problem found
    pub fn build_with_diagnostics<I, S>(&self, lines: I) -> Parsed
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ParseState::default();

        for (index, raw) in lines.into_iter().enumerate() {
            let line = index + 1;
            match self.classifier.classify(raw.as_ref()) {
                LineKind::Title(title) => state.set_title(line, title),
                LineKind::Category(name) => state.open_category(name),
                LineKind::Question(question) => state.open_question(line, question.text()),
                LineKind::AnswerStart(payload) => state.start_answer(line, payload),
                LineKind::Blank => state.flush_answer(),
                LineKind::Separator => state.separator(),
                LineKind::ListItem(text) | LineKind::Text(text) => {
                    if !state.continue_answer(text) {
                        tracing::trace!(line, "free text outside an answer ignored");
                    }
                }
            }
        }

        state.finish()
    }
}

/// Parser over the question sheet line format
#[derive(Debug, Clone, Default)]
pub struct SheetParser {
    builder: DocumentBuilder,
}

impl SheetParser {
    pub fn new(config: &ParseConfig) -> Self {
        Self {
            builder: DocumentBuilder::new(config),
        }
    }

    /// Parse and keep diagnostics
    pub fn parse_with_diagnostics(&self, input: &str) -> Parsed {
        self.builder.build_with_diagnostics(strip_bom(input).lines())
    }
}

impl Parser for SheetParser {
    fn parse(&self, input: &str) -> Document {
        self.builder.build(strip_bom(input).lines())
    }
}

/// Drop a leading UTF-8 byte order mark, which `trim` keeps
fn strip_bom(input: &str) -> &str {
    input.strip_prefix('\u{feff}').unwrap_or(input)
}

/// Build a document from lines with the default answer label
pub fn build<I, S>(lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DocumentBuilder::default().build(lines)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // One source line drawn from the sheet vocabulary
    fn line_strategy() -> impl Strategy<Value = String> {
        let word = "[a-zA-Záéíóñ¿?]{1,8}";
        prop_oneof![
            word.prop_map(|w| format!("# {w}")),
            word.prop_map(|w| format!("## {w}")),
            word.prop_map(|w| format!("### {w}")),
            word.prop_map(|w| format!("### 1) {w}")),
            word.prop_map(|w| format!("**Respuesta:** {w}")),
            Just(String::new()),
            Just("---".to_string()),
            word.prop_map(|w| format!("- {w}")),
            word.prop_map(|w| format!("{w} {w}")),
        ]
    }

    fn sheet_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(line_strategy(), 0..60)
    }

    proptest! {
        // Property: building is deterministic
        #[test]
        fn prop_build_deterministic(lines in sheet_strategy()) {
            let builder = DocumentBuilder::default();
            prop_assert_eq!(
                builder.build_with_diagnostics(&lines),
                builder.build_with_diagnostics(&lines)
            );
        }

        // Property: answers never contain line breaks
        #[test]
        fn prop_answers_single_line(lines in sheet_strategy()) {
            let doc = build(&lines);
            for item in doc.items() {
                prop_assert!(!item.answer.contains('\n'));
                prop_assert!(!item.answer.starts_with(' '));
            }
        }

        // Property: category names appear in source order
        #[test]
        fn prop_category_order(lines in sheet_strategy()) {
            let doc = build(&lines);
            let expected: Vec<&str> = lines
                .iter()
                .filter_map(|l| l.strip_prefix("## "))
                .collect();
            let named: Vec<&str> = doc
                .categories
                .iter()
                .skip_while(|c| c.name.is_empty())
                .map(|c| c.name.as_str())
                .collect();
            prop_assert_eq!(named, expected);
        }

        // Property: every question line yields exactly one item, in order
        #[test]
        fn prop_question_count(lines in sheet_strategy()) {
            let doc = build(&lines);
            let questions = lines.iter().filter(|l| l.starts_with("### ")).count();
            prop_assert_eq!(doc.item_count(), questions);
        }

        // Property: every diagnostic points at a real line
        #[test]
        fn prop_diagnostic_lines_in_range(lines in sheet_strategy()) {
            let parsed = DocumentBuilder::default().build_with_diagnostics(&lines);
            for diagnostic in parsed.diagnostics {
                prop_assert!(diagnostic.line >= 1 && diagnostic.line <= lines.len());
            }
        }
    }
}
