// SPDX-License-Identifier: AGPL-3.0-or-later
//! Line classifier for question sheet sources
//!
//! Every trimmed line maps to exactly one [`LineKind`]. Rules are checked in
//! priority order and the first match wins; anything unrecognised falls
//! through to [`LineKind::Text`].

const TITLE_MARKER: &str = "# ";
const CATEGORY_MARKER: &str = "## ";
const QUESTION_MARKER: &str = "### ";
const RULE_MARKER: &str = "---";
const BULLET_MARKER: &str = "- ";

/// Block-start token for one source line, borrowing its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Title(&'a str),
    Category(&'a str),
    Question(Question<'a>),
    AnswerStart(&'a str),
    Blank,
    Separator,
    ListItem(&'a str),
    Text(&'a str),
}

/// Question payload, split where the enumerator artifact was removed.
///
/// Sources number questions as `1) ...`; the `)` right after the leading
/// digits is dropped and nothing else is touched, so parentheses inside
/// the question survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question<'a> {
    head: &'a str,
    tail: &'a str,
}

impl<'a> Question<'a> {
    fn parse(payload: &'a str) -> Self {
        let digits = payload.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && payload[digits..].starts_with(')') {
            Self {
                head: &payload[..digits],
                tail: &payload[digits + 1..],
            }
        } else {
            Self {
                head: payload,
                tail: "",
            }
        }
    }

    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.head.len() + self.tail.len());
        text.push_str(self.head);
        text.push_str(self.tail);
        text
    }
}

/// Classifies lines against a fixed answer label
#[derive(Debug, Clone)]
pub struct LineClassifier {
    answer_label: String,
}

impl LineClassifier {
    pub fn new(answer_label: impl Into<String>) -> Self {
        Self {
            answer_label: answer_label.into(),
        }
    }

    /// Classify one line. Leading and trailing whitespace is ignored.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(TITLE_MARKER) {
            return LineKind::Title(rest.trim());
        }
        if let Some(rest) = line.strip_prefix(CATEGORY_MARKER) {
            return LineKind::Category(rest.trim());
        }
        if let Some(rest) = line.strip_prefix(QUESTION_MARKER) {
            return LineKind::Question(Question::parse(rest.trim()));
        }
        if !self.answer_label.is_empty() {
            if let Some(rest) = line.strip_prefix(self.answer_label.as_str()) {
                return LineKind::AnswerStart(rest.trim());
            }
        }
        if line.is_empty() {
            return LineKind::Blank;
        }
        if line.starts_with(RULE_MARKER) {
            return LineKind::Separator;
        }
        if let Some(rest) = line.strip_prefix(BULLET_MARKER) {
            return LineKind::ListItem(rest.trim());
        }
        LineKind::Text(line)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(crate::traits::ParseConfig::default().answer_label)
    }
}
