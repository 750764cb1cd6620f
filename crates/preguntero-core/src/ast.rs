// SPDX-License-Identifier: AGPL-3.0-or-later
//! Document tree for question sheets
//!
//! A sheet has one title and an ordered list of categories, each holding an
//! ordered list of question/answer items. The tree is append-only while the
//! builder runs and read-only afterwards; every node has exactly one owner.

use serde::{Deserialize, Serialize};

/// Output format identifier for the render backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Pdf,
}

impl OutputFormat {
    /// File extension for this format
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }

    /// Short display name
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Pdf => "PDF",
        }
    }

    pub const ALL: [Self; 2] = [Self::Html, Self::Pdf];
}

/// The root document node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub categories: Vec<Category>,
}

impl Document {
    /// Create a new empty document
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            categories: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Total number of question/answer items across all categories
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// First category with exactly this name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Iterate over every item in traversal order
    pub fn items(&self) -> impl Iterator<Item = &QaItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }
}

/// A named section of the sheet. An empty category is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<QaItem>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: QaItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One question and its (possibly empty) answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaItem {
    pub question: String,
    pub answer: String,
    /// A horizontal rule followed this item in the source
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub rule_after: bool,
}

impl QaItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            rule_after: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new("Preguntero")
            .with_category(
                Category::new("Teóricas Simples")
                    .with_item(QaItem::new("¿Qué es JPA?", "Una especificación."))
                    .with_item(QaItem::new("¿Qué es ORM?", "Object-Relational Mapping.")),
            )
            .with_category(Category::new("Vacía"))
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new("Title");
        assert_eq!(doc.title, "Title");
        assert!(doc.categories.is_empty());
        assert_eq!(doc.item_count(), 0);
    }

    #[test]
    fn test_item_count_and_lookup() {
        let doc = sample();
        assert_eq!(doc.item_count(), 2);
        assert!(doc.category("Vacía").unwrap().is_empty());
        assert!(doc.category("Missing").is_none());

        let questions: Vec<_> = doc.items().map(|i| i.question.as_str()).collect();
        assert_eq!(questions, ["¿Qué es JPA?", "¿Qué es ORM?"]);
    }

    #[test]
    fn test_rule_after_skipped_when_false() {
        let json = serde_json::to_string(&QaItem::new("Q", "A")).unwrap();
        assert!(!json.contains("rule_after"));

        let mut ruled = QaItem::new("Q", "A");
        ruled.rule_after = true;
        let json = serde_json::to_string(&ruled).unwrap();
        assert!(json.contains("\"rule_after\":true"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let doc = sample();
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_output_format_labels() {
        for format in OutputFormat::ALL {
            assert_eq!(format.extension(), format.label().to_lowercase());
        }
    }
}
