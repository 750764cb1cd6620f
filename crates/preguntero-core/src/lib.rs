// SPDX-License-Identifier: AGPL-3.0-or-later
//! Preguntero Core - question sheet document tree, parser and renderers
//!
//! This crate provides:
//! - A document tree of title, categories and question/answer items
//! - A line classifier and builder turning sheet sources into that tree
//! - A render contract that every output backend implements
//! - Backends for paginated PDF and standalone HTML output

pub mod ast;
pub mod builder;
pub mod classify;
pub mod formats;
pub mod traits;

pub use ast::{Category, Document, OutputFormat, QaItem};
pub use builder::{build, Diagnostic, DiagnosticKind, DocumentBuilder, Parsed, SheetParser};
pub use classify::{LineClassifier, LineKind};
#[cfg(feature = "html")]
pub use formats::HtmlRenderer;
#[cfg(feature = "pdf")]
pub use formats::PdfRenderer;
pub use traits::{
    fragments, load_source, ConversionError, PageGeometry, ParseConfig, Parser, ParserExt,
    RenderConfig, RenderContract, Renderer, RendererExt, Result,
};

/// Serialise a document tree as pretty-printed JSON
pub fn to_json(doc: &Document) -> Result<String> {
    serde_json::to_string_pretty(doc).map_err(|e| ConversionError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_tree_shape() {
        let doc = build(["# T", "## C", "### Q", "**Respuesta:** A"]);
        let json = to_json(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["categories"][0]["name"], "C");
        assert_eq!(value["categories"][0]["items"][0]["answer"], "A");
    }
}
