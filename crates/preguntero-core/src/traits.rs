// SPDX-License-Identifier: AGPL-3.0-or-later
//! Parser and render contract traits, shared configuration and errors

use crate::ast::{Category, Document, OutputFormat, QaItem};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Error type for loading, parsing and rendering
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Source file not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{format:?} backend failed: {message}")]
    Render { format: OutputFormat, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

/// Configuration for parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Literal token that opens an answer at the start of a line
    pub answer_label: String,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            answer_label: "**Respuesta:**".to_string(),
        }
    }
}

/// Page size and margins in PDF points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl PageGeometry {
    pub const INCH: f32 = 72.0;

    /// US Letter, 0.75in top/bottom and 1in side margins
    pub const LETTER: Self = Self {
        width: 612.0,
        height: 792.0,
        margin_top: 0.75 * Self::INCH,
        margin_bottom: 0.75 * Self::INCH,
        margin_left: Self::INCH,
        margin_right: Self::INCH,
    };

    pub fn frame_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn frame_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::LETTER
    }
}

/// Configuration for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Value of the `lang` attribute in hypertext output
    pub language: String,
    /// Window title for hypertext output and PDF metadata
    pub document_title: String,
    /// Label shown above each answer
    pub answer_label: String,
    pub page: PageGeometry,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            language: "es".to_string(),
            document_title: "Preguntero Técnico - TaskFlow API".to_string(),
            answer_label: "Respuesta:".to_string(),
            page: PageGeometry::default(),
        }
    }
}

/// Parser trait: convert question sheet source to a Document
pub trait Parser: Send + Sync {
    fn parse(&self, input: &str) -> Document;
}

/// The four node renderers every backend provides.
///
/// Each call is a pure function of the node it receives; backends never
/// mutate the tree. Fragments are concatenated by [`Renderer::assemble`].
pub trait RenderContract {
    /// Backend-native fragment type
    type Fragment;

    /// Header boilerplate plus the document title
    fn render_document(&self, doc: &Document) -> Self::Fragment;

    /// Category heading, preceded by a hard break when `position > 0`
    fn render_category(&self, category: &Category, position: usize) -> Self::Fragment;

    /// Question text, emphasised
    fn render_question(&self, item: &QaItem) -> Self::Fragment;

    /// Answer text, set apart from the question
    fn render_answer(&self, item: &QaItem) -> Self::Fragment;
}

/// Walk the tree in pre-order and collect every fragment.
///
/// Order: document, then each category, then its items with the question
/// before its answer.
pub fn fragments<R>(renderer: &R, doc: &Document) -> Vec<R::Fragment>
where
    R: RenderContract + ?Sized,
{
    let mut out = Vec::with_capacity(1 + doc.categories.len() + 2 * doc.item_count());
    out.push(renderer.render_document(doc));
    for (position, category) in doc.categories.iter().enumerate() {
        out.push(renderer.render_category(category, position));
        for item in &category.items {
            out.push(renderer.render_question(item));
            out.push(renderer.render_answer(item));
        }
    }
    out
}

/// Renderer trait: turn a Document into a finished artifact
pub trait Renderer: RenderContract {
    /// The target format this renderer produces
    fn format(&self) -> OutputFormat;

    /// Concatenate fragments into the final bytes
    fn assemble(&self, fragments: Vec<Self::Fragment>) -> Result<Vec<u8>>;

    /// Render a Document to bytes
    fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        self.assemble(fragments(self, doc))
    }
}

/// Extension trait for streaming operations
pub trait ParserExt: Parser {
    /// Parse from a reader
    fn parse_reader<R: Read>(&self, reader: R) -> Result<Document> {
        let mut input = String::new();
        let mut reader = reader;
        reader.read_to_string(&mut input)?;
        Ok(self.parse(&input))
    }
}

/// Extension trait for writing artifacts
pub trait RendererExt: Renderer {
    /// Render to a writer
    fn render_writer<W: Write>(&self, doc: &Document, writer: &mut W) -> Result<()> {
        let output = self.render(doc)?;
        writer.write_all(&output)?;
        Ok(())
    }

    /// Render and write to `path`, replacing any existing file
    fn render_to_path(&self, doc: &Document, path: &Path) -> Result<()> {
        let output = self.render(doc)?;
        fs::write(path, &output)?;
        tracing::info!(
            format = self.format().label(),
            path = %path.display(),
            bytes = output.len(),
            "artifact written"
        );
        Ok(())
    }
}

// Blanket implementations
impl<T: Parser> ParserExt for T {}
impl<T: Renderer> RendererExt for T {}

/// Read a whole source file into memory.
///
/// A path that does not exist maps to [`ConversionError::MissingSource`];
/// other read failures keep their I/O cause.
pub fn load_source(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ConversionError::MissingSource {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}
