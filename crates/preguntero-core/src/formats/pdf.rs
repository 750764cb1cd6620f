// SPDX-License-Identifier: AGPL-3.0-or-later
//! Page-layout backend: paginated PDF with one page run per category
//!
//! Rendering happens in two steps. The render contract turns nodes into
//! [`LayoutOp`] flowables; [`PdfRenderer::paginate`] flows them onto pages
//! and the result is serialised with `pdf-writer` using the standard
//! Helvetica fonts, so no font files are needed.

use crate::ast::{Category, Document, OutputFormat, QaItem};
use crate::traits::{
    ConversionError, PageGeometry, RenderConfig, RenderContract, Renderer, Result,
};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use unicode_segmentation::UnicodeSegmentation;

const TITLE_GAP: f32 = 0.2 * PageGeometry::INCH;
const ANSWER_GAP: f32 = 0.15 * PageGeometry::INCH;
const ACCENT: u32 = 0x2e5c8a;
const RULE_COLOR: u32 = 0xdddddd;

/// Paragraph style of a flowable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Heading,
    Question,
    Answer,
}

/// Built-in Type1 font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(&self) -> Name<'static> {
        match self {
            Self::Regular => Name(b"F1"),
            Self::Bold => Name(b"F2"),
        }
    }

    /// Average advance width as a fraction of the font size
    fn average_advance(&self) -> f32 {
        match self {
            Self::Regular => 0.5,
            Self::Bold => 0.56,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct StyleSpec {
    font: Font,
    size: f32,
    color: u32,
    space_before: f32,
    space_after: f32,
    left_indent: f32,
    centered: bool,
}

impl TextStyle {
    fn spec(&self) -> StyleSpec {
        match self {
            Self::Title => StyleSpec {
                font: Font::Bold,
                size: 24.0,
                color: 0x1f4788,
                space_before: 0.0,
                space_after: 30.0,
                left_indent: 0.0,
                centered: true,
            },
            Self::Heading => StyleSpec {
                font: Font::Bold,
                size: 14.0,
                color: ACCENT,
                space_before: 12.0,
                space_after: 12.0,
                left_indent: 0.0,
                centered: false,
            },
            Self::Question => StyleSpec {
                font: Font::Bold,
                size: 11.0,
                color: 0x1a1a1a,
                space_before: 0.0,
                space_after: 6.0,
                left_indent: 0.0,
                centered: false,
            },
            Self::Answer => StyleSpec {
                font: Font::Regular,
                size: 10.0,
                color: 0x333333,
                space_before: 0.0,
                space_after: 12.0,
                left_indent: 20.0,
                centered: false,
            },
        }
    }
}

/// Flowable emitted by the render contract
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutOp {
    Paragraph { text: String, style: TextStyle },
    Spacer(f32),
    PageBreak,
    Rule,
}

/// Positioned drawing command, in PDF user space (origin bottom-left)
#[derive(Debug, Clone, PartialEq)]
pub enum Placed {
    Text {
        x: f32,
        y: f32,
        size: f32,
        font: Font,
        color: u32,
        text: String,
    },
    Bar {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: u32,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        color: u32,
    },
}

/// One laid-out page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<Placed>,
}

impl Page {
    /// Text lines on this page, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|placed| match placed {
            Placed::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Renders a sheet as a paginated PDF
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    config: RenderConfig,
}

impl PdfRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Flow layout ops onto pages. Always yields at least one page.
    pub fn paginate(&self, ops: &[LayoutOp]) -> Vec<Page> {
        let mut flow = Paginator::new(&self.config.page);
        for op in ops {
            match op {
                LayoutOp::Paragraph { text, style } => flow.paragraph(text, *style),
                LayoutOp::Spacer(height) => flow.spacer(*height),
                LayoutOp::PageBreak => flow.break_page(),
                LayoutOp::Rule => flow.rule(),
            }
        }
        flow.finish()
    }

    fn write_pdf(&self, pages: &[Page]) -> Vec<u8> {
        let geometry = &self.config.page;
        let mut pdf = Pdf::new();
        let mut alloc = Ref::new(1);

        let catalog_id = alloc.bump();
        let tree_id = alloc.bump();
        let regular_id = alloc.bump();
        let bold_id = alloc.bump();
        let info_id = alloc.bump();
        let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc.bump(), alloc.bump())).collect();

        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_ids.len() as i32);
        pdf.type1_font(regular_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.document_info(info_id)
            .title(TextStr(&self.config.document_title))
            .producer(TextStr("preguntero"));

        for (page, (page_id, content_id)) in pages.iter().zip(&page_ids) {
            let mut writer = pdf.page(*page_id);
            writer.media_box(Rect::new(0.0, 0.0, geometry.width, geometry.height));
            writer.parent(tree_id);
            writer.contents(*content_id);
            writer
                .resources()
                .fonts()
                .pair(Font::Regular.resource(), regular_id)
                .pair(Font::Bold.resource(), bold_id);
            writer.finish();

            pdf.stream(*content_id, &draw(page).finish());
        }

        pdf.finish()
    }
}

impl RenderContract for PdfRenderer {
    type Fragment = Vec<LayoutOp>;

    fn render_document(&self, doc: &Document) -> Vec<LayoutOp> {
        if doc.title.is_empty() {
            return Vec::new();
        }
        vec![
            LayoutOp::Paragraph {
                text: doc.title.clone(),
                style: TextStyle::Title,
            },
            LayoutOp::Spacer(TITLE_GAP),
        ]
    }

    fn render_category(&self, category: &Category, position: usize) -> Vec<LayoutOp> {
        let mut ops = Vec::with_capacity(2);
        if position > 0 {
            ops.push(LayoutOp::PageBreak);
        }
        ops.push(LayoutOp::Paragraph {
            text: category.name.clone(),
            style: TextStyle::Heading,
        });
        ops
    }

    fn render_question(&self, item: &QaItem) -> Vec<LayoutOp> {
        vec![LayoutOp::Paragraph {
            text: item.question.clone(),
            style: TextStyle::Question,
        }]
    }

    fn render_answer(&self, item: &QaItem) -> Vec<LayoutOp> {
        let mut ops = vec![
            LayoutOp::Paragraph {
                text: item.answer.clone(),
                style: TextStyle::Answer,
            },
            LayoutOp::Spacer(ANSWER_GAP),
        ];
        if item.rule_after {
            ops.push(LayoutOp::Rule);
        }
        ops
    }
}

impl Renderer for PdfRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn assemble(&self, fragments: Vec<Vec<LayoutOp>>) -> Result<Vec<u8>> {
        let geometry = &self.config.page;
        if geometry.frame_width() <= 0.0 || geometry.frame_height() <= 0.0 {
            return Err(ConversionError::Render {
                format: OutputFormat::Pdf,
                message: format!(
                    "margins leave no text frame on a {}x{} page",
                    geometry.width, geometry.height
                ),
            });
        }
        let ops: Vec<LayoutOp> = fragments.into_iter().flatten().collect();
        let pages = self.paginate(&ops);
        tracing::debug!(pages = pages.len(), ops = ops.len(), "layout complete");
        Ok(self.write_pdf(&pages))
    }
}

/// Cursor state while flowing ops onto pages
struct Paginator<'a> {
    geometry: &'a PageGeometry,
    pages: Vec<Page>,
    current: Page,
    /// Distance of the cursor from the page bottom
    y: f32,
}

impl<'a> Paginator<'a> {
    fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: Page::default(),
            y: geometry.height - geometry.margin_top,
        }
    }

    fn at_top(&self) -> bool {
        self.current.items.is_empty()
    }

    fn break_page(&mut self) {
        if self.at_top() {
            return;
        }
        self.pages.push(std::mem::take(&mut self.current));
        self.y = self.geometry.height - self.geometry.margin_top;
    }

    /// Start a new page unless `height` still fits above the bottom margin
    fn reserve(&mut self, height: f32) {
        if self.y - height < self.geometry.margin_bottom {
            self.break_page();
        }
    }

    fn spacer(&mut self, height: f32) {
        if !self.at_top() {
            self.y -= height;
        }
    }

    fn rule(&mut self) {
        self.reserve(12.0);
        self.y -= 6.0;
        self.current.items.push(Placed::Rule {
            x1: self.geometry.margin_left,
            x2: self.geometry.width - self.geometry.margin_right,
            y: self.y,
            color: RULE_COLOR,
        });
        self.y -= 6.0;
    }

    fn paragraph(&mut self, text: &str, style: TextStyle) {
        if text.trim().is_empty() {
            return;
        }
        let spec = style.spec();
        let leading = spec.size * 1.2;
        let width = self.geometry.frame_width() - spec.left_indent;

        if !self.at_top() {
            self.y -= spec.space_before;
        }
        for line in wrap(text, width, spec.size, spec.font) {
            self.reserve(leading);
            let x = if spec.centered {
                let used = measure(&line, spec.size, spec.font);
                self.geometry.margin_left + ((self.geometry.frame_width() - used) / 2.0).max(0.0)
            } else {
                self.geometry.margin_left + spec.left_indent
            };
            if style == TextStyle::Answer {
                self.current.items.push(Placed::Bar {
                    x: x - 10.0,
                    y: self.y - leading,
                    width: 2.0,
                    height: leading,
                    color: ACCENT,
                });
            }
            self.current.items.push(Placed::Text {
                x,
                y: self.y - spec.size,
                size: spec.size,
                font: spec.font,
                color: spec.color,
                text: line,
            });
            self.y -= leading;
        }
        self.y -= spec.space_after;
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.at_top() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Estimated advance width of `text`
fn measure(text: &str, size: f32, font: Font) -> f32 {
    text.graphemes(true).count() as f32 * size * font.average_advance()
}

/// Greedy word wrap. A word wider than the frame gets a line of its own.
fn wrap(text: &str, width: f32, size: f32, font: Font) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = measure(&line, size, font) + measure(" ", size, font) + measure(word, size, font);
        if candidate > width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line.push(' ');
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn rgb(color: u32) -> (f32, f32, f32) {
    let channel = |shift: u32| ((color >> shift) & 0xff) as f32 / 255.0;
    (channel(16), channel(8), channel(0))
}

fn draw(page: &Page) -> Content {
    let mut content = Content::new();
    for placed in &page.items {
        match placed {
            Placed::Text {
                x,
                y,
                size,
                font,
                color,
                text,
            } => {
                let (r, g, b) = rgb(*color);
                content.set_fill_rgb(r, g, b);
                content.begin_text();
                content.set_font(font.resource(), *size);
                content.next_line(*x, *y);
                content.show(Str(&encode_win_ansi(text)));
                content.end_text();
            }
            Placed::Bar {
                x,
                y,
                width,
                height,
                color,
            } => {
                let (r, g, b) = rgb(*color);
                content.set_fill_rgb(r, g, b);
                content.rect(*x, *y, *width, *height);
                content.fill_nonzero();
            }
            Placed::Rule { x1, x2, y, color } => {
                let (r, g, b) = rgb(*color);
                content.set_stroke_rgb(r, g, b);
                content.set_line_width(1.0);
                content.move_to(*x1, *y);
                content.line_to(*x2, *y);
                content.stroke();
            }
        }
    }
    content
}

/// Encode text for the standard fonts' WinAnsi encoding; unmapped characters become `?`
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use crate::traits::fragments;

    fn page_breaks(doc: &Document) -> usize {
        fragments(&PdfRenderer::default(), doc)
            .into_iter()
            .flatten()
            .filter(|op| *op == LayoutOp::PageBreak)
            .count()
    }

    fn layout(doc: &Document) -> Vec<Page> {
        let renderer = PdfRenderer::default();
        let ops: Vec<LayoutOp> = fragments(&renderer, doc).into_iter().flatten().collect();
        renderer.paginate(&ops)
    }

    #[test]
    fn test_three_categories_two_breaks() {
        let doc = build([
            "# T",
            "## A",
            "### Q1",
            "**Respuesta:** A1",
            "## B",
            "### Q2",
            "**Respuesta:** A2",
            "## C",
        ]);
        assert_eq!(page_breaks(&doc), 2);

        let pages = layout(&doc);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].lines().collect::<Vec<_>>(), ["T", "A", "Q1", "A1"]);
        assert_eq!(pages[1].lines().collect::<Vec<_>>(), ["B", "Q2", "A2"]);
        assert_eq!(pages[2].lines().collect::<Vec<_>>(), ["C"]);
    }

    #[test]
    fn test_no_break_for_single_category() {
        let doc = build(["# T", "## Only"]);
        assert_eq!(page_breaks(&doc), 0);
        assert_eq!(layout(&doc).len(), 1);
    }

    #[test]
    fn test_empty_document_has_one_page() {
        let pages = layout(&Document::default());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].items.is_empty());
    }

    #[test]
    fn test_long_content_overflows_within_margins() {
        let answer = "palabra ".repeat(400);
        let mut lines = vec!["# T".to_string(), "## C".to_string()];
        for i in 0..6 {
            lines.push(format!("### Q{i}"));
            lines.push(format!("**Respuesta:** {answer}"));
        }
        let doc = build(&lines);
        let geometry = PageGeometry::default();
        let pages = layout(&doc);

        assert!(pages.len() > 1);
        for page in &pages {
            assert!(!page.items.is_empty());
            for placed in &page.items {
                if let Placed::Text { y, .. } = placed {
                    assert!(*y >= geometry.margin_bottom - 1.0);
                    assert!(*y <= geometry.height - geometry.margin_top);
                }
            }
        }
    }

    #[test]
    fn test_answer_is_indented_and_barred() {
        let pages = layout(&build(["## C", "### Q", "**Respuesta:** A"]));
        let items = &pages[0].items;
        let x_of = |wanted: &str| {
            items.iter().find_map(|p| match p {
                Placed::Text { x, text, .. } if text == wanted => Some(*x),
                _ => None,
            })
        };
        assert_eq!(x_of("Q"), Some(72.0));
        assert_eq!(x_of("A"), Some(92.0));
        assert!(items.iter().any(|p| matches!(p, Placed::Bar { .. })));
    }

    #[test]
    fn test_wrap() {
        let lines = wrap("uno dos tres cuatro", 40.0, 10.0, Font::Regular);
        assert_eq!(lines, ["uno dos", "tres", "cuatro"]);
        assert_eq!(wrap("   ", 40.0, 10.0, Font::Regular), Vec::<String>::new());
        assert_eq!(wrap("larguísimapalabra", 10.0, 10.0, Font::Regular), ["larguísimapalabra"]);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("¿Qué?"), [0xbf, b'Q', b'u', 0xe9, b'?']);
        assert_eq!(encode_win_ansi("año – “x”"), [b'a', 0xf1, b'o', b' ', 0x96, b' ', 0x93, b'x', 0x94]);
        assert_eq!(encode_win_ansi("✓"), [b'?']);
    }

    #[test]
    fn test_margins_wider_than_page_are_rejected() {
        let config = RenderConfig {
            page: PageGeometry {
                margin_left: 400.0,
                margin_right: 400.0,
                margin_top: 500.0,
                margin_bottom: 500.0,
                ..PageGeometry::LETTER
            },
            ..RenderConfig::default()
        };
        let doc = build(["# T", "## C", "### Q", "**Respuesta:** R"]);
        let err = PdfRenderer::new(config).render(&doc).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::Render {
                format: OutputFormat::Pdf,
                ..
            }
        ));
        assert!(err.to_string().contains("no text frame"));
    }

    #[test]
    fn test_render_produces_pdf() {
        let doc = build(["# T", "## A", "### Q", "**Respuesta:** R", "## B"]);
        let bytes = PdfRenderer::default().render(&doc).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(text.contains("/Helvetica-Bold"));
        let pages = text.matches("/Type /Page").count() - text.matches("/Type /Pages").count();
        assert_eq!(pages, 2);
    }
}
