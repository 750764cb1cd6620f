// SPDX-License-Identifier: AGPL-3.0-or-later
//! Hypertext backend: one scrollable, print-friendly HTML page

use crate::ast::{Category, Document, OutputFormat, QaItem};
use crate::traits::{RenderConfig, RenderContract, Renderer, Result};
use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLESHEET: &str = r#"        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 960px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f9f9f9;
        }

        h1 {
            color: #1f4788;
            text-align: center;
            border-bottom: 3px solid #2e5c8a;
            padding-bottom: 15px;
            margin-bottom: 30px;
        }

        h2 {
            color: #2e5c8a;
            border-left: 5px solid #1f4788;
            padding-left: 15px;
            margin-top: 40px;
        }

        h2.break-before {
            page-break-before: always;
            break-before: page;
        }

        h3 {
            color: #1a1a1a;
            margin-top: 20px;
            margin-bottom: 8px;
        }

        .respuesta {
            background-color: #f0f4f8;
            border-left: 4px solid #2e5c8a;
            padding: 12px 15px;
            margin: 10px 0 20px 0;
            border-radius: 4px;
        }

        .respuesta-label {
            font-weight: bold;
            color: #2e5c8a;
            margin-bottom: 5px;
        }

        .respuesta-texto {
            color: #444;
            font-size: 14px;
        }

        hr {
            border: none;
            height: 1px;
            background-color: #ddd;
            margin: 40px 0;
        }

        @media print {
            body { background-color: white; }
        }
"#;

/// Renders a sheet as a standalone HTML document
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl RenderContract for HtmlRenderer {
    type Fragment = String;

    fn render_document(&self, doc: &Document) -> String {
        let mut output = String::new();
        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&format!(
            "<html lang=\"{}\">\n",
            encode_double_quoted_attribute(&self.config.language)
        ));
        output.push_str("<head>\n");
        output.push_str("    <meta charset=\"UTF-8\">\n");
        output.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        output.push_str(&format!(
            "    <title>{}</title>\n",
            encode_text(&self.config.document_title)
        ));
        output.push_str("    <style>\n");
        output.push_str(STYLESHEET);
        output.push_str("    </style>\n");
        output.push_str("</head>\n");
        output.push_str("<body>\n");
        if !doc.title.is_empty() {
            output.push_str(&format!("<h1>{}</h1>\n", encode_text(&doc.title)));
        }
        output
    }

    fn render_category(&self, category: &Category, position: usize) -> String {
        let name = encode_text(&category.name);
        if position > 0 {
            format!("<h2 class=\"break-before\">{name}</h2>\n")
        } else {
            format!("<h2>{name}</h2>\n")
        }
    }

    fn render_question(&self, item: &QaItem) -> String {
        format!("<h3>{}</h3>\n", encode_text(&item.question))
    }

    fn render_answer(&self, item: &QaItem) -> String {
        let mut output = format!(
            "<div class=\"respuesta\"><div class=\"respuesta-label\">{}</div><div class=\"respuesta-texto\">{}</div></div>\n",
            encode_text(&self.config.answer_label),
            encode_text(&item.answer)
        );
        if item.rule_after {
            output.push_str("<hr>\n");
        }
        output
    }
}

impl Renderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn assemble(&self, fragments: Vec<String>) -> Result<Vec<u8>> {
        let mut output = fragments.concat();
        output.push_str("\n</body>\n</html>\n");
        Ok(output.into_bytes())
    }
}
