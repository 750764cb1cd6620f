// SPDX-License-Identifier: AGPL-3.0-or-later
#![no_main]

use libfuzzer_sys::fuzz_target;
use preguntero_core::{HtmlRenderer, PdfRenderer, Renderer, SheetParser};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let parsed = SheetParser::default().parse_with_diagnostics(source);
    let _ = HtmlRenderer::default().render(&parsed.document);
    let _ = PdfRenderer::default().render(&parsed.document);
});
