// SPDX-License-Identifier: AGPL-3.0-or-later
//! Output backends implementing the render contract

#[cfg(feature = "html")]
pub mod html;
#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "html")]
pub use html::HtmlRenderer;
#[cfg(feature = "pdf")]
pub use pdf::PdfRenderer;
