//! Core pipeline turning delimited Markdown into a self-contained HTML slide
//! deck: slide splitting, math-safe Markdown rendering, theme lookup and
//! document assembly.

pub mod document;
pub mod error;
pub mod markdown;
pub mod math;
pub mod navigation;
pub mod split;
pub mod theme;
pub mod types;

pub use document::{DocumentAssembler, DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE};
pub use error::{Error, Result};
pub use markdown::MarkdownRenderer;
pub use navigation::{NavAction, Navigator};
pub use split::{split_slides, SLIDE_DELIMITER};
pub use theme::{resolve_theme, resolve_transition, Theme, ThemeColors, Transition};
pub use types::{ensure_slides, PresentationRequest, RenderedSlide, Slide};

/// Split and render every slide of a deck.
pub fn render_presentation(raw_text: &str) -> Vec<RenderedSlide> {
    let slides = split_slides(raw_text);
    MarkdownRenderer::new().render_all(&slides)
}

/// Build a complete HTML deck from delimited Markdown.
///
/// Fails only for theme or transition names outside the catalogs; the names
/// are checked before any slide is processed. Any text is accepted: blank
/// input gives a valid deck with no slides.
pub fn generate_document(
    raw_text: &str,
    theme_name: &str,
    transition_name: &str,
) -> Result<String> {
    let colors = resolve_theme(theme_name)?;
    let transition = resolve_transition(transition_name)?;

    let rendered = render_presentation(raw_text);
    Ok(DocumentAssembler::new(colors, transition).assemble(&rendered))
}
