//! WASM-compatible wrapper for slide deck generation.
//!
//! This crate exposes the deck pipeline to JavaScript so a page can offer the
//! form (text, theme, transition), generate the deck and download it.

use mdslides_core::{
    ensure_slides, split_slides, DocumentAssembler, MarkdownRenderer, PresentationRequest, Theme,
    Transition, DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of generating a deck.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResult {
    /// The complete HTML document.
    pub html: String,
    /// Number of slides in the deck.
    pub slide_count: usize,
    /// Indices of slides shown as escaped source because rendering failed.
    pub fallback_slides: Vec<usize>,
    /// Suggested download file name.
    pub file_name: String,
    /// MIME type for the download.
    pub mime_type: String,
}

/// Generate a slide deck.
///
/// # Arguments
/// * `markdown` - Deck source, slides separated by `===` lines
/// * `theme` - Theme name from `theme_names()`
/// * `transition` - Transition name from `transition_names()`
///
/// # Returns
/// A JavaScript object with the generation result, or throws on error.
#[wasm_bindgen]
pub fn generate_presentation(
    markdown: &str,
    theme: &str,
    transition: &str,
) -> Result<JsValue, JsValue> {
    let result =
        generate_presentation_impl(markdown, theme, transition).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn generate_presentation_impl(
    markdown: &str,
    theme: &str,
    transition: &str,
) -> Result<GenerationResult, String> {
    let request = PresentationRequest::new(markdown, theme, transition);

    let theme: Theme = request.theme_name.parse().map_err(|e| format!("{}", e))?;
    let transition: Transition = request
        .transition_name
        .parse()
        .map_err(|e| format!("{}", e))?;

    request.validate().map_err(|e| format!("{}", e))?;
    let slides = split_slides(&request.raw_text);
    ensure_slides(&slides).map_err(|e| format!("{}", e))?;

    let rendered = MarkdownRenderer::new().render_all(&slides);
    let fallback_slides = rendered
        .iter()
        .filter(|s| s.fallback)
        .map(|s| s.index)
        .collect();

    Ok(GenerationResult {
        html: DocumentAssembler::for_catalog(theme, transition).assemble(&rendered),
        slide_count: rendered.len(),
        fallback_slides,
        file_name: DOWNLOAD_FILE_NAME.to_string(),
        mime_type: DOWNLOAD_MIME_TYPE.to_string(),
    })
}

/// Theme names for a selector, in catalog order.
#[wasm_bindgen]
pub fn theme_names() -> js_sys::Array {
    Theme::ALL
        .iter()
        .map(|theme| JsValue::from_str(theme.name()))
        .collect()
}

/// Transition names for a selector, in catalog order.
#[wasm_bindgen]
pub fn transition_names() -> js_sys::Array {
    Transition::ALL
        .iter()
        .map(|transition| JsValue::from_str(transition.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_presentation() {
        let result =
            generate_presentation_impl("# One\n===\n# Two", "Professionnel", "Slide").unwrap();

        assert_eq!(result.slide_count, 2);
        assert!(result.fallback_slides.is_empty());
        assert_eq!(result.file_name, "presentation.html");
        assert_eq!(result.mime_type, "text/html");
        assert!(result.html.contains("background: #2c3e50;"));
    }

    #[test]
    fn test_rejects_unknown_options() {
        let err = generate_presentation_impl("# One", "Sombre", "Slide").unwrap_err();
        assert!(err.contains("'Sombre'"));

        let err = generate_presentation_impl("# One", "Minimaliste", "Zoom").unwrap_err();
        assert!(err.contains("'Zoom'"));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(generate_presentation_impl("", "Minimaliste", "Fade").is_err());
        assert!(generate_presentation_impl("\n===\n", "Minimaliste", "Fade").is_err());
    }
}
