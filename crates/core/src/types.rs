//! Domain types for slide sources and rendered slides.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A request to build a deck, as received from a caller surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationRequest {
    /// Delimited Markdown source for the whole deck.
    pub raw_text: String,

    /// Theme catalog name, e.g. "Moderne Sombre".
    pub theme_name: String,

    /// Transition catalog name, e.g. "Fade".
    pub transition_name: String,
}

impl PresentationRequest {
    /// Create a new request.
    pub fn new(
        raw_text: impl Into<String>,
        theme_name: impl Into<String>,
        transition_name: impl Into<String>,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            theme_name: theme_name.into(),
            transition_name: transition_name.into(),
        }
    }

    /// Caller-level validation: reject input with no visible content.
    pub fn validate(&self) -> Result<()> {
        if self.raw_text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(())
    }
}

/// One slide's Markdown source, as cut out of the deck by the splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// 0-based position in the deck.
    pub index: usize,

    /// Trimmed, non-empty Markdown source.
    pub source: String,
}

impl Slide {
    /// Create a new slide.
    pub fn new(index: usize, source: impl Into<String>) -> Self {
        Self {
            index,
            source: source.into(),
        }
    }
}

/// HTML fragment produced for one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSlide {
    /// Same index as the source slide.
    pub index: usize,

    /// HTML fragment, math restored verbatim.
    pub html: String,

    /// True when the slide could not be rendered and holds escaped source instead.
    pub fallback: bool,
}

impl RenderedSlide {
    /// Create a normally rendered slide.
    pub fn new(index: usize, html: impl Into<String>) -> Self {
        Self {
            index,
            html: html.into(),
            fallback: false,
        }
    }

    /// Create a fallback slide holding escaped source text.
    pub fn fallback(index: usize, html: impl Into<String>) -> Self {
        Self {
            index,
            html: html.into(),
            fallback: true,
        }
    }

    /// Stable element id used for this slide's container.
    pub fn element_id(&self) -> String {
        slide_element_id(self.index)
    }
}

/// Ensure at least one slide survived splitting.
pub fn ensure_slides(slides: &[Slide]) -> Result<()> {
    if slides.is_empty() {
        Err(Error::EmptyInput)
    } else {
        Ok(())
    }
}

fn slide_element_id(index: usize) -> String {
    format!("slide-{}", index)
}
