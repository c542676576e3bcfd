//! Error types for slide deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning Markdown into a slide deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Theme name is not part of the theme catalog.
    #[error("Unknown option: theme '{0}' is not in the catalog")]
    UnknownTheme(String),

    /// Transition name is not part of the transition catalog.
    #[error("Unknown option: transition '{0}' is not in the catalog")]
    UnknownTransition(String),

    /// A single slide could not be rendered. Recovered locally by the renderer.
    #[error("Markdown rendering error on slide {index}: {reason}")]
    MarkdownRender { index: usize, reason: String },

    /// No slide content survived splitting.
    #[error("No slide content: input is empty or contains only delimiters")]
    EmptyInput,
}

impl Error {
    /// Whether this error comes from an unknown theme or transition name.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::UnknownTheme(_) | Error::UnknownTransition(_))
    }
}
