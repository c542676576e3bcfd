//! Theme and transition catalogs.
//!
//! Both catalogs are closed: names are matched exactly (case included) and an
//! unknown name is an error rather than a fallback to some default look.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The four color roles a theme provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    /// Page background.
    pub background: &'static str,
    /// Body and heading text.
    pub text: &'static str,
    /// Slide card background.
    pub accent: &'static str,
    /// Inline code, table borders and navigation buttons.
    pub highlight: &'static str,
}

/// A named theme from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    ModerneSombre,
    ClassiqueClair,
    Minimaliste,
    Professionnel,
}

impl Theme {
    /// Every theme, in catalog order.
    pub const ALL: [Theme; 4] = [
        Theme::ModerneSombre,
        Theme::ClassiqueClair,
        Theme::Minimaliste,
        Theme::Professionnel,
    ];

    /// Catalog name shown to users.
    pub fn name(self) -> &'static str {
        match self {
            Theme::ModerneSombre => "Moderne Sombre",
            Theme::ClassiqueClair => "Classique Clair",
            Theme::Minimaliste => "Minimaliste",
            Theme::Professionnel => "Professionnel",
        }
    }

    /// Colors for this theme.
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::ModerneSombre => ThemeColors {
                background: "#1a1a2e",
                text: "#eee",
                accent: "#0f3460",
                highlight: "#16213e",
            },
            Theme::ClassiqueClair => ThemeColors {
                background: "#ffffff",
                text: "#333",
                accent: "#f0f0f0",
                highlight: "#e8e8e8",
            },
            Theme::Minimaliste => ThemeColors {
                background: "#fafafa",
                text: "#2c3e50",
                accent: "#ecf0f1",
                highlight: "#bdc3c7",
            },
            Theme::Professionnel => ThemeColors {
                background: "#2c3e50",
                text: "#ecf0f1",
                accent: "#34495e",
                highlight: "#3498db",
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::ModerneSombre
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == name)
            .ok_or_else(|| Error::UnknownTheme(name.to_string()))
    }
}

/// A named slide transition from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    Slide,
    Fade,
    None,
}

impl Transition {
    /// Every transition, in catalog order.
    pub const ALL: [Transition; 3] = [Transition::Slide, Transition::Fade, Transition::None];

    /// Catalog name shown to users.
    pub fn name(self) -> &'static str {
        match self {
            Transition::Slide => "Slide",
            Transition::Fade => "Fade",
            Transition::None => "None",
        }
    }

    /// Value for the CSS `transition` property of a slide.
    pub fn descriptor(self) -> &'static str {
        match self {
            Transition::Slide => "transform 0.5s ease-in-out",
            Transition::Fade => "opacity 0.5s ease-in-out",
            Transition::None => "none",
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Transition::Slide
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transition {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Transition::ALL
            .into_iter()
            .find(|transition| transition.name() == name)
            .ok_or_else(|| Error::UnknownTransition(name.to_string()))
    }
}

/// Look up a theme's colors by catalog name.
pub fn resolve_theme(name: &str) -> Result<ThemeColors> {
    name.parse::<Theme>().map(Theme::colors)
}

/// Look up a transition descriptor by catalog name.
pub fn resolve_transition(name: &str) -> Result<&'static str> {
    name.parse::<Transition>().map(Transition::descriptor)
}
