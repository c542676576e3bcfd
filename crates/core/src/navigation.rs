//! Slide navigation state.
//!
//! The deck's embedded script keeps `{ currentSlide, totalSlides }` and moves
//! between slides with clamped steps. [`Navigator`] is the same state machine
//! on the Rust side; the assembler uses it to render the controls' initial
//! state so the static markup matches what the script shows after load.

/// Keyboard and button actions understood by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// `ArrowLeft` or the previous button.
    Previous,
    /// `ArrowRight`, space or the next button.
    Next,
    /// `f` / `F`; toggles fullscreen and leaves the slide unchanged.
    ToggleFullscreen,
}

impl NavAction {
    /// Map a `KeyboardEvent.key` value to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavAction::Previous),
            "ArrowRight" | " " => Some(NavAction::Next),
            "f" | "F" => Some(NavAction::ToggleFullscreen),
            _ => None,
        }
    }
}

/// Current slide position within a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    total: usize,
}

impl Navigator {
    /// Start at the first slide of a deck with `total` slides.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// 0-based index of the active slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides in the deck.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Move to `target`, clamped to the deck.
    pub fn show(self, target: isize) -> Self {
        let last = self.total.saturating_sub(1) as isize;
        let current = target.clamp(0, last) as usize;
        Self { current, ..self }
    }

    /// Step one slide forward, stopping at the last slide.
    pub fn next(self) -> Self {
        self.show(self.current as isize + 1)
    }

    /// Step one slide back, stopping at the first slide.
    pub fn previous(self) -> Self {
        self.show(self.current as isize - 1)
    }

    /// Apply an action.
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Previous => self.previous(),
            NavAction::Next => self.next(),
            NavAction::ToggleFullscreen => self,
        }
    }

    /// Whether the slide at `index` is the active one.
    pub fn is_active(&self, index: usize) -> bool {
        self.total > 0 && index == self.current
    }

    /// Counter text, e.g. `2 / 5`. An empty deck reads `0 / 0`.
    pub fn counter_text(&self) -> String {
        if self.total == 0 {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.current + 1, self.total)
        }
    }

    /// Whether the previous control is disabled.
    pub fn previous_disabled(&self) -> bool {
        self.current == 0
    }

    /// Whether the next control is disabled.
    pub fn next_disabled(&self) -> bool {
        self.current + 1 >= self.total
    }
}
