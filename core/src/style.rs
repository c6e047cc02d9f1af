//! ANSI SGR styling for terminal output.
//!
//! A [`Style`] combines an optional foreground [`Color`], background
//! [`Color`] and [`Attribute`]. A [`Styler`] applies styles to text, or
//! passes text through unchanged when color output is disabled.

use crate::text;

/// One of the eight basic terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    #[must_use]
    pub const fn foreground_code(self) -> u8 {
        30 + self.index()
    }

    #[must_use]
    pub const fn background_code(self) -> u8 {
        40 + self.index()
    }

    const fn index(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
        }
    }
}

/// A text attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Thin,
    Underline,
    Blink,
    Reverse,
    Invisible,
}

impl Attribute {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Thin => 2,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::Reverse => 7,
            Attribute::Invisible => 8,
        }
    }
}

/// A composable text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub attribute: Option<Attribute>,
}

impl Style {
    /// The style that changes nothing.
    pub const PLAIN: Self = Self {
        color: None,
        background: None,
        attribute: None,
    };

    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self::PLAIN.with_color(color)
    }

    #[must_use]
    pub const fn attr(attribute: Attribute) -> Self {
        Self::PLAIN.with_attribute(attribute)
    }

    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub const fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.color.is_none() && self.background.is_none() && self.attribute.is_none()
    }

    /// SGR parameter list, e.g. `"33;1"`.
    pub fn sgr_params(&self) -> String {
        let codes = [
            self.color.map(Color::foreground_code),
            self.background.map(Color::background_code),
            self.attribute.map(Attribute::code),
        ];
        codes
            .iter()
            .flatten()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(";")
    }
}

const RESET: &str = "\x1b[0m";

/// Applies styles to text when color output is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Styler {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A styler that never emits escape sequences.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps the whole of `text` in `style`.
    pub fn paint(&self, text: &str, style: Style) -> String {
        if !self.enabled || style.is_plain() {
            return text.to_string();
        }
        format!("\x1b[{}m{}{}", style.sgr_params(), text, RESET)
    }

    /// Wraps the chars `[start, end)` of `text` in `style`.
    ///
    /// `end` of `None` extends to the end of the text. Both bounds clamp to
    /// the text length.
    pub fn paint_range(&self, text: &str, style: Style, start: usize, end: Option<usize>) -> String {
        if !self.enabled || style.is_plain() {
            return text.to_string();
        }
        let end = end.unwrap_or(usize::MAX);
        let (head, body, tail) = text::split3(text, start, end);
        format!(
            "{}\x1b[{}m{}{}{}",
            head,
            style.sgr_params(),
            body,
            RESET,
            tail
        )
    }
}
