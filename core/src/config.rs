//! Tracer configuration.
//!
//! # Example
//!
//! ```ignore
//! use tracegraph_core::config::TracerConfig;
//!
//! // Colored output, six source lines per excerpt.
//! let config = TracerConfig::default();
//!
//! // Plain output without excerpts, hiding whitespace rules.
//! let config = TracerConfig::new()
//!     .with_color(false)
//!     .with_source(false)
//!     .hide("ws");
//! ```

use crate::hidden::HiddenPath;
use crate::quoter::MIN_QUOTED_LINES;

/// Configuration for a [`Tracer`](crate::Tracer).
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `hidden_paths` | none |
/// | `use_color` | `true` |
/// | `max_source_lines` | 6 |
/// | `show_source` | `true` |
/// | `show_trace` | `false` |
/// | `show_full_path` | `false` |
/// | `max_path_length` | 64 |
#[derive(Debug, Clone)]
pub struct TracerConfig {
    /// Paths left out of the full trace view. The backtrace view ignores
    /// them so that no failure path is ever concealed.
    pub hidden_paths: Vec<HiddenPath>,

    /// Emit ANSI color sequences.
    pub use_color: bool,

    /// Longest source excerpt, in lines, before the middle is elided.
    ///
    /// Values below 3 behave as 3.
    pub max_source_lines: usize,

    /// Quote the source range under each node.
    pub show_source: bool,

    /// Write a live log line for every event as it arrives.
    pub show_trace: bool,

    /// Label nodes with their full rule path instead of the rule name.
    pub show_full_path: bool,

    /// Paths longer than this are truncated from the front. 0 disables
    /// truncation.
    pub max_path_length: usize,
}

impl Default for TracerConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TracerConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        hidden_paths: Vec::new(),
        use_color: true,
        max_source_lines: 6,
        show_source: true,
        show_trace: false,
        show_full_path: false,
        max_path_length: 64,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Adds one hidden path.
    #[must_use]
    pub fn hide(mut self, path: impl Into<HiddenPath>) -> Self {
        self.hidden_paths.push(path.into());
        self
    }

    /// Replaces the hidden paths.
    #[must_use]
    pub fn with_hidden_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<HiddenPath>,
    {
        self.hidden_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.use_color = enabled;
        self
    }

    #[must_use]
    pub fn with_max_source_lines(mut self, lines: usize) -> Self {
        self.max_source_lines = lines;
        self
    }

    #[must_use]
    pub fn with_source(mut self, enabled: bool) -> Self {
        self.show_source = enabled;
        self
    }

    #[must_use]
    pub fn with_live_trace(mut self, enabled: bool) -> Self {
        self.show_trace = enabled;
        self
    }

    #[must_use]
    pub fn with_full_path(mut self, enabled: bool) -> Self {
        self.show_full_path = enabled;
        self
    }

    #[must_use]
    pub fn with_max_path_length(mut self, length: usize) -> Self {
        self.max_path_length = length;
        self
    }

    /// `max_source_lines` raised to the smallest supported excerpt.
    #[inline]
    pub fn effective_max_source_lines(&self) -> usize {
        self.max_source_lines.max(MIN_QUOTED_LINES)
    }
}
