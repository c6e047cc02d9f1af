//! Hidden-path matching for the full trace view.

use regex::Regex;

use crate::error::Error;
use crate::tree::Node;

/// A rule path to leave out of the full trace view.
///
/// Patterns are matched against a node's [full path](Node::full_path), e.g.
/// `/expr/term/number`.
#[derive(Debug, Clone)]
pub enum HiddenPath {
    /// A regex fragment that must match one or more whole path segments.
    ///
    /// `"ws"` hides every `ws` invocation together with everything it calls,
    /// since their paths all contain the `ws` segment; `"primary/.*"` hides
    /// what `primary` calls but not `primary` itself.
    Rule(String),
    /// A regex applied to the full path as is.
    Pattern(Regex),
}

impl From<&str> for HiddenPath {
    fn from(fragment: &str) -> Self {
        HiddenPath::Rule(fragment.to_string())
    }
}

impl From<String> for HiddenPath {
    fn from(fragment: String) -> Self {
        HiddenPath::Rule(fragment)
    }
}

impl From<Regex> for HiddenPath {
    fn from(pattern: Regex) -> Self {
        HiddenPath::Pattern(pattern)
    }
}

impl HiddenPath {
    fn compile(&self) -> Result<Regex, Error> {
        match self {
            HiddenPath::Pattern(pattern) => Ok(pattern.clone()),
            HiddenPath::Rule(fragment) => Regex::new(&format!("(^|/)(?:{fragment})(/|$)"))
                .map_err(|source| Error::InvalidHiddenPath {
                    pattern: fragment.clone(),
                    source,
                }),
        }
    }
}

/// Compiled set of hidden paths.
#[derive(Debug, Clone, Default)]
pub struct HiddenPaths {
    patterns: Vec<Regex>,
}

impl HiddenPaths {
    pub fn compile<'a, I>(paths: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a HiddenPath>,
    {
        let patterns = paths
            .into_iter()
            .map(HiddenPath::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern matches `full_path`.
    pub fn matches(&self, full_path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(full_path))
    }

    pub fn is_hidden(&self, node: &Node) -> bool {
        !self.is_empty() && self.matches(&node.full_path())
    }
}
