//! ASCII flow-graph layout.
//!
//! The renderer walks a pre-order node list from the end, so every node is
//! drawn after all of its descendants. Each lineage occupies a column; when
//! a node is reached, the columns of its children fold into the leftmost of
//! them with diagonal merge rows and the node takes that column over.
//!
//! ```text
//! x 1:5-1:5 digit
//! | x 1:3-1:3 paren
//! | |
//! |/
//! x 1:1-1:1 expr
//! ```

use tracing::debug;

use crate::style::{Color, Style, Styler};
use crate::tree::{NodeId, NodeState};

/// Column colors, assigned by column index when a lineage starts.
pub const LINEAGE_PALETTE: [Style; 5] = [
    Style::fg(Color::Yellow),
    Style::fg(Color::Magenta),
    Style::fg(Color::Blue),
    Style::fg(Color::White),
    Style::fg(Color::Green),
];

/// A resolved node as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub state: NodeState,
}

#[derive(Debug, Clone, Copy)]
struct Column {
    parent: Option<NodeId>,
    state: NodeState,
    style: Style,
}

/// Lays out node lists as multi-column ASCII diagrams.
#[derive(Debug, Clone, Copy)]
pub struct FlowGraph {
    styler: Styler,
    spacer_rows: bool,
}

impl FlowGraph {
    pub const fn new(styler: Styler) -> Self {
        Self {
            styler,
            spacer_rows: false,
        }
    }

    /// Emits a bars-only row between consecutive nodes, for labels too short
    /// to show the columns running past them.
    #[must_use]
    pub const fn with_spacer_rows(mut self, enabled: bool) -> Self {
        self.spacer_rows = enabled;
        self
    }

    /// Renders `nodes`, last to first. `label` returns the text lines shown
    /// next to a node's glyph.
    pub fn render<F>(&self, nodes: &[GraphNode], mut label: F) -> Vec<String>
    where
        F: FnMut(&GraphNode) -> Vec<String>,
    {
        let mut columns: Vec<Column> = Vec::new();
        let mut rows = Vec::new();

        for (step, node) in nodes.iter().rev().enumerate() {
            let is_last = step + 1 == nodes.len();
            let converging: Vec<usize> = columns
                .iter()
                .enumerate()
                .filter(|(_, column)| column.parent == Some(node.id))
                .map(|(idx, _)| idx)
                .collect();

            match converging.split_first() {
                None => {
                    let column = columns.len();
                    columns.push(Column {
                        parent: node.parent,
                        state: node.state,
                        style: LINEAGE_PALETTE[column % LINEAGE_PALETTE.len()],
                    });
                    self.state_rows(&mut rows, &columns, Some(column), label(node), false);
                }
                Some((&column, merged)) => {
                    let mut merged = merged.to_vec();
                    while !merged.is_empty() {
                        let from = merged.remove(0);
                        rows.extend(self.merge_rows(from, column, &columns));
                        columns.remove(from);
                        for later in merged.iter_mut().filter(|idx| **idx > from) {
                            *later -= 1;
                        }
                    }

                    let style = columns[column].style;
                    columns[column] = Column {
                        parent: node.parent,
                        state: node.state,
                        style,
                    };
                    self.state_rows(&mut rows, &columns, Some(column), label(node), is_last);
                }
            }

            if self.spacer_rows && !is_last {
                self.state_rows(&mut rows, &columns, None, Vec::new(), false);
            }
        }

        debug!(nodes = nodes.len(), rows = rows.len(), "rendered flow graph");
        rows
    }

    fn state_rows(
        &self,
        rows: &mut Vec<String>,
        columns: &[Column],
        column: Option<usize>,
        contents: Vec<String>,
        is_last: bool,
    ) {
        let mut contents = contents.into_iter();
        match contents.next() {
            None => rows.push(self.state_line(columns, column, is_last)),
            Some(first) => {
                rows.push(self.state_line(columns, column, is_last) + &first);
                for line in contents {
                    rows.push(self.state_line(columns, None, is_last) + &line);
                }
            }
        }
    }

    fn state_line(&self, columns: &[Column], column: Option<usize>, is_last: bool) -> String {
        let bar = if is_last { "  " } else { "| " };
        columns
            .iter()
            .enumerate()
            .map(|(idx, col)| {
                if column == Some(idx) {
                    self.styler.paint(col.state.glyph(), col.state.style())
                } else {
                    self.styler.paint(bar, col.style)
                }
            })
            .collect()
    }

    /// Two rows folding column `from` into column `to` (`to < from`).
    fn merge_rows(&self, from: usize, to: usize, columns: &[Column]) -> [String; 2] {
        let paint = |text: &str, idx: usize| self.styler.paint(text, columns[idx].style);
        let n = columns.len();

        let top = (0..n)
            .map(|i| {
                if i <= to {
                    paint("| ", i)
                } else if i + 1 < from {
                    paint("|", i) + &paint("_", from)
                } else if i + 1 == from {
                    paint("|", i) + &paint("/", from)
                } else if i > from || (i == from && to + 1 == from) {
                    paint("| ", i)
                } else {
                    "  ".to_string()
                }
            })
            .collect();

        let bottom = (0..n)
            .map(|i| {
                if i < to {
                    paint("| ", i)
                } else if i == to {
                    paint("|", i) + &paint("/", from)
                } else if i < from {
                    paint("| ", i)
                } else if i + 1 < n {
                    paint(" /", i + 1)
                } else {
                    "  ".to_string()
                }
            })
            .collect();

        [top, bottom]
    }
}
