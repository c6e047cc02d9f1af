//! The call tree built from a parser's trace stream.
//!
//! [`TraceTree`] is a push-down automaton over trace events: `enter` pushes a
//! new pending [`Node`] below the current one, `match`/`fail` resolve the
//! current node and pop back to its parent. Nodes live in an arena and refer
//! to each other by [`NodeId`]; a node's parent link is used for ancestry
//! queries only.
//!
//! The tree also tracks the furthest-failure [`Frontier`]: the failed nodes
//! whose range starts at the largest offset any failure reached. Those nodes
//! seed the backtrace view.
//!
//! # Example
//!
//! ```ignore
//! let mut tree = TraceTree::new();
//! tree.enter("expr", loc);
//! tree.enter("number", loc);
//! tree.failed("number", loc)?;
//! tree.failed("expr", loc)?;
//!
//! let backtrace = tree.graph_nodes(View::Failure, |_| false);
//! ```

use tracing::{debug, trace};

use crate::error::Error;
use crate::event::{EventKind, Location, TraceEvent};
use crate::graph::GraphNode;
use crate::style::{Color, Style};

/// Index of a node in a [`TraceTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The sentinel root every trace starts from.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Self(idx)
    }
}

/// Resolution state of a rule invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeState {
    Pending,
    Matched,
    Failed,
}

impl NodeState {
    /// Glyph drawn in the flow graph at the node's column.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            NodeState::Pending => "? ",
            NodeState::Matched => "o ",
            NodeState::Failed => "x ",
        }
    }

    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            NodeState::Pending => Style::fg(Color::Yellow),
            NodeState::Matched => Style::fg(Color::Green),
            NodeState::Failed => Style::fg(Color::Red),
        }
    }
}

/// One rule invocation.
#[derive(Debug, Clone)]
pub struct Node {
    path: String,
    rule: String,
    location: Location,
    state: NodeState,
    matched: Vec<NodeId>,
    failed: Vec<NodeId>,
    sequence: usize,
    parent: Option<NodeId>,
}

impl Node {
    fn root() -> Self {
        Self {
            path: String::new(),
            rule: String::new(),
            location: Location::default(),
            state: NodeState::Pending,
            matched: Vec::new(),
            failed: Vec::new(),
            sequence: 0,
            parent: None,
        }
    }

    /// Ancestor rule names, each followed by `/`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// `path` followed by `rule`; the string hidden paths are matched against.
    pub fn full_path(&self) -> String {
        format!("{}{}", self.path, self.rule)
    }

    /// The range from the enter event, replaced by the resolving event's.
    #[inline]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Children that matched, in resolution order.
    #[inline]
    pub fn matched(&self) -> &[NodeId] {
        &self.matched
    }

    /// Children that failed, in resolution order.
    #[inline]
    pub fn failed(&self) -> &[NodeId] {
        &self.failed
    }

    /// Creation order; the root is 0 and the first entered rule is 1.
    #[inline]
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.matched.iter().chain(&self.failed).copied()
    }

    /// Whether `other` sits directly below this node's call site.
    pub fn is_direct_parent_of(&self, other: &Node) -> bool {
        other.path.len() == self.path.len() + self.rule.len() + 1
            && other
                .path
                .strip_prefix(self.path.as_str())
                .and_then(|rest| rest.strip_prefix(self.rule.as_str()))
                == Some("/")
    }

    /// Whether both nodes invoke the same rule from the same call site.
    pub fn same_site(&self, other: &Node) -> bool {
        self.path == other.path && self.rule == other.rule
    }
}

/// Failed nodes at the furthest failure offset seen so far.
///
/// A failure at the current offset is not recorded when a member already
/// covers it: either the member is its direct child or both invoke the same
/// rule from the same call site. Members are never removed except when a
/// failure further into the source resets the set, so a coarser entry
/// recorded before its child stays in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    offset: usize,
    members: Vec<NodeId>,
}

impl Frontier {
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    fn record(&mut self, nodes: &[Node], id: NodeId) {
        let node = &nodes[id.0];
        let offset = node.location.start.offset;

        if offset > self.offset {
            debug!(offset, rule = %node.rule, "failure frontier advanced");
            self.offset = offset;
            self.members.clear();
            self.members.push(id);
        } else if offset == self.offset {
            let covered = self.members.iter().rev().any(|&member| {
                let member = &nodes[member.0];
                node.is_direct_parent_of(member) || node.same_site(member)
            });
            if !covered {
                self.members.push(id);
            }
        }
    }
}

/// Which nodes a rendered view keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Every resolved node except hidden ones.
    Full,
    /// Only paths leading to the failure frontier; hidden paths are ignored.
    Failure,
}

/// One entry of a [`PrunedTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedNode {
    pub id: NodeId,
    /// Indices of the surviving children within the pruned tree.
    pub children: Vec<usize>,
}

/// A pruned copy of the call tree, stored flat in pre-order.
///
/// Entry 0 is the root; every other entry comes after the entry it hangs
/// under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedTree {
    entries: Vec<PrunedNode>,
}

impl PrunedTree {
    #[inline]
    pub fn root(&self) -> &PrunedNode {
        &self.entries[0]
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&PrunedNode> {
        self.entries.get(idx)
    }

    /// Number of entries, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in pre-order, root first.
    pub fn iter(&self) -> impl Iterator<Item = &PrunedNode> {
        self.entries.iter()
    }
}

/// The call tree of one trace.
#[derive(Debug, Clone)]
pub struct TraceTree {
    nodes: Vec<Node>,
    current: NodeId,
    depth: usize,
    frontier: Frontier,
}

impl Default for TraceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            current: NodeId::ROOT,
            depth: 0,
            frontier: Frontier::default(),
        }
    }

    /// Discards every node and returns to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    /// The node for `id`.
    ///
    /// # Panics
    ///
    /// If `id` was not issued by this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// The innermost pending node, or the root.
    #[inline]
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Number of pending rules.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of entered rules, excluding the root.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entered nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, node)| (NodeId(idx), node))
    }

    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Applies one event.
    pub fn apply(&mut self, event: &TraceEvent) -> Result<NodeId, Error> {
        match event.kind {
            EventKind::Enter => Ok(self.enter(event.rule.as_str(), event.location)),
            EventKind::Match | EventKind::Fail => {
                self.resolve(event.kind, &event.rule, event.location)
            }
        }
    }

    /// Starts a pending invocation of `rule` below the current node.
    pub fn enter(&mut self, rule: impl Into<String>, location: Location) -> NodeId {
        let id = NodeId(self.nodes.len());
        let current = &self.nodes[self.current.0];
        let node = Node {
            path: format!("{}{}/", current.path, current.rule),
            rule: rule.into(),
            location,
            state: NodeState::Pending,
            matched: Vec::new(),
            failed: Vec::new(),
            sequence: id.0,
            parent: Some(self.current),
        };
        trace!(rule = %node.rule, sequence = id.0, depth = self.depth, "enter");

        self.nodes.push(node);
        self.current = id;
        self.depth += 1;
        id
    }

    /// Resolves the current node as matched.
    pub fn matched(&mut self, rule: &str, location: Location) -> Result<NodeId, Error> {
        self.resolve(EventKind::Match, rule, location)
    }

    /// Resolves the current node as failed.
    pub fn failed(&mut self, rule: &str, location: Location) -> Result<NodeId, Error> {
        self.resolve(EventKind::Fail, rule, location)
    }

    fn resolve(&mut self, kind: EventKind, rule: &str, location: Location) -> Result<NodeId, Error> {
        let id = self.current;
        let node = &self.nodes[id.0];
        let Some(parent) = node.parent else {
            return Err(Error::UnbalancedEvent {
                kind,
                rule: rule.to_string(),
            });
        };
        if node.rule != rule {
            return Err(Error::RuleMismatch {
                kind,
                expected: node.rule.clone(),
                found: rule.to_string(),
            });
        }

        let state = if kind == EventKind::Match {
            NodeState::Matched
        } else {
            NodeState::Failed
        };
        let node = &mut self.nodes[id.0];
        node.state = state;
        node.location = location;

        let siblings = &mut self.nodes[parent.0];
        if state == NodeState::Matched {
            siblings.matched.push(id);
        } else {
            siblings.failed.push(id);
            self.frontier.record(&self.nodes, id);
        }

        self.current = parent;
        self.depth -= 1;
        trace!(rule, sequence = id.0, depth = self.depth, %kind, "resolve");
        Ok(id)
    }

    /// Prunes the tree for `view`.
    ///
    /// Children are visited matched-first. In the full view a node for which
    /// `is_hidden` holds is dropped and its own surviving children take its
    /// place under the nearest visible ancestor. In the failure view a node
    /// survives only if a descendant does or it is a frontier member, so the
    /// whole tree, root included, may prune away.
    ///
    /// Both passes walk the arena with explicit worklists; nesting depth is
    /// bounded by memory only.
    pub fn extract<F>(&self, view: View, is_hidden: F) -> Option<PrunedTree>
    where
        F: Fn(&Node) -> bool,
    {
        let survives = match view {
            View::Full => None,
            View::Failure => {
                let survives = self.failure_survivors();
                if !survives[NodeId::ROOT.0] {
                    return None;
                }
                Some(survives)
            }
        };

        let mut entries = vec![PrunedNode {
            id: NodeId::ROOT,
            children: Vec::new(),
        }];
        // (arena id, index of the pruned entry it hangs under)
        let mut pending: Vec<(NodeId, usize)> = Vec::new();
        push_children(&mut pending, self.root(), 0);

        while let Some((id, under)) = pending.pop() {
            let node = &self.nodes[id.0];
            match &survives {
                None if is_hidden(node) => {
                    push_children(&mut pending, node, under);
                    continue;
                }
                Some(survives) if !survives[id.0] => continue,
                _ => {}
            }

            let idx = entries.len();
            entries[under].children.push(idx);
            entries.push(PrunedNode {
                id,
                children: Vec::new(),
            });
            push_children(&mut pending, node, idx);
        }

        Some(PrunedTree { entries })
    }

    /// Per arena slot, whether the node keeps a place in the failure view.
    ///
    /// Children are always created after their parent, so one pass from the
    /// highest id down sees every child before its parent.
    fn failure_survivors(&self) -> Vec<bool> {
        let mut survives = vec![false; self.nodes.len()];
        for member in self.frontier.members() {
            survives[member.0] = true;
        }
        for idx in (0..self.nodes.len()).rev() {
            if !survives[idx] {
                let keep = self.nodes[idx].children().any(|child| survives[child.0]);
                survives[idx] = keep;
            }
        }
        survives
    }

    /// Pre-order list of a pruned tree for the flow-graph renderer, the
    /// pruned root itself excluded.
    ///
    /// Each entry's parent is the node's parent in the arena, whatever the
    /// pruning left out. A child spliced up from a hidden node keeps the
    /// hidden node as its parent, so its column never folds into the
    /// visible ancestor's.
    pub fn flatten(&self, pruned: &PrunedTree) -> Vec<GraphNode> {
        pruned
            .iter()
            .skip(1)
            .map(|entry| {
                let node = &self.nodes[entry.id.0];
                GraphNode {
                    id: entry.id,
                    parent: node.parent,
                    state: node.state,
                }
            })
            .collect()
    }

    /// [`extract`](Self::extract) followed by [`flatten`](Self::flatten).
    pub fn graph_nodes<F>(&self, view: View, is_hidden: F) -> Vec<GraphNode>
    where
        F: Fn(&Node) -> bool,
    {
        self.extract(view, is_hidden)
            .map(|pruned| self.flatten(&pruned))
            .unwrap_or_default()
    }
}

/// Queues `node`'s children so they pop matched-first, in resolution order.
fn push_children(pending: &mut Vec<(NodeId, usize)>, node: &Node, under: usize) {
    let start = pending.len();
    pending.extend(node.children().map(|child| (child, under)));
    pending[start..].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: usize) -> Location {
        Location::on_first_line(offset, offset)
    }

    fn rules(tree: &TraceTree, nodes: &[GraphNode]) -> Vec<String> {
        nodes
            .iter()
            .map(|n| tree.node(n.id).rule().to_string())
            .collect()
    }

    #[test]
    fn test_paths_and_sequences() {
        let mut tree = TraceTree::new();
        let a = tree.enter("A", at(0));
        let b = tree.enter("B", at(0));
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.node(a).path(), "/");
        assert_eq!(tree.node(b).path(), "/A/");
        assert_eq!(tree.node(b).full_path(), "/A/B");
        assert_eq!(tree.node(a).sequence(), 1);
        assert_eq!(tree.node(b).sequence(), 2);
        assert_eq!(tree.node(b).parent(), Some(a));
        assert_eq!(tree.current(), b);
    }

    #[test]
    fn test_resolution_records_children_and_state() {
        let mut tree = TraceTree::new();
        let a = tree.enter("A", at(0));
        let b = tree.enter("B", at(0));
        tree.matched("B", Location::on_first_line(0, 2)).unwrap();
        let c = tree.enter("C", at(2));
        tree.failed("C", at(2)).unwrap();
        tree.matched("A", Location::on_first_line(0, 2)).unwrap();

        assert_eq!(tree.node(a).matched(), [b]);
        assert_eq!(tree.node(a).failed(), [c]);
        assert_eq!(tree.node(b).state(), NodeState::Matched);
        assert_eq!(tree.node(b).location().end.offset, 2);
        assert_eq!(tree.node(c).state(), NodeState::Failed);
        assert_eq!(tree.root().matched(), [a]);
        assert_eq!(tree.current(), NodeId::ROOT);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_resolving_root_is_an_error() {
        let mut tree = TraceTree::new();
        let err = tree.failed("A", at(0)).unwrap_err();
        assert!(matches!(err, Error::UnbalancedEvent { kind: EventKind::Fail, .. }));
        assert!(tree.root().failed().is_empty());
    }

    #[test]
    fn test_rule_mismatch_is_an_error() {
        let mut tree = TraceTree::new();
        tree.enter("A", at(0));
        let err = tree.matched("B", at(0)).unwrap_err();
        assert!(matches!(err, Error::RuleMismatch { ref expected, .. } if expected == "A"));
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_frontier_suppresses_direct_parent() {
        let mut tree = TraceTree::new();
        tree.enter("A", at(0));
        let b = tree.enter("B", at(0));
        tree.failed("B", at(0)).unwrap();
        tree.failed("A", at(0)).unwrap();
        assert_eq!(tree.frontier().members(), [b]);
    }

    #[test]
    fn test_frontier_resets_on_further_failure() {
        let mut tree = TraceTree::new();
        tree.enter("A", at(1));
        tree.failed("A", at(1)).unwrap();
        let b = tree.enter("B", at(4));
        tree.failed("B", at(4)).unwrap();
        tree.enter("C", at(2));
        tree.failed("C", at(2)).unwrap();
        assert_eq!(tree.frontier().offset(), 4);
        assert_eq!(tree.frontier().members(), [b]);
    }

    #[test]
    fn test_frontier_skips_same_site() {
        let mut tree = TraceTree::new();
        let first = tree.enter("A", at(0));
        tree.failed("A", at(0)).unwrap();
        tree.enter("A", at(0));
        tree.failed("A", at(0)).unwrap();
        let y = tree.enter("Y", at(0));
        tree.failed("Y", at(0)).unwrap();
        assert_eq!(tree.frontier().members(), [first, y]);
    }

    #[test]
    fn test_frontier_keeps_coarser_entry_recorded_first() {
        let mut tree = TraceTree::new();
        // A fails at 3, then a later attempt of A reaches 3 through B.
        let a1 = tree.enter("A", at(3));
        tree.failed("A", at(3)).unwrap();
        tree.enter("A", at(3));
        let b = tree.enter("B", at(3));
        tree.failed("B", at(3)).unwrap();
        tree.failed("A", at(3)).unwrap();
        assert_eq!(tree.frontier().members(), [a1, b]);
    }

    #[test]
    fn test_failure_view_keeps_only_frontier_paths() {
        let mut tree = TraceTree::new();
        tree.enter("start", at(0));
        tree.enter("ok", at(0));
        tree.matched("ok", Location::on_first_line(0, 2)).unwrap();
        tree.enter("bad", at(2));
        tree.enter("digit", at(2));
        tree.failed("digit", at(2)).unwrap();
        tree.failed("bad", at(2)).unwrap();
        tree.failed("start", at(0)).unwrap();

        let nodes = tree.graph_nodes(View::Failure, |_| true);
        assert_eq!(rules(&tree, &nodes), ["start", "bad", "digit"]);

        let full = tree.graph_nodes(View::Full, |_| false);
        assert_eq!(rules(&tree, &full), ["start", "ok", "bad", "digit"]);
    }

    #[test]
    fn test_failure_view_without_failures_is_empty() {
        let mut tree = TraceTree::new();
        tree.enter("A", at(0));
        tree.matched("A", at(0)).unwrap();
        assert_eq!(tree.extract(View::Failure, |_| false), None);
        assert!(tree.graph_nodes(View::Failure, |_| false).is_empty());
    }

    #[test]
    fn test_full_view_splices_hidden_children() {
        let mut tree = TraceTree::new();
        let outer = tree.enter("outer", at(0));
        let inner = tree.enter("inner", at(0));
        let leaf = tree.enter("leaf", at(0));
        tree.matched("leaf", at(0)).unwrap();
        tree.matched("inner", at(0)).unwrap();
        tree.matched("outer", at(0)).unwrap();

        let pruned = tree.extract(View::Full, |n| n.rule() == "inner").unwrap();
        let ids: Vec<_> = pruned.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, [NodeId::ROOT, outer, leaf]);
        assert_eq!(pruned.get(1).unwrap().children, [2]);

        // Splicing changes where `leaf` is drawn, not whose child it is.
        let nodes = tree.flatten(&pruned);
        assert_eq!(rules(&tree, &nodes), ["outer", "leaf"]);
        assert_eq!(nodes[1].id, leaf);
        assert_eq!(nodes[1].parent, Some(inner));
        assert_eq!(nodes[1].parent, tree.node(leaf).parent());
    }

    #[test]
    fn test_flattened_parents_are_arena_parents() {
        let mut tree = TraceTree::new();
        tree.enter("seq", at(0));
        tree.enter("group", at(0));
        tree.enter("a", at(0));
        tree.matched("a", at(1)).unwrap();
        tree.enter("b", at(1));
        tree.failed("b", at(1)).unwrap();
        tree.matched("group", at(0)).unwrap();
        tree.failed("seq", at(0)).unwrap();

        for view in [View::Full, View::Failure] {
            for node in tree.graph_nodes(view, |n| n.rule() == "group") {
                assert_eq!(node.parent, tree.node(node.id).parent());
            }
        }
    }

    #[test]
    fn test_hidden_siblings_keep_pre_order() {
        let mut tree = TraceTree::new();
        tree.enter("s", at(0));
        for (hidden, leaf) in [("h1", "x"), ("h2", "y")] {
            tree.enter(hidden, at(0));
            tree.enter(leaf, at(0));
            tree.matched(leaf, at(0)).unwrap();
            tree.enter("z", at(0));
            tree.failed("z", at(0)).unwrap();
            tree.matched(hidden, at(0)).unwrap();
        }
        tree.matched("s", at(0)).unwrap();

        let nodes = tree.graph_nodes(View::Full, |n| n.rule().starts_with('h'));
        assert_eq!(rules(&tree, &nodes), ["s", "x", "z", "y", "z"]);
    }

    #[test]
    fn test_deep_nesting_extracts_without_recursion() {
        // Paths grow with depth, so memory is quadratic in DEPTH.
        const DEPTH: usize = 10_000;
        let mut tree = TraceTree::new();
        for level in 0..DEPTH {
            tree.enter("r", at(level));
        }
        for level in (0..DEPTH).rev() {
            tree.failed("r", at(level)).unwrap();
        }
        assert_eq!(tree.frontier().offset(), DEPTH - 1);

        let full = tree.graph_nodes(View::Full, |_| false);
        assert_eq!(full.len(), DEPTH);
        let failure = tree.graph_nodes(View::Failure, |_| false);
        assert_eq!(failure.len(), DEPTH);
        assert_eq!(failure[0].parent, Some(NodeId::ROOT));
    }

    #[test]
    fn test_flatten_parents_and_order() {
        let mut tree = TraceTree::new();
        let a = tree.enter("A", at(0));
        let failed = tree.enter("F", at(0));
        tree.failed("F", at(0)).unwrap();
        let matched = tree.enter("M", at(0));
        tree.matched("M", at(0)).unwrap();
        tree.matched("A", at(0)).unwrap();

        let nodes = tree.graph_nodes(View::Full, |_| false);
        let ids: Vec<_> = nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, [a, matched, failed]);
        assert_eq!(nodes[0].parent, Some(NodeId::ROOT));
        assert_eq!(nodes[1].parent, Some(a));
        assert_eq!(nodes[2].state, NodeState::Failed);
    }

    #[test]
    fn test_reset() {
        let mut tree = TraceTree::new();
        tree.enter("A", at(0));
        tree.failed("A", at(0)).unwrap();
        tree.reset();
        assert!(tree.is_empty());
        assert_eq!(tree.current(), NodeId::ROOT);
        assert!(tree.frontier().members().is_empty());
    }
}
