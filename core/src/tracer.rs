//! The tracer facade: event intake, live log and the two rendered views.

use std::fmt;
use std::io::{self, Write};

use crate::config::TracerConfig;
use crate::error::Error;
use crate::event::TraceEvent;
use crate::graph::FlowGraph;
use crate::hidden::HiddenPaths;
use crate::quoter::SourceQuoter;
use crate::style::{Attribute, Color, Style, Styler};
use crate::text;
use crate::traits::TraceSink;
use crate::tree::{Node, NodeId, NodeState, TraceTree, View};

/// Returned by [`Tracer::render_trace`] when no rule was ever resolved.
pub const NO_TRACE: &str = "No trace found. Make sure the parser emits trace events.";

/// Returned by [`Tracer::render_backtrace`] when no failure path survives.
pub const NO_BACKTRACE: &str = "No backtrace found. Make sure the parser emits trace events.\n\
Or, the failure might occur in the start node.";

const LABEL_STYLE: Style = Style::attr(Attribute::Thin);
const RULE_STYLE: Style = Style::fg(Color::Yellow).with_attribute(Attribute::Bold);

/// Live log tag for a node in `state`.
const fn log_tag(state: NodeState) -> (&'static str, Style) {
    match state {
        NodeState::Pending => ("ENTER", Style::fg(Color::Cyan)),
        NodeState::Matched => ("MATCH", Style::fg(Color::Green)),
        NodeState::Failed => ("FAIL ", Style::fg(Color::Red)),
    }
}

/// Builds the call tree of one parse and renders it.
///
/// A tracer is bound to the source text being parsed. Feed it the parser's
/// events through [`TraceSink::trace`], then call [`render_trace`] for the
/// whole attempt or [`render_backtrace`] for the paths that reached the
/// furthest failure.
///
/// [`render_trace`]: Tracer::render_trace
/// [`render_backtrace`]: Tracer::render_backtrace
///
/// # Example
///
/// ```ignore
/// let mut tracer = Tracer::new("2+", TracerConfig::new().with_color(false))?;
/// for event in events {
///     tracer.trace(&event)?;
/// }
/// println!("{}", tracer.render_backtrace());
/// ```
pub struct Tracer<'p> {
    config: TracerConfig,
    hidden: HiddenPaths,
    quoter: SourceQuoter,
    tree: TraceTree,
    parent: Option<&'p mut dyn TraceSink>,
    log: Box<dyn Write + 'p>,
}

impl fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer")
            .field("config", &self.config)
            .field("tree", &self.tree)
            .field("has_parent", &self.parent.is_some())
            .finish_non_exhaustive()
    }
}

impl<'p> Tracer<'p> {
    /// Creates a tracer for `source`.
    ///
    /// Fails when the source is missing or contains unsupported line breaks,
    /// or when a hidden path does not compile.
    pub fn new<'s>(source: impl Into<Option<&'s str>>, config: TracerConfig) -> Result<Self, Error> {
        let quoter = SourceQuoter::new(source, Styler::new(config.use_color))?;
        let hidden = HiddenPaths::compile(&config.hidden_paths)?;
        Ok(Self {
            config,
            hidden,
            quoter,
            tree: TraceTree::new(),
            parent: None,
            log: Box::new(io::stdout()),
        })
    }

    /// Forwards every event to `parent` before handling it.
    #[must_use]
    pub fn with_parent(mut self, parent: &'p mut dyn TraceSink) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sends the live log to `writer` instead of stdout.
    #[must_use]
    pub fn with_log_writer(mut self, writer: impl Write + 'p) -> Self {
        self.log = Box::new(writer);
        self
    }

    #[inline]
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    #[inline]
    pub fn tree(&self) -> &TraceTree {
        &self.tree
    }

    #[inline]
    pub fn quoter(&self) -> &SourceQuoter {
        &self.quoter
    }

    /// Discards the trace so far. The source, configuration, parent and log
    /// writer are kept.
    pub fn reset(&mut self) {
        self.tree.reset();
    }

    /// Label lines for `node`: a title line, then the quoted source range
    /// when excerpts are enabled, each excerpt line starting with
    /// `quote_prefix`.
    pub fn node_label(&self, node: &Node, quote_prefix: &str) -> Vec<String> {
        let styler = self.quoter.styler();
        let mut title = Vec::with_capacity(3);
        if self.config.show_trace {
            title.push(styler.paint(&format!("#{}", node.sequence()), LABEL_STYLE));
        }
        title.push(styler.paint(&node.location().to_string(), LABEL_STYLE));

        let name = if self.config.show_full_path {
            text::truncate_front(node.path(), self.config.max_path_length) + node.rule()
        } else {
            node.rule().to_string()
        };
        title.push(styler.paint(&name, RULE_STYLE));

        let mut lines = vec![title.join(" ")];
        if self.config.show_source {
            lines.extend(self.quoter.quote_location(
                quote_prefix,
                node.location(),
                self.config.effective_max_source_lines(),
            ));
        }
        lines
    }

    fn log_node(&mut self, level: usize, id: NodeId) -> Result<(), Error> {
        let node = self.tree.node(id);
        if self.hidden.is_hidden(node) {
            return Ok(());
        }
        let (tag, style) = log_tag(node.state());
        let tag = self.quoter.styler().paint(tag, style);

        let mut lines = self.node_label(node, " ").into_iter();
        let mut out = String::new();
        if let Some(first) = lines.next() {
            out.push_str(&format!("{}{} {}\n", text::indent(level), tag, first));
        }
        for line in lines {
            out.push_str(&format!("{}{}\n", text::indent(level + 1), line));
        }
        self.log.write_all(out.as_bytes())?;
        Ok(())
    }

    fn render(&self, view: View, placeholder: &str) -> String {
        let nodes = self
            .tree
            .graph_nodes(view, |node| self.hidden.is_hidden(node));
        if nodes.is_empty() {
            return placeholder.to_string();
        }

        FlowGraph::new(self.quoter.styler())
            .with_spacer_rows(!self.config.show_source)
            .render(&nodes, |entry| self.node_label(self.tree.node(entry.id), ""))
            .join("\n")
    }

    /// Flow graph of every resolved rule, hidden paths left out.
    pub fn render_trace(&self) -> String {
        self.render(View::Full, NO_TRACE)
    }

    /// Flow graph of the paths leading to the furthest failure.
    pub fn render_backtrace(&self) -> String {
        self.render(View::Failure, NO_BACKTRACE)
    }
}

impl TraceSink for Tracer<'_> {
    /// Forwards `event` to the parent, applies it, then writes the live log.
    ///
    /// A parent or stream error leaves this tracer's tree untouched. An
    /// [`Error::Io`] from the live log comes after the event was applied.
    fn trace(&mut self, event: &TraceEvent) -> Result<(), Error> {
        if let Some(parent) = self.parent.as_deref_mut() {
            parent.trace(event)?;
        }

        let depth = self.tree.depth();
        let id = self.tree.apply(event)?;
        if self.config.show_trace {
            self.log_node(depth.min(self.tree.depth()), id)?;
        }
        Ok(())
    }
}
