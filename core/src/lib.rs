#![cfg_attr(
    not(test),
    deny(
        unsafe_code,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::dbg_macro
    )
)]

pub mod config;
mod error;
pub mod event;
pub mod graph;
pub mod hidden;
pub mod quoter;
pub mod style;
pub mod text;
mod tracer;
pub mod traits;
pub mod tree;

pub use config::TracerConfig;
pub use error::{Error, SourceIssue};
pub use event::{EventKind, Location, Position, TraceEvent};
pub use graph::{FlowGraph, GraphNode, LINEAGE_PALETTE};
pub use hidden::{HiddenPath, HiddenPaths};
pub use quoter::SourceQuoter;
pub use style::{Attribute, Color, Style, Styler};
pub use tracer::{NO_BACKTRACE, NO_TRACE, Tracer};
pub use traits::TraceSink;
pub use tree::{Frontier, Node, NodeId, NodeState, PrunedNode, PrunedTree, TraceTree, View};
