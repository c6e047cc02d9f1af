//! Seams between tracegraph and the parsers that feed it.
//!
//! A parser, or a harness wrapping one, reports rule attempts to a
//! [`TraceSink`]. The sink decides what to do with them:
//!
//! ```text
//! parser ──► TraceSink
//!              ├── Tracer           (builds the call tree, renders views)
//!              │     └── parent     (optional, receives every event first)
//!              └── Vec<TraceEvent>  (records the raw stream)
//! ```

mod sink;

pub use sink::TraceSink;
