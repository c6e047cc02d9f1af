#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Traced Arithmetic Parser Example
//!
//! A small recursive-descent parser for integer arithmetic that reports each
//! rule attempt to a [`TraceSink`]. Pair it with a [`Tracer`] to see the
//! flow graph of a successful parse, or the backtrace of a failed one:
//!
//! ```ignore
//! let report = arith_trace::traced_parse("2+(3/4", TracerConfig::new())?;
//! // 1:7: expected ")" or "*" or "+" or "-" or "/", found end of input
//! println!("{}", report.outcome.unwrap_err());
//! // x 1:7-1:7 add_op
//! // | 2+(3/4
//! // |       ^
//! // ...
//! println!("{}", report.diagram);
//! ```

use thiserror::Error;
use tracegraph::{TraceSink, Tracer, TracerConfig};

pub mod ast;
pub mod parse;

pub use ast::{BinOp, Expr};
pub use parse::Parser;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{line}:{column}: expected {}, found {found}", .expected.join(" or "))]
    Syntax {
        line: usize,
        column: usize,
        expected: Vec<String>,
        found: String,
    },

    #[error(transparent)]
    Trace(#[from] tracegraph::Error),
}

/// Parses `source`, reporting every rule attempt to `sink`.
pub fn parse(source: &str, sink: &mut dyn TraceSink) -> Result<Expr, ParseError> {
    Parser::new(source, sink).parse()
}

/// Outcome of a traced parse.
#[derive(Debug)]
pub struct Report {
    pub outcome: Result<Expr, ParseError>,
    /// The full trace when parsing succeeded, the backtrace otherwise.
    pub diagram: String,
}

/// Parses `source` under a [`Tracer`] built from `config`.
pub fn traced_parse(source: &str, config: TracerConfig) -> Result<Report, tracegraph::Error> {
    let mut tracer = Tracer::new(source, config)?;
    let outcome = parse(source, &mut tracer);
    let diagram = match outcome {
        Ok(_) => tracer.render_trace(),
        Err(_) => tracer.render_backtrace(),
    };
    Ok(Report { outcome, diagram })
}
