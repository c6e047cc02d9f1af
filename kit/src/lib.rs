#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
//! Flow-graph traces and furthest-failure backtraces for recursive-descent
//! parsers.
//!
//! Feed a [`Tracer`] the `enter`/`match`/`fail` events a parser emits for
//! each rule attempt, then render either the whole attempt
//! ([`Tracer::render_trace`]) or only the paths that reached the furthest
//! failure ([`Tracer::render_backtrace`]):
//!
//! ```text
//! x 1:3-1:3 digit
//! | 2+(3/4
//! |   ^
//! x 1:1-1:1 expr
//!   2+(3/4
//!   ^
//! ```
pub use tracegraph_core::*;
