#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tracegraph::{EventKind, Location, Position, TraceEvent, TraceSink, Tracer, TracerConfig};

/// An event whose coordinates stay small enough to quote.
#[derive(Debug, Arbitrary)]
struct Step {
    kind: EventKind,
    rule: String,
    start: (u8, u8, u8),
    end: (u8, u8, u8),
}

impl Step {
    fn event(&self) -> TraceEvent {
        let position = |(offset, line, column): (u8, u8, u8)| {
            Position::new(offset.into(), line.into(), column.into())
        };
        TraceEvent::new(
            self.kind,
            self.rule.as_str(),
            Location::new(position(self.start), position(self.end)),
        )
    }
}

#[derive(Debug, Arbitrary)]
struct Script {
    source: String,
    steps: Vec<Step>,
    hidden: Vec<String>,
    use_color: bool,
    show_source: bool,
    show_full_path: bool,
    max_source_lines: u8,
    max_path_length: u8,
}

fuzz_target!(|script: Script| {
    let config = TracerConfig::new()
        .with_hidden_paths(script.hidden)
        .with_color(script.use_color)
        .with_source(script.show_source)
        .with_full_path(script.show_full_path)
        .with_max_source_lines(script.max_source_lines.into())
        .with_max_path_length(script.max_path_length.into());

    // Bad sources and patterns are rejected up front.
    let Ok(mut tracer) = Tracer::new(script.source.as_str(), config) else {
        return;
    };
    for step in &script.steps {
        // Malformed events are reported and leave the tree as it was.
        let _ = tracer.trace(&step.event());
    }
    let _ = tracer.render_trace();
    let _ = tracer.render_backtrace();
});
