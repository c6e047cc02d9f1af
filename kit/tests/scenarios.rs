//! End-to-end rendering of small trace streams.
use regex::Regex;
use test_case::test_case;
use tracegraph::{
    Error, EventKind, Location, NO_BACKTRACE, NO_TRACE, TraceEvent, TraceSink, Tracer,
    TracerConfig,
};

fn at(offset: usize) -> Location {
    Location::on_first_line(offset, offset)
}

fn span(start: usize, end: usize) -> Location {
    Location::on_first_line(start, end)
}

fn plain() -> TracerConfig {
    TracerConfig::new().with_color(false)
}

fn feed(source: &str, config: TracerConfig, events: &[TraceEvent]) -> Tracer<'static> {
    let mut tracer = Tracer::new(source, config).unwrap();
    tracer.trace_all(events).unwrap();
    tracer
}

/// Diagram text with trailing whitespace removed from every row.
fn trimmed(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

fn nested_failure() -> Vec<TraceEvent> {
    vec![
        TraceEvent::enter("A", at(0)),
        TraceEvent::enter("B", at(0)),
        TraceEvent::failed("B", at(0)),
        TraceEvent::failed("A", at(0)),
    ]
}

fn sibling_failures() -> Vec<TraceEvent> {
    vec![
        TraceEvent::enter("X", at(0)),
        TraceEvent::failed("X", at(0)),
        TraceEvent::enter("Y", at(0)),
        TraceEvent::failed("Y", at(0)),
    ]
}

fn pair_with_failing_tail() -> Vec<TraceEvent> {
    vec![
        TraceEvent::enter("pair", at(0)),
        TraceEvent::enter("a", at(0)),
        TraceEvent::matched("a", span(0, 1)),
        TraceEvent::enter("b", at(1)),
        TraceEvent::failed("b", at(1)),
        TraceEvent::failed("pair", at(0)),
    ]
}

#[test]
fn test_nested_failure_backtrace() {
    let tracer = feed("", plain().with_source(false), &nested_failure());

    let frontier = tracer.tree().frontier();
    assert_eq!(frontier.members().len(), 1);
    assert_eq!(tracer.tree().node(frontier.members()[0]).rule(), "B");

    insta::assert_snapshot!(trimmed(&tracer.render_backtrace()), @r"
    x 1:1-1:1 B
    |
    x 1:1-1:1 A
    ");
}

#[test]
fn test_single_match() {
    let tracer = feed(
        "",
        plain().with_source(false),
        &[TraceEvent::enter("A", at(0)), TraceEvent::matched("A", at(0))],
    );
    assert_eq!(tracer.render_trace(), "o 1:1-1:1 A");
    assert_eq!(tracer.render_backtrace(), NO_BACKTRACE);
}

#[test]
fn test_sibling_failures_open_separate_columns() {
    let tracer = feed("", plain().with_source(false), &sibling_failures());

    let rules: Vec<_> = tracer
        .tree()
        .frontier()
        .members()
        .iter()
        .map(|&id| tracer.tree().node(id).rule())
        .collect();
    assert_eq!(rules, ["X", "Y"]);

    insta::assert_snapshot!(trimmed(&tracer.render_backtrace()), @r"
    x 1:1-1:1 Y
    |
    | x 1:1-1:1 X
    ");
}

#[test]
fn test_hidden_rule_kept_in_backtrace() {
    let tracer = feed("", plain().with_source(false).hide("inner"), &[
        TraceEvent::enter("outer", at(0)),
        TraceEvent::enter("inner", at(0)),
        TraceEvent::failed("inner", at(0)),
        TraceEvent::failed("outer", at(0)),
    ]);

    assert_eq!(tracer.render_trace(), "x 1:1-1:1 outer");
    insta::assert_snapshot!(trimmed(&tracer.render_backtrace()), @r"
    x 1:1-1:1 inner
    |
    x 1:1-1:1 outer
    ");
}

#[test]
fn test_hidden_rule_children_keep_their_parent() {
    // A plain rule fragment would hide `a` and `b` too, as they run inside
    // `group`; anchoring on the end of the path hides `group` alone. Their
    // parent is still `group`, so their columns never fold into `seq`.
    let group_only = Regex::new("/group$").unwrap();
    let tracer = feed("ab", plain().with_source(false).hide(group_only), &[
        TraceEvent::enter("seq", at(0)),
        TraceEvent::enter("group", at(0)),
        TraceEvent::enter("a", at(0)),
        TraceEvent::matched("a", span(0, 1)),
        TraceEvent::enter("b", at(1)),
        TraceEvent::matched("b", span(1, 2)),
        TraceEvent::matched("group", span(0, 2)),
        TraceEvent::matched("seq", span(0, 2)),
    ]);

    insta::assert_snapshot!(trimmed(&tracer.render_trace()), @r"
    o 1:2-1:3 b
    |
    | o 1:1-1:2 a
    | |
    | | o 1:1-1:3 seq
    ");
}

#[test]
fn test_deep_nesting_renders_both_views() {
    const DEPTH: usize = 10_000;
    let mut events = Vec::with_capacity(DEPTH * 2);
    events.extend((0..DEPTH).map(|level| TraceEvent::enter("r", at(level))));
    events.extend((0..DEPTH).rev().map(|level| TraceEvent::failed("r", at(level))));
    let tracer = feed("", plain().with_source(false), &events);

    let trace = tracer.render_trace();
    let backtrace = tracer.render_backtrace();
    assert_eq!(trace, backtrace);
    // One row per node plus a spacer between consecutive nodes.
    assert_eq!(backtrace.lines().count(), DEPTH * 2 - 1);
    assert!(backtrace.starts_with("x 1:10000-1:10000 r\n| \n"));
    assert!(backtrace.ends_with("\n| \nx 1:1-1:1 r"));
}

#[test]
fn test_trace_with_source() {
    let tracer = feed("ab", plain(), &pair_with_failing_tail());

    insta::assert_snapshot!(trimmed(&tracer.render_trace()), @r"
    x 1:2-1:2 b
    | ab
    |  ^
    | o 1:1-1:2 a
    | | ab
    | | ^
    | |
    |/
    x 1:1-1:1 pair
      ab
      ^
    ");
}

#[test]
fn test_backtrace_with_source() {
    let tracer = feed("ab", plain(), &pair_with_failing_tail());

    assert_eq!(tracer.tree().frontier().offset(), 1);
    insta::assert_snapshot!(trimmed(&tracer.render_backtrace()), @r"
    x 1:2-1:2 b
    | ab
    |  ^
    x 1:1-1:1 pair
      ab
      ^
    ");
}

#[test]
fn test_colored_single_node() {
    let tracer = feed(
        "",
        TracerConfig::new().with_source(false),
        &[TraceEvent::enter("A", at(0)), TraceEvent::matched("A", at(0))],
    );
    assert_eq!(
        tracer.render_trace(),
        "\x1b[32mo \x1b[0m\x1b[2m1:1-1:1\x1b[0m \x1b[33;1mA\x1b[0m"
    );
}

#[test_case(&[], NO_TRACE, NO_BACKTRACE; "no events")]
#[test_case(&[TraceEvent::enter("A", at(0))], NO_TRACE, NO_BACKTRACE; "pending only")]
fn test_placeholders(events: &[TraceEvent], trace: &str, backtrace: &str) {
    let tracer = feed("", plain(), events);
    assert_eq!(tracer.render_trace(), trace);
    assert_eq!(tracer.render_backtrace(), backtrace);
}

#[test]
fn test_failure_in_start_rule_only() {
    // A lone failing rule at offset 0 is a frontier member and still renders.
    let tracer = feed(
        "",
        plain().with_source(false),
        &[TraceEvent::enter("start", at(0)), TraceEvent::failed("start", at(0))],
    );
    assert_eq!(tracer.render_backtrace(), "x 1:1-1:1 start");
}

#[test_case(EventKind::Match; "match")]
#[test_case(EventKind::Fail; "fail")]
fn test_resolve_without_enter(kind: EventKind) {
    let mut tracer = Tracer::new("", plain()).unwrap();
    let err = tracer
        .trace(&TraceEvent::new(kind, "A", at(0)))
        .unwrap_err();
    assert!(matches!(err, Error::UnbalancedEvent { kind: k, .. } if k == kind));
    assert!(tracer.tree().is_empty());
}

#[test]
fn test_rule_mismatch_leaves_tree_untouched() {
    let mut tracer = Tracer::new("", plain()).unwrap();
    tracer.trace(&TraceEvent::enter("A", at(0))).unwrap();
    let err = tracer.trace(&TraceEvent::matched("B", at(0))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`match` event for `B` does not resolve pending rule `A`"
    );
    assert_eq!(tracer.tree().depth(), 1);
    assert_eq!(tracer.render_trace(), NO_TRACE);
}

#[test]
fn test_chained_tracers_observe_every_event() {
    let events = nested_failure();
    let mut outer = Tracer::new("", plain()).unwrap();
    {
        let mut inner = Tracer::new("", plain()).unwrap().with_parent(&mut outer);
        inner.trace_all(&events).unwrap();
        assert_eq!(inner.tree().len(), 2);
    }
    assert_eq!(outer.tree().len(), 2);
    assert_eq!(outer.render_backtrace(), {
        let inner = feed("", plain(), &events);
        inner.render_backtrace()
    });
}
