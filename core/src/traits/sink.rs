use crate::error::Error;
use crate::event::TraceEvent;

/// Receiver of a parser's trace events.
///
/// Events must arrive one at a time and in the order the parser produced
/// them. A [`Tracer`](crate::Tracer) is a sink, and can forward every event
/// to a parent sink before applying it, so tracers compose into chains.
///
/// # Example
///
/// ```ignore
/// use tracegraph::{TraceSink, TraceEvent, Location};
///
/// let mut recorded: Vec<TraceEvent> = Vec::new();
/// recorded.trace(&TraceEvent::enter("expr", Location::on_first_line(0, 0)))?;
/// assert_eq!(recorded.len(), 1);
/// ```
pub trait TraceSink {
    /// Consumes one event.
    fn trace(&mut self, event: &TraceEvent) -> Result<(), Error>;

    /// Consumes events in order, stopping at the first error.
    fn trace_all<'a, I>(&mut self, events: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = &'a TraceEvent>,
        Self: Sized,
    {
        events.into_iter().try_for_each(|event| self.trace(event))
    }
}

/// Records events verbatim.
impl TraceSink for Vec<TraceEvent> {
    fn trace(&mut self, event: &TraceEvent) -> Result<(), Error> {
        self.push(event.clone());
        Ok(())
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn trace(&mut self, event: &TraceEvent) -> Result<(), Error> {
        (**self).trace(event)
    }
}
