//! Span-start hook copying allow-listed baggage into span attributes.
//!
//! Collectors export span attributes, not baggage, so business fields carried
//! in baggage are invisible downstream unless they are copied onto the span.
//! [`BaggageSpanProcessor`] performs that copy at span start, normalizing key
//! names (`-` is not allowed in attribute names and becomes `.`).

use crate::context::{Context, Span};
use crate::headers::is_trace_field;

/// Attribute identifying the instrumentation component that produced a span.
pub const INSTRUMENTATION_LIBRARY_ATTRIBUTE: &str = "instrumentation.library";

/// Synchronous hooks invoked on the span lifecycle.
///
/// Both hooks run on the execution thread and must not block, perform I/O, or
/// panic across the host's hot tracing path.
pub trait SpanProcessor {
    /// Called when a recording span is started, with the parent context the
    /// span was created under.
    fn on_start(&self, span: &mut Span, parent_context: &Context);

    /// Called when a span is ended.
    fn on_finish(&self, span: &Span);
}

/// Span processor copying allow-listed baggage entries into span attributes.
///
/// At span start, every baggage entry of the parent context whose key is in
/// the propagation allow-list becomes a span attribute with `-` replaced by
/// `.` in the key. One additional attribute names the instrumentation scope.
/// Lookup misses are skipped; this processor never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaggageSpanProcessor;

impl SpanProcessor for BaggageSpanProcessor {
    fn on_start(&self, span: &mut Span, parent_context: &Context) {
        let scope = span.instrumentation_scope().to_owned();
        span.set_attribute(INSTRUMENTATION_LIBRARY_ATTRIBUTE, scope);

        for (key, value) in parent_context.baggage() {
            if !is_trace_field(key) {
                continue;
            }
            span.set_attribute(key.replace('-', "."), value.clone());
        }
    }

    /// Nothing to do at finish.
    fn on_finish(&self, _span: &Span) {}
}
