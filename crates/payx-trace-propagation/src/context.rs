//! Host-model trace context structures.
//!
//! This module defines the narrow slice of a tracing runtime the propagator
//! and span processor actually consume:
//! - **`TraceId`** / **`SpanId`**: fixed-width binary identifiers
//! - **`SpanContext`**: the minimal span identity propagated across services
//! - **`Span`**: a span handle carrying its context, recording flag,
//!   instrumentation scope, and string attributes
//! - **`Context`**: an immutable request-scoped value holding the active span
//!   and a baggage map
//!
//! # Immutability
//!
//! `Context` is a value type: every operation (`with_span`,
//! `with_baggage_value`) returns a new layered context instead of mutating the
//! receiver, so concurrent extract/inject calls over different carriers never
//! interfere. `SpanContext` is immutable once constructed.

use std::collections::HashMap;
use std::fmt;

/// A 16-byte trace identifier.
///
/// The canonical wire form is 32 lowercase hex characters with no separators.
/// The all-zero value is the invalid sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId([u8; 16]);

impl TraceId {
    /// The invalid (all-zero) trace id.
    pub const INVALID: Self = Self([0; 16]);

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Lowercase fixed-width (32 character) hex encoding.
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }

    /// A trace id is valid when it is not the all-zero sentinel.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Debug for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TraceId({})", self.hex())
    }
}

/// An 8-byte span identifier.
///
/// The canonical wire form is 16 lowercase hex characters with no separators.
/// The all-zero value is the invalid sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanId([u8; 8]);

impl SpanId {
    /// The invalid (all-zero) span id.
    pub const INVALID: Self = Self([0; 8]);

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0
    }

    /// Lowercase fixed-width (16 character) hex encoding.
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }

    /// A span id is valid when it is not the all-zero sentinel.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Debug for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpanId({})", self.hex())
    }
}

/// The minimal identity of a span needed to link spans across services.
///
/// Contains the trace id, span id, sampling flag, and whether the context was
/// received from a remote parent. Immutable once constructed; extraction
/// always builds a fresh `SpanContext` per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanContext {
    trace_id: TraceId,
    span_id: SpanId,
    sampled: bool,
    remote: bool,
}

impl SpanContext {
    /// The invalid span context: all-zero identifiers, not sampled, local.
    pub const INVALID: Self = Self {
        trace_id: TraceId::INVALID,
        span_id: SpanId::INVALID,
        sampled: false,
        remote: false,
    };

    #[must_use]
    pub const fn new(trace_id: TraceId, span_id: SpanId, sampled: bool, remote: bool) -> Self {
        Self {
            trace_id,
            span_id,
            sampled,
            remote,
        }
    }

    #[must_use]
    pub const fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    #[must_use]
    pub const fn span_id(&self) -> SpanId {
        self.span_id
    }

    #[must_use]
    pub const fn is_sampled(&self) -> bool {
        self.sampled
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// A context is valid when both identifiers are non-zero.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.trace_id.is_valid() && self.span_id.is_valid()
    }
}

/// A span handle: context plus the pieces the span processor reads and writes.
///
/// This is a host-model stand-in, not an SDK span. It carries enough state for
/// propagation (the [`SpanContext`]) and for the baggage attribute copier (the
/// recording flag, instrumentation scope name, and a string attribute map).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    context: SpanContext,
    recording: bool,
    instrumentation_scope: String,
    attributes: HashMap<String, String>,
}

impl Span {
    /// A non-recording span wrapping an extracted remote context.
    ///
    /// Used on extraction to parent local spans on the upstream identity
    /// without recording anything itself.
    #[must_use]
    pub fn non_recording(context: SpanContext) -> Self {
        Self {
            context,
            recording: false,
            instrumentation_scope: String::new(),
            attributes: HashMap::new(),
        }
    }

    /// A recording span owned by the named instrumentation scope.
    #[must_use]
    pub fn recording(context: SpanContext, instrumentation_scope: impl Into<String>) -> Self {
        Self {
            context,
            recording: true,
            instrumentation_scope: instrumentation_scope.into(),
            attributes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn span_context(&self) -> SpanContext {
        self.context
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    #[must_use]
    pub fn instrumentation_scope(&self) -> &str {
        &self.instrumentation_scope
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }
}

/// An immutable request-scoped context: the active span plus a baggage map.
///
/// Baggage is an ordered-irrelevant mapping from field name to string value,
/// distinct from the span identity. Layering operations return a new context,
/// leaving the receiver untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    span: Option<Span>,
    baggage: HashMap<String, String>,
}

impl Context {
    /// An empty context: no active span, no baggage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new context with `span` as the active span, layered on `self`.
    #[must_use]
    pub fn with_span(&self, span: Span) -> Self {
        Self {
            span: Some(span),
            baggage: self.baggage.clone(),
        }
    }

    /// A new context with the baggage entry added, layered on `self`.
    #[must_use]
    pub fn with_baggage_value(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut baggage = self.baggage.clone();
        baggage.insert(key.into(), value.into());
        Self {
            span: self.span.clone(),
            baggage,
        }
    }

    #[must_use]
    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    /// The active span's context, if a span is attached.
    #[must_use]
    pub fn span_context(&self) -> Option<SpanContext> {
        self.span.as_ref().map(Span::span_context)
    }

    #[must_use]
    pub fn baggage(&self) -> &HashMap<String, String> {
        &self.baggage
    }

    #[must_use]
    pub fn baggage_value(&self, key: &str) -> Option<&str> {
        self.baggage.get(key).map(String::as_str)
    }
}
