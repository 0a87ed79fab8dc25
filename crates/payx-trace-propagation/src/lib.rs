//! # Payx Trace Propagation
//!
//! This crate implements the Payx custom trace context format: a small set of
//! well-known `x-payx-*` headers carrying a span identity (trace id, span id)
//! plus a bounded set of business baggage fields across RPC boundaries.
//!
//! ## Overview
//!
//! Two pieces cooperate:
//! - [`PayxHeaderPropagator`]: extracts trace context and allow-listed baggage
//!   from an incoming carrier, and injects them into an outgoing carrier.
//! - [`BaggageSpanProcessor`]: at span start, copies allow-listed baggage
//!   entries onto span attributes (with `-` normalized to `.`) so a downstream
//!   collector can export them.
//!
//! ## Architecture
//!
//! - [`context`]: host-model value types (`TraceId`, `SpanId`, `SpanContext`,
//!   `Span`, `Context`) consumed by the propagator and the span processor
//! - [`headers`]: the fixed wire header names and the propagation allow-list
//! - [`propagation`]: carrier traits, the identifier codec, and the
//!   `PayxHeaderPropagator`
//! - [`span_processor`]: the baggage-to-attributes span-start hook
//!
//! All operations are synchronous, allocation-bounded, and never perform I/O
//! beyond the carrier reads and writes supplied by the caller.

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(unused_extern_crates)]
#![deny(unreachable_pub)]
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

/// Host-model context structures: trace/span identifiers, span context,
/// non-recording spans, and the immutable request context
pub mod context;

/// Wire header names and the propagation field allow-list
pub mod headers;

/// Carrier abstraction, identifier codec, and the Payx header propagator
pub mod propagation;

/// Span-start hook copying allow-listed baggage into span attributes
pub mod span_processor;

pub use context::{Context, Span, SpanContext, SpanId, TraceId};
pub use propagation::text_map_propagator::PayxHeaderPropagator;
pub use propagation::Propagator;
pub use span_processor::{BaggageSpanProcessor, SpanProcessor};
