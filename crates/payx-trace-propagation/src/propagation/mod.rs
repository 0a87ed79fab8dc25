//! Trace context propagation for the Payx header format.
//!
//! This module implements the propagation layer: extracting trace context and
//! allow-listed baggage from incoming carriers, and injecting them into
//! outgoing carriers.
//!
//! # Trace Context Flow
//!
//! ```text
//! Incoming Request Headers
//!   ↓
//! extract (read x-payx-txid / x-payx-reqid, layer allow-listed baggage)
//!   ↓
//! Context (non-recording remote span + baggage)
//!   ↓
//! Process Request
//!   ↓
//! inject (write identity headers, forward baggage, stamp consumer)
//!   ↓
//! Outgoing Request Headers
//! ```
//!
//! # Example: Extracting Trace Context
//!
//! ```
//! use std::collections::HashMap;
//! use payx_trace_propagation::{Context, PayxHeaderPropagator, Propagator};
//!
//! let propagator = PayxHeaderPropagator::with_consumer_name("billing_service");
//!
//! let headers = HashMap::from([
//!     ("x-payx-txid".to_string(), "80f198ee56343ba864fe8b2a57d3eff7".to_string()),
//!     ("x-payx-reqid".to_string(), "92bb3bf22852475b".to_string()),
//! ]);
//!
//! let context = propagator.extract(&headers, &Context::new());
//! assert!(context.span_context().is_some());
//! ```

use crate::context::Context;
use carrier::{Extractor, Injector};

pub mod carrier;
pub mod codec;
pub mod error;
pub mod text_map_propagator;

/// Trait for extracting and injecting distributed trace context.
///
/// Propagators read trace context from incoming requests and write it to
/// outgoing requests through the carrier abstraction. Implementations must be
/// thread-safe: all state is read-only after construction.
pub trait Propagator {
    /// Extracts trace context from a carrier into a new context layered on
    /// `context`.
    ///
    /// If the carrier holds no usable identity, the input context is returned
    /// unmodified. This is the non-error pass-through path, not a failure.
    fn extract(&self, carrier: &dyn Extractor, context: &Context) -> Context;

    /// Injects trace context from `context` into a carrier.
    ///
    /// A context without a valid span identity makes injection a no-op rather
    /// than an error.
    fn inject(&self, context: &Context, carrier: &mut dyn Injector);

    /// The propagation fields this propagator reads and writes.
    ///
    /// If the carrier is reused, callers should delete these fields before
    /// calling [`Propagator::inject`].
    fn fields(&self) -> &'static [&'static str];
}
