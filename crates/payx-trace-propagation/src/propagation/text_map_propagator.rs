//! The Payx header propagator.
//!
//! Extracts and injects trace context using the Payx custom headers:
//! - **`x-payx-txid`**: 16-byte trace identifier (32 hex characters)
//! - **`x-payx-reqid`**: 8-byte request/span identifier (leading 16 hex
//!   characters of the carrier value)
//! - five business baggage headers (`x-payx-sid`, `x-payx-user-untrusted`,
//!   `x-payx-bizpn`, `x-payx-cnsmr`, `x-payx-subtxnbr`)
//!
//! # Header Format Examples
//!
//! ```text
//! x-payx-txid: 80f198ee-5634-3ba8-64fe8b2a57d3eff7
//! x-payx-reqid: 92bb3bf2-2852-475b-9609-04d6d8d51115
//! x-payx-cnsmr: billing_service
//! x-payx-sid: 39d495aa-74a1-4529-8158-7e2b8f4416b0
//! ```
//!
//! # Extraction
//!
//! 1. **Trace id**: required; absent means pass-through, malformed hex is
//!    logged and degrades to pass-through
//! 2. **Span id**: tolerant; garbled or short values are padded rather than
//!    rejected
//! 3. **Sampling**: forced to sampled (the upstream already decided to
//!    sample), `remote` set on the extracted context
//! 4. **Baggage**: every allow-listed carrier header is percent-decoded and
//!    layered onto the context
//!
//! # Injection
//!
//! Identity headers are written first, then allow-listed baggage verbatim
//! (which may overwrite the identity headers with forwarded upstream values),
//! and finally the consumer header is stamped with this service's configured
//! identity.

use std::env;

use percent_encoding::percent_decode_str;
use tracing::{debug, warn};

use crate::context::{Context, Span, SpanContext};
use crate::headers::{is_trace_field, PAYX_CNSMR_HEADER, PAYX_REQID_HEADER, PAYX_TXID_HEADER, TRACE_FIELDS};
use crate::propagation::{
    carrier::{Extractor, Injector},
    codec,
    error::Error,
    Propagator,
};

/// Environment variable supplying the consumer identity stamped into the
/// outgoing `x-payx-cnsmr` header.
pub const CONSUMER_NAME_ENV: &str = "OTEL_SERVICE_NAME";

/// Propagator for the Payx custom header format.
///
/// Holds the consumer identity captured once at construction; all other state
/// is the process-wide constant allow-list. Safe to share across concurrent
/// callers.
#[derive(Clone, Debug)]
pub struct PayxHeaderPropagator {
    /// This service's consumer identity, written unconditionally on inject.
    ///
    /// Empty when the environment variable is unset; the empty value is still
    /// written (known quirk, kept for wire compatibility).
    consumer_name: String,
}

impl PayxHeaderPropagator {
    /// Creates a propagator reading the consumer identity from
    /// [`CONSUMER_NAME_ENV`].
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            consumer_name: env::var(CONSUMER_NAME_ENV).unwrap_or_default(),
        }
    }

    /// Creates a propagator with an explicit consumer identity.
    #[must_use]
    pub fn with_consumer_name(consumer_name: impl Into<String>) -> Self {
        Self {
            consumer_name: consumer_name.into(),
        }
    }

    /// The consumer identity this propagator stamps on inject.
    #[must_use]
    pub fn consumer_name(&self) -> &str {
        &self.consumer_name
    }

    /// Decodes the span identity from the carrier.
    ///
    /// `Ok(None)` when the txid header is absent (pass-through). A malformed
    /// txid surfaces the decode error; the reqid is decoded tolerantly and
    /// never aborts extraction.
    fn extract_span_context(carrier: &dyn Extractor) -> Result<Option<SpanContext>, Error> {
        let Some(raw_trace_id) = carrier.get(PAYX_TXID_HEADER) else {
            return Ok(None);
        };

        let trace_id = codec::decode_trace_id(raw_trace_id)?;
        let span_id = codec::decode_span_id(carrier.get(PAYX_REQID_HEADER).unwrap_or_default());

        Ok(Some(SpanContext::new(trace_id, span_id, true, true)))
    }

    /// Layers every allow-listed carrier header onto `context` as baggage,
    /// percent-decoding the values.
    fn context_with_extracted_baggage(carrier: &dyn Extractor, context: &Context) -> Context {
        let mut context = context.clone();
        for key in carrier.keys() {
            if !is_trace_field(key) {
                continue;
            }
            if let Some(raw_value) = carrier.get(key) {
                let value = percent_decode_str(raw_value).decode_utf8_lossy();
                context = context.with_baggage_value(key, value);
            }
        }
        context
    }
}

impl Propagator for PayxHeaderPropagator {
    /// Extracts trace context from the carrier.
    ///
    /// Returns the input context unmodified when the txid header is absent or
    /// malformed; otherwise returns a new context carrying the extracted
    /// baggage and a non-recording span with the remote, sampled identity.
    fn extract(&self, carrier: &dyn Extractor, context: &Context) -> Context {
        match Self::extract_span_context(carrier) {
            Ok(Some(span_context)) => {
                let context = Self::context_with_extracted_baggage(carrier, context);
                context.with_span(Span::non_recording(span_context))
            }
            Ok(None) => context.clone(),
            Err(e) => {
                warn!("{e}");
                context.clone()
            }
        }
    }

    /// Injects trace context from `context` into the carrier.
    ///
    /// No-op when the context carries no valid span identity. Identity
    /// headers are written first; allow-listed baggage is forwarded verbatim
    /// afterwards and takes precedence for colliding keys; the consumer
    /// header is stamped last with this service's identity.
    fn inject(&self, context: &Context, carrier: &mut dyn Injector) {
        let Some(span_context) = context.span_context() else {
            debug!("no active span in context, skipping inject");
            return;
        };
        if !span_context.is_valid() {
            debug!("invalid span context, skipping inject");
            return;
        }

        // Overwritten below if the same field arrived in baggage, meaning the
        // call did not originate from an instrumented service.
        carrier.set(PAYX_TXID_HEADER, span_context.trace_id().hex());
        carrier.set(PAYX_REQID_HEADER, span_context.span_id().hex());

        for (key, value) in context.baggage() {
            if is_trace_field(key) {
                carrier.set(key, value.clone());
            }
        }

        // Stamped after the baggage pass so a forwarded cnsmr value is always
        // replaced with *this service's* consumer identity.
        carrier.set(PAYX_CNSMR_HEADER, self.consumer_name.clone());
    }

    fn fields(&self) -> &'static [&'static str] {
        &TRACE_FIELDS
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use serial_test::serial;

    use super::*;
    use crate::context::{SpanId, TraceId};
    use crate::headers::{PAYX_BIZPN_HEADER, PAYX_SID_HEADER};

    fn sampled_context() -> Context {
        let span_context = SpanContext::new(
            TraceId::from_bytes([1; 16]),
            SpanId::from_bytes([2; 8]),
            true,
            false,
        );
        Context::new().with_span(Span::non_recording(span_context))
    }

    #[test]
    #[serial]
    fn from_env_reads_consumer_name_once() {
        env::set_var(CONSUMER_NAME_ENV, "otel_service");
        let propagator = PayxHeaderPropagator::from_env();
        env::set_var(CONSUMER_NAME_ENV, "changed_later");

        assert_eq!(propagator.consumer_name(), "otel_service");
        env::remove_var(CONSUMER_NAME_ENV);
    }

    #[test]
    #[serial]
    fn from_env_defaults_to_empty_consumer_name() {
        env::remove_var(CONSUMER_NAME_ENV);
        let propagator = PayxHeaderPropagator::from_env();
        assert_eq!(propagator.consumer_name(), "");
    }

    #[test]
    fn empty_consumer_name_is_still_written() {
        let propagator = PayxHeaderPropagator::with_consumer_name("");
        let mut carrier = HashMap::new();
        propagator.inject(&sampled_context(), &mut carrier);

        assert_eq!(
            Extractor::get(&carrier, PAYX_CNSMR_HEADER),
            Some(""),
            "unset consumer identity is written as an empty value"
        );
    }

    #[test]
    fn extract_malformed_txid_passes_context_through() {
        let propagator = PayxHeaderPropagator::with_consumer_name("otel_service");
        let context = Context::new().with_baggage_value(PAYX_SID_HEADER, "existing");
        let carrier = HashMap::from([
            ("x-payx-txid".to_string(), "not hex at all".to_string()),
            ("x-payx-bizpn".to_string(), "flow".to_string()),
        ]);

        let extracted = propagator.extract(&carrier, &context);
        assert_eq!(extracted, context, "malformed txid degrades to pass-through");
    }

    #[test]
    fn extract_percent_decodes_baggage_values() {
        let propagator = PayxHeaderPropagator::with_consumer_name("otel_service");
        let carrier = HashMap::from([
            (
                "x-payx-txid".to_string(),
                "80f198ee56343ba864fe8b2a57d3eff7".to_string(),
            ),
            ("x-payx-bizpn".to_string(), "direct%20deposit".to_string()),
        ]);

        let context = propagator.extract(&carrier, &Context::new());
        assert_eq!(
            context.baggage_value(PAYX_BIZPN_HEADER),
            Some("direct deposit")
        );
    }

    #[test]
    fn inject_without_span_is_a_no_op() {
        let propagator = PayxHeaderPropagator::with_consumer_name("otel_service");
        let mut carrier = HashMap::new();
        propagator.inject(&Context::new(), &mut carrier);
        assert!(carrier.is_empty());
    }

    #[test]
    fn inject_with_invalid_span_context_is_a_no_op() {
        let propagator = PayxHeaderPropagator::with_consumer_name("otel_service");
        let context = Context::new().with_span(Span::non_recording(SpanContext::INVALID));
        let mut carrier = HashMap::new();
        propagator.inject(&context, &mut carrier);
        assert!(carrier.is_empty());
    }

    #[test]
    fn fields_lists_baggage_then_trace_context() {
        let propagator = PayxHeaderPropagator::with_consumer_name("otel_service");
        let fields = propagator.fields();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[5], PAYX_TXID_HEADER);
        assert_eq!(fields[6], PAYX_REQID_HEADER);
    }
}
