//! Wire header names and the propagation allow-list.
//!
//! All header names are externally fixed, lowercase, and hyphenated. The
//! allow-list is partitioned into two immutable tables: the trace-context
//! fields carrying the span identity, and the baggage fields carrying
//! business metadata. Fields outside [`TRACE_FIELDS`] are never propagated by
//! this crate.

/// HTTP header key for the Payx trace id (16 bytes, 32 hex characters).
///
/// Example: `x-payx-txid: 80f198ee-5634-3ba8-64fe8b2a57d3eff7`
pub const PAYX_TXID_HEADER: &str = "x-payx-txid";

/// HTTP header key for the Payx request/span id (8 bytes, 16 hex characters).
///
/// Carriers may embed a longer opaque id; only the leading 16 hex digits are
/// meaningful.
///
/// Example: `x-payx-reqid: 92bb3bf2-2852-475b-9609-04d6d8d51115`
pub const PAYX_REQID_HEADER: &str = "x-payx-reqid";

/// HTTP header key for the session id baggage field.
pub const PAYX_SID_HEADER: &str = "x-payx-sid";

/// HTTP header key for the untrusted user baggage field.
pub const PAYX_USER_HEADER: &str = "x-payx-user-untrusted";

/// HTTP header key for the business flow baggage field.
pub const PAYX_BIZPN_HEADER: &str = "x-payx-bizpn";

/// HTTP header key for the consumer baggage field.
///
/// On injection this field is always overwritten with the current service's
/// configured consumer identity, never a forwarded upstream value.
pub const PAYX_CNSMR_HEADER: &str = "x-payx-cnsmr";

/// HTTP header key for the sub-transaction number baggage field.
pub const PAYX_SUBTXNBR_HEADER: &str = "x-payx-subtxnbr";

/// Trace-context fields, handled by dedicated `SpanContext` logic.
pub const TRACE_CONTEXT_HEADERS: [&str; 2] = [PAYX_TXID_HEADER, PAYX_REQID_HEADER];

/// Baggage fields, copied generically between carrier and baggage.
pub const BAGGAGE_HEADERS: [&str; 5] = [
    PAYX_SID_HEADER,
    PAYX_USER_HEADER,
    PAYX_BIZPN_HEADER,
    PAYX_CNSMR_HEADER,
    PAYX_SUBTXNBR_HEADER,
];

/// The full propagation allow-list: baggage fields followed by trace-context
/// fields. Callers reusing a carrier should delete these keys before inject.
pub const TRACE_FIELDS: [&str; 7] = [
    PAYX_SID_HEADER,
    PAYX_USER_HEADER,
    PAYX_BIZPN_HEADER,
    PAYX_CNSMR_HEADER,
    PAYX_SUBTXNBR_HEADER,
    PAYX_TXID_HEADER,
    PAYX_REQID_HEADER,
];

/// Whether `key` is in the propagation allow-list.
#[must_use]
pub fn is_trace_field(key: &str) -> bool {
    TRACE_FIELDS.contains(&key)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn allow_list_orders_baggage_before_trace_context() {
        assert_eq!(&TRACE_FIELDS[..5], &BAGGAGE_HEADERS[..]);
        assert_eq!(&TRACE_FIELDS[5..], &TRACE_CONTEXT_HEADERS[..]);
    }

    #[test]
    fn allow_list_membership() {
        for field in TRACE_FIELDS {
            assert!(is_trace_field(field));
        }
        assert!(!is_trace_field("x-payx-unknown"));
        assert!(!is_trace_field("traceparent"));
    }
}
