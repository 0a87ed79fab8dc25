//! Codec between wire-format hex strings and fixed-width binary identifiers.
//!
//! Leaf module: pure functions, no carrier or context dependencies.
//!
//! The two decode paths are intentionally asymmetric and must stay separately
//! testable:
//! - the trace id path is strict: non-hex input is a caller-visible decode
//!   failure;
//! - the span id path is tolerant: non-hex characters are discarded, excess
//!   digits beyond the leading 16 are ignored, and short input is left-padded
//!   with `0`. It never fails, and only the empty input degenerates to the
//!   all-zero sentinel.

use crate::context::{SpanId, TraceId};
use crate::headers::PAYX_TXID_HEADER;
use crate::propagation::error::Error;

/// Decodes a wire-format trace id: strip `-`, left-pad with `0` to 32 hex
/// characters, decode as 16 bytes.
///
/// Fails on non-hex characters or more than 32 hex characters.
pub fn decode_trace_id(raw: &str) -> Result<TraceId, Error> {
    let stripped: String = raw.chars().filter(|c| *c != '-').collect();
    if stripped.len() > 32 {
        return Err(Error::extract(
            "trace id longer than 32 hex characters",
            PAYX_TXID_HEADER,
        ));
    }

    let padded = format!("{stripped:0>32}");
    let decoded = hex::decode(padded)
        .map_err(|_| Error::extract("trace id is not valid hex", PAYX_TXID_HEADER))?;
    let bytes: [u8; 16] = decoded
        .try_into()
        .map_err(|_| Error::extract("trace id is not 16 bytes", PAYX_TXID_HEADER))?;

    Ok(TraceId::from_bytes(bytes))
}

/// Decodes a wire-format span id with the tolerant scheme: keep the first 16
/// hex digits (hyphens and other non-hex characters discarded, excess
/// ignored), left-pad with `0` if short, decode as 8 bytes.
///
/// Never fails. Empty or fully garbled input yields the all-zero span id;
/// that zero-padding degenerate case is accepted rather than corrected.
#[must_use]
pub fn decode_span_id(raw: &str) -> SpanId {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_hexdigit)
        .take(16)
        .collect();
    let padded = format!("{digits:0>16}");

    // All characters are hex digits by construction, so this cannot fail.
    let mut bytes = [0u8; 8];
    if let Ok(decoded) = hex::decode(padded) {
        if decoded.len() == 8 {
            bytes.copy_from_slice(&decoded);
        }
    }

    SpanId::from_bytes(bytes)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trace_id_strips_hyphens() {
        let trace_id = decode_trace_id("80f198ee-5634-3ba8-64fe8b2a57d3eff7")
            .expect("hyphenated trace id decodes");
        assert_eq!(trace_id.hex(), "80f198ee56343ba864fe8b2a57d3eff7");
    }

    #[test]
    fn trace_id_left_pads_short_input() {
        let trace_id = decode_trace_id("abc123").expect("short trace id decodes");
        assert_eq!(trace_id.hex(), "00000000000000000000000000abc123");
    }

    #[test]
    fn trace_id_accepts_uppercase_and_encodes_lowercase() {
        let trace_id = decode_trace_id("80F198EE56343BA864FE8B2A57D3EFF7")
            .expect("uppercase trace id decodes");
        assert_eq!(trace_id.hex(), "80f198ee56343ba864fe8b2a57d3eff7");
    }

    #[test]
    fn trace_id_rejects_non_hex() {
        assert!(decode_trace_id("not a trace id").is_err());
        assert!(decode_trace_id("80f198ee56343ba864fe8b2a57d3efgg").is_err());
    }

    #[test]
    fn trace_id_rejects_over_length() {
        assert!(decode_trace_id("80f198ee56343ba864fe8b2a57d3eff700").is_err());
    }

    #[test]
    fn span_id_takes_leading_sixteen_hex_digits() {
        let span_id = decode_span_id("92bb3bf2-2852-475b-9609-04d6d8d51115");
        assert_eq!(span_id.hex(), "92bb3bf22852475b");
    }

    #[test]
    fn span_id_pads_surviving_digits_from_garbled_input() {
        let span_id = decode_span_id("unk,1234");
        assert_eq!(span_id.hex(), "0000000000001234");
        assert!(span_id.is_valid());
    }

    #[test]
    fn span_id_accepts_exact_width_input() {
        let span_id = decode_span_id("92bb3bf22852475b");
        assert_eq!(span_id.hex(), "92bb3bf22852475b");
    }

    #[test]
    fn span_id_empty_input_is_the_zero_sentinel() {
        assert_eq!(decode_span_id(""), SpanId::INVALID);
        assert_eq!(decode_span_id("zzz"), SpanId::INVALID);
    }

    proptest! {
        #[test]
        fn trace_id_round_trip(bytes in any::<[u8; 16]>()) {
            let trace_id = TraceId::from_bytes(bytes);
            let decoded = decode_trace_id(&trace_id.hex()).expect("encoded form decodes");
            prop_assert_eq!(decoded, trace_id);
        }

        #[test]
        fn span_id_round_trip(bytes in any::<[u8; 8]>()) {
            let span_id = SpanId::from_bytes(bytes);
            prop_assert_eq!(decode_span_id(&span_id.hex()), span_id);
        }

        #[test]
        fn span_id_never_panics(raw in ".*") {
            let _ = decode_span_id(&raw);
        }
    }
}
