//! Content fingerprint for labeled examples.
//!
//! The fingerprint is a BLAKE3 digest over a canonical JSON rendering of
//! `{subject, body}` with sorted keys. It identifies an example without
//! keeping a reversible copy of its text.

use serde_json::json;

/// Length of a fingerprint in hex characters.
pub const FINGERPRINT_LEN: usize = 64;

/// Canonical serialization of an example's content.
///
/// `serde_json::Map` is ordered by key, so field order never depends on
/// the caller.
pub fn canonical_form(subject: &str, body: &str) -> String {
    json!({ "subject": subject, "body": body }).to_string()
}

/// One-way digest of an example's content, lowercase hex.
pub fn fingerprint(subject: &str, body: &str) -> String {
    blake3::hash(canonical_form(subject, body).as_bytes())
        .to_hex()
        .to_string()
}

/// True if `s` has the shape of a fingerprint produced by [`fingerprint`].
pub fn is_fingerprint(s: &str) -> bool {
    s.len() == FINGERPRINT_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
