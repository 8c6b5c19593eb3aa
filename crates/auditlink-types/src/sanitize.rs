//! Optional payload hygiene applied before an event leaves the process.

use crate::Payload;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Characters kept visible at the end of a masked value.
const KEEP_LAST: usize = 4;

fn pii_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // Phone numbers
            r"^\+?\d{10,15}$",
            // Emails
            r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
            // SSN
            r"^\d{3}-\d{2}-\d{4}$",
            // Card numbers
            r"^\d{4}[\s-]?\d{4}[\s-]?\d{4}[\s-]?\d{4}$",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("PII pattern must compile"))
        .collect()
    })
}

/// Check whether an entire string looks like a phone number, email, SSN or
/// card number.
pub fn looks_like_pii(value: &str) -> bool {
    if value.chars().count() < 5 {
        return false;
    }
    pii_patterns().iter().any(|p| p.is_match(value))
}

/// Mask a value, keeping only its last four characters.
pub fn mask_value(value: &str) -> String {
    let len = value.chars().count();
    if len <= KEEP_LAST {
        return "***".to_string();
    }
    let tail: String = value.chars().skip(len - KEEP_LAST).collect();
    format!("***{tail}")
}

/// Payload transformations. Both are off by default, in which case the
/// payload passes through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayloadPolicy {
    /// Mask string values that look like PII, recursing into nested objects.
    pub mask_pii: bool,
    /// Replace payloads whose JSON encoding exceeds this many bytes with a
    /// truncation marker.
    pub max_bytes: Option<usize>,
}

impl PayloadPolicy {
    /// Whether applying the policy can change a payload.
    pub fn is_passthrough(&self) -> bool {
        !self.mask_pii && self.max_bytes.is_none()
    }

    /// Apply the policy.
    pub fn apply(&self, payload: Payload) -> Payload {
        let payload = if self.mask_pii {
            payload
                .into_iter()
                .map(|(k, v)| (k, mask_json(v)))
                .collect()
        } else {
            payload
        };

        match self.max_bytes {
            Some(max) => {
                let size = serde_json::to_vec(&payload).map_or(0, |b| b.len());
                if size > max {
                    tracing::warn!(size, max, "audit payload too large, truncating");
                    truncation_marker(size)
                } else {
                    payload
                }
            }
            None => payload,
        }
    }
}

fn mask_json(value: Value) -> Value {
    match value {
        Value::String(s) if looks_like_pii(&s) => Value::String(mask_value(&s)),
        Value::Object(map) => Value::Object(
            map.into_iter().map(|(k, v)| (k, mask_json(v))).collect(),
        ),
        other => other,
    }
}

fn truncation_marker(original_size: usize) -> Payload {
    let mut marker = Payload::new();
    marker.insert("_truncated".to_string(), Value::Bool(true));
    marker.insert("_original_size".to_string(), Value::from(original_size));
    marker
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn payload(value: Value) -> Payload {
        serde_json::from_value(value).unwrap()
    }

    #[test_case("+14155552671", true ; "phone")]
    #[test_case("someone@example.com", true ; "email")]
    #[test_case("123-45-6789", true ; "ssn")]
    #[test_case("4111 1111 1111 1111", true ; "card")]
    #[test_case("hello world", false ; "plain text")]
    #[test_case("1234", false ; "too short")]
    #[test_case("call +14155552671 now", false ; "partial match")]
    fn test_looks_like_pii(value: &str, expected: bool) {
        assert_eq!(looks_like_pii(value), expected);
    }

    #[test]
    fn test_mask_value() {
        assert_eq!(mask_value("+14155552671"), "***2671");
        assert_eq!(mask_value("abcd"), "***");
        assert_eq!(mask_value(""), "***");
    }

    #[test]
    fn test_default_policy_is_passthrough() {
        let policy = PayloadPolicy::default();
        assert!(policy.is_passthrough());

        let input = payload(json!({"email": "someone@example.com"}));
        assert_eq!(policy.apply(input.clone()), input);
    }

    #[test]
    fn test_masks_nested_objects() {
        let policy = PayloadPolicy {
            mask_pii: true,
            max_bytes: None,
        };
        let output = policy.apply(payload(json!({
            "email": "someone@example.com",
            "count": 3,
            "contact": {"phone": "+14155552671", "name": "Sam"},
            "list": ["someone@example.com"]
        })));

        assert_eq!(output["email"], json!("***.com"));
        assert_eq!(output["count"], json!(3));
        assert_eq!(output["contact"]["phone"], json!("***2671"));
        assert_eq!(output["contact"]["name"], json!("Sam"));
        // Arrays are left alone.
        assert_eq!(output["list"], json!(["someone@example.com"]));
    }

    #[test]
    fn test_oversized_payload_truncated() {
        let policy = PayloadPolicy {
            mask_pii: false,
            max_bytes: Some(16),
        };
        let input = payload(json!({"blob": "x".repeat(64)}));
        let size = serde_json::to_vec(&input).unwrap().len();

        let output = policy.apply(input);
        assert_eq!(output.len(), 2);
        assert_eq!(output["_truncated"], json!(true));
        assert_eq!(output["_original_size"], json!(size));
    }

    #[test]
    fn test_payload_within_limit_kept() {
        let policy = PayloadPolicy {
            mask_pii: false,
            max_bytes: Some(1024),
        };
        let input = payload(json!({"ip": "10.0.0.1"}));
        assert_eq!(policy.apply(input.clone()), input);
    }
}
