//! # UID Primitive
//!
//! Newtype for DICOM unique identifiers (UI value representation).
//!
//! ## Validation
//!
//! Unlike most domain newtypes, [`Uid`] does **not** validate at
//! construction. Manifest documents are materialized by an upstream parser
//! from data the validator has no control over; a syntactically broken UID
//! must flow through the content and evidence model untouched so the
//! conformance engine can attach an Error finding at the exact location it
//! occurs. Syntax checking is available on demand via
//! [`Uid::is_valid_syntax`].

use serde::{Deserialize, Serialize};

/// Maximum length of a UID, per the UI value representation.
pub const MAX_UID_LENGTH: usize = 64;

/// A DICOM unique identifier: dot-separated decimal components.
///
/// Carries whatever string the upstream parser produced, including the
/// empty string. Compare with `==`; check syntax with
/// [`Uid::is_valid_syntax`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(String);

impl Uid {
    /// Wrap a raw identifier string. Never fails; see the module docs.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check numeric-dotted UID syntax.
    ///
    /// Valid UIDs are non-empty, at most [`MAX_UID_LENGTH`] characters,
    /// consist of `.`-separated components of ASCII digits, and no non-zero
    /// component has a leading zero (`"0"` itself is a valid component).
    pub fn is_valid_syntax(&self) -> bool {
        let s = &self.0;
        if s.is_empty() || s.len() > MAX_UID_LENGTH {
            return false;
        }
        s.split('.').all(is_valid_component)
    }
}

fn is_valid_component(component: &str) -> bool {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // No leading zeros: "0" is fine, "007" is not.
    component.len() == 1 || !component.starts_with('0')
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Uid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Uid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_typical_uids() {
        for uid in [
            "1.2.840.10008.5.1.4.1.1.88.59",
            "1.2.276.0.7230010.3.1.4.8323329",
            "0.0",
            "2.25.329800735698586629295641978511506172918",
        ] {
            assert!(Uid::new(uid).is_valid_syntax(), "expected valid: {uid}");
        }
    }

    #[test]
    fn rejects_malformed_uids() {
        for uid in [
            "",
            "1.2.840.",
            ".1.2",
            "1..2",
            "1.02.840",
            "1.2.840a",
            "1.2 .840",
        ] {
            assert!(!Uid::new(uid).is_valid_syntax(), "expected invalid: {uid}");
        }
    }

    #[test]
    fn rejects_uid_longer_than_64_chars() {
        let long = "1.".repeat(32) + "1";
        assert!(long.len() > MAX_UID_LENGTH);
        assert!(!Uid::new(long).is_valid_syntax());
    }

    fn valid_component() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("0".to_string()),
            (1u64..1_000_000_000).prop_map(|n| n.to_string()),
        ]
    }

    proptest! {
        /// Joining valid components with dots always yields a valid UID;
        /// five components of at most nine digits stay within the length
        /// bound by construction.
        #[test]
        fn generated_uids_pass_syntax_check(components in prop::collection::vec(valid_component(), 1..6)) {
            let uid = components.join(".");
            prop_assert!(uid.len() <= MAX_UID_LENGTH);
            prop_assert!(Uid::new(uid).is_valid_syntax());
        }

        /// A leading zero in any multi-digit component invalidates the UID.
        #[test]
        fn leading_zero_component_fails(n in 1u64..10_000) {
            let uid = format!("1.0{n}.5");
            prop_assert!(!Uid::new(uid).is_valid_syntax());
        }
    }
}
