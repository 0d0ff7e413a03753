//! # Evidence Hierarchy
//!
//! The flat study → series → instance declaration of every object a
//! manifest is allowed to reference, with per-series retrieval addressing.
//!
//! Uniqueness of series UIDs within a study and instance UIDs within a
//! series is an invariant of well-formed evidence, but upstream merge
//! errors do produce duplicates without corrupting navigability — the
//! conformance engine reports them as warnings, never as hard failures.

use serde::{Deserialize, Serialize};

use crate::uid::Uid;

/// One study's worth of declared evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceStudy {
    /// Study instance UID.
    pub study_instance_uid: Uid,
    /// Series belonging to the study, in document order.
    pub series: Vec<EvidenceSeries>,
}

/// One series within an evidence study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSeries {
    /// Series instance UID.
    pub series_instance_uid: Uid,
    /// Series modality, when declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,
    /// Retrieval addressing variants. A series may carry several at once;
    /// an empty list means the series declares no way to fetch its objects.
    #[serde(default)]
    pub retrieval: Vec<RetrievalAddress>,
    /// Instances belonging to the series, in document order.
    pub instances: Vec<EvidenceInstance>,
}

/// One referenced object instance within an evidence series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceInstance {
    /// SOP class UID of the object.
    pub sop_class_uid: Uid,
    /// SOP instance UID of the object.
    pub sop_instance_uid: Uid,
}

/// How the objects of a series can be fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum RetrievalAddress {
    /// Web retrieval endpoint (WADO-style URL).
    Url(String),
    /// Opaque retrieve-location UID.
    LocationUid(Uid),
    /// Generic retrieval URI.
    Uri(String),
}

impl RetrievalAddress {
    /// The addressing mode of this variant.
    pub fn mode(&self) -> AddressingMode {
        match self {
            Self::Url(_) => AddressingMode::Url,
            Self::LocationUid(_) => AddressingMode::LocationUid,
            Self::Uri(_) => AddressingMode::Uri,
        }
    }
}

/// Addressing convention discriminant, used for mixed-mode detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressingMode {
    /// URL-based retrieval.
    Url,
    /// Retrieve-location UID.
    LocationUid,
    /// Generic URI.
    Uri,
}

impl AddressingMode {
    /// Short diagnostic name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::LocationUid => "location-uid",
            Self::Uri => "uri",
        }
    }
}

impl std::fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieval_address_modes() {
        assert_eq!(
            RetrievalAddress::Url("https://pacs.example.org/wado".into()).mode(),
            AddressingMode::Url
        );
        assert_eq!(
            RetrievalAddress::LocationUid(Uid::new("1.2.3")).mode(),
            AddressingMode::LocationUid
        );
        assert_eq!(
            RetrievalAddress::Uri("urn:oid:1.2.3".into()).mode(),
            AddressingMode::Uri
        );
    }

    #[test]
    fn series_retrieval_defaults_to_empty() {
        let json = r#"{
            "series_instance_uid": "1.2.3.4",
            "instances": []
        }"#;
        let series: EvidenceSeries = serde_json::from_str(json).unwrap();
        assert!(series.retrieval.is_empty());
        assert!(series.modality.is_none());
    }
}
