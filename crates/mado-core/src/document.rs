//! # Materialized Manifest Document
//!
//! The parser collaborator's complete output: flat header, content tree,
//! and evidence hierarchy. Built fresh per validation run, immutable for
//! the duration of the run.

use serde::{Deserialize, Serialize};

use crate::content::ContentItem;
use crate::evidence::EvidenceStudy;
use crate::header::DocumentHeader;

/// A fully materialized manifest document, ready for validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestDocument {
    /// Flat header fields.
    pub header: DocumentHeader,
    /// Root of the content tree.
    pub content: ContentItem,
    /// Declared evidence, one entry per study.
    #[serde(default)]
    pub evidence: Vec<EvidenceStudy>,
}

impl ManifestDocument {
    /// Decode a document from its JSON materialization.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the payload is not a
    /// structurally well-formed document. Semantic problems (bad UIDs,
    /// missing rule nodes) are the conformance engine's job, not this one.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Encode the document back to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error; only reachable through
    /// pathological float values in numeric items.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
