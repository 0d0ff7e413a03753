//! # Flat Document Header
//!
//! The small set of flat header fields the external parser hands over
//! alongside the content tree and evidence hierarchy. Consumed only by
//! mechanical presence/format checks; none of these fields participates in
//! the structural conformance rules.

use serde::{Deserialize, Serialize};

use crate::uid::Uid;

/// Flat header fields of a manifest document.
///
/// The two document UIDs are plain (possibly empty) fields because every
/// document has the slots even when the values are broken; everything else
/// is optional the way the container format leaves it optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentHeader {
    /// SOP class UID of the document itself.
    #[serde(default)]
    pub sop_class_uid: Uid,
    /// SOP instance UID of the document itself — the scanner's self-UID.
    #[serde(default)]
    pub sop_instance_uid: Uid,
    /// Study the document belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_instance_uid: Option<Uid>,
    /// Series the document belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_instance_uid: Option<Uid>,
    /// Patient identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    /// Patient name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    /// Content timestamp, RFC 3339 with timezone offset. Format-checked
    /// only; the engine never interprets the instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_datetime: Option<String>,
    /// Institution that produced the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    /// Equipment manufacturer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}
