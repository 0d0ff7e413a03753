//! # Coded Concepts
//!
//! The `(code value, coding scheme, meaning)` triple used for concept names
//! throughout a manifest's content tree, plus the well-known codes the
//! conformance rule tables match against.
//!
//! Two codes denote the same concept when code value and coding scheme
//! agree; the human-readable meaning is display text and never participates
//! in matching (upstream systems routinely localize or abbreviate it).

use serde::{Deserialize, Serialize};

/// A coded concept: the triple identifying a node's concept name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConceptCode {
    /// The code value within the coding scheme.
    pub code_value: String,
    /// The coding scheme designator (e.g. `DCM`).
    pub coding_scheme_designator: String,
    /// Human-readable meaning. Display text only, not matched.
    pub code_meaning: String,
}

impl ConceptCode {
    /// Build a concept code from its three parts.
    pub fn new(
        code_value: impl Into<String>,
        coding_scheme_designator: impl Into<String>,
        code_meaning: impl Into<String>,
    ) -> Self {
        Self {
            code_value: code_value.into(),
            coding_scheme_designator: coding_scheme_designator.into(),
            code_meaning: code_meaning.into(),
        }
    }

    /// Whether two codes denote the same concept (value + scheme equality;
    /// meaning is ignored).
    pub fn matches(&self, other: &ConceptCode) -> bool {
        self.code_value == other.code_value
            && self.coding_scheme_designator == other.coding_scheme_designator
    }
}

impl std::fmt::Display for ConceptCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, \"{}\")",
            self.code_value, self.coding_scheme_designator, self.code_meaning
        )
    }
}

/// Well-known concept codes matched by the conformance rule tables.
///
/// Plain constructor functions rather than statics: a [`ConceptCode`] owns
/// its strings, and the rule tables are themselves built per run.
pub mod codes {
    use super::ConceptCode;

    /// Document title of a manifest document.
    pub fn manifest() -> ConceptCode {
        ConceptCode::new("113030", "DCM", "Manifest")
    }

    /// Free-text description attached to a manifest.
    pub fn key_object_description() -> ConceptCode {
        ConceptCode::new("113012", "DCM", "Key Object Description")
    }

    /// The image library container — the structural discriminator of the
    /// template-family-A dialect.
    pub fn image_library() -> ConceptCode {
        ConceptCode::new("111028", "DCM", "Image Library")
    }

    /// A group of entries within an image library.
    pub fn image_library_group() -> ConceptCode {
        ConceptCode::new("126200", "DCM", "Image Library Group")
    }

    /// Modality code item within an image library.
    pub fn modality() -> ConceptCode {
        ConceptCode::new("121139", "DCM", "Modality")
    }

    /// Study-level UID reference.
    pub fn study_instance_uid() -> ConceptCode {
        ConceptCode::new("110180", "DCM", "Study Instance UID")
    }

    /// Series-level UID reference.
    pub fn series_instance_uid() -> ConceptCode {
        ConceptCode::new("112002", "DCM", "Series Instance UID")
    }

    /// Number of image entries declared for a library group.
    pub fn number_of_images() -> ConceptCode {
        ConceptCode::new("126202", "DCM", "Number of Images")
    }

    /// Secondary instance-reference channel: a UIDREF naming a referenced
    /// object outside the image/composite reference nodes.
    pub fn referenced_instance() -> ConceptCode {
        ConceptCode::new("121214", "DCM", "Referenced Instance")
    }
}
