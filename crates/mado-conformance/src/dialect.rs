//! # Dialect Detection
//!
//! Classifies which template dialect a document follows before any
//! structural rules are applied. A fixed cascade, evaluated in order and
//! short-circuiting on first match:
//!
//! 1. A container anywhere in the content tree whose concept is the
//!    image-library code → [`TemplateDialect::TemplateFamilyA`].
//! 2. Otherwise, any evidence series carrying modality, a retrieve-location
//!    UID, or a retrieve URL beyond the bare minimum →
//!    [`TemplateDialect::LegacyExtendedAttributes`].
//! 3. Otherwise [`TemplateDialect::Unknown`].
//!
//! The ordering is load-bearing: extended evidence attributes alone are a
//! weaker signal than an explicit structural container, so structural
//! detection always wins.

use mado_core::code::codes;
use mado_core::{AddressingMode, ContentItem, EvidenceStudy};

/// The template dialect a document was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateDialect {
    /// Structural dialect marked by an image-library container.
    TemplateFamilyA,
    /// Pre-template documents recognized by extended evidence attributes.
    LegacyExtendedAttributes,
    /// No discriminator found; no template rules can be applied.
    Unknown,
}

impl TemplateDialect {
    /// Diagnostic name of the dialect.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TemplateFamilyA => "template-family-a",
            Self::LegacyExtendedAttributes => "legacy-extended-attributes",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TemplateDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run the detection cascade over a document's content and evidence.
pub fn detect_dialect(content: &ContentItem, evidence: &[EvidenceStudy]) -> TemplateDialect {
    if contains_image_library(content) {
        return TemplateDialect::TemplateFamilyA;
    }
    if has_extended_evidence_attributes(evidence) {
        return TemplateDialect::LegacyExtendedAttributes;
    }
    TemplateDialect::Unknown
}

fn contains_image_library(item: &ContentItem) -> bool {
    if item.is_container() && item.concept_matches(&codes::image_library()) {
        return true;
    }
    item.children().iter().any(contains_image_library)
}

fn has_extended_evidence_attributes(evidence: &[EvidenceStudy]) -> bool {
    evidence.iter().flat_map(|study| &study.series).any(|series| {
        series.modality.is_some()
            || series.retrieval.iter().any(|addr| {
                matches!(addr.mode(), AddressingMode::LocationUid | AddressingMode::Url)
            })
    })
}
