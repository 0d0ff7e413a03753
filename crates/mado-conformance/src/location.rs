//! # Location Paths
//!
//! Builders for the stable path strings findings carry. Content paths are
//! slash-delimited (`Content/ImageLibrary[0]/Group[1]`); evidence and
//! header paths are dot-delimited (`Evidence.Study[0].Series[2]`,
//! `Header.PatientId`). Paths depend only on document structure, so the
//! same input always yields the same paths — a requirement for
//! snapshot-testing callers.

use mado_core::code::codes;
use mado_core::{ContentItem, ContentItemKind};

/// Path of the content root.
pub const CONTENT_ROOT: &str = "Content";

/// Path prefix of the evidence hierarchy.
pub const EVIDENCE_ROOT: &str = "Evidence";

/// Location used for document-level findings that concern no single node.
pub const DOCUMENT: &str = "Document";

/// Path of a content child: `{parent}/{Segment}[{index}]`.
///
/// The segment names well-known concepts where possible and falls back to
/// the item kind, so paths stay readable without depending on free-text
/// meanings.
pub fn content_child(parent: &str, item: &ContentItem, index: usize) -> String {
    format!("{parent}/{}[{index}]", segment_name(item))
}

fn segment_name(item: &ContentItem) -> &'static str {
    if let Some(concept) = &item.concept {
        for (code, name) in [
            (codes::image_library(), "ImageLibrary"),
            (codes::image_library_group(), "Group"),
            (codes::modality(), "Modality"),
            (codes::key_object_description(), "Description"),
            (codes::study_instance_uid(), "StudyUid"),
            (codes::series_instance_uid(), "SeriesUid"),
            (codes::number_of_images(), "NumberOfImages"),
            (codes::referenced_instance(), "InstanceRef"),
        ] {
            if concept.matches(&code) {
                return name;
            }
        }
    }
    match item.kind() {
        ContentItemKind::Container => "Container",
        ContentItemKind::Text => "Text",
        ContentItemKind::Code => "Code",
        ContentItemKind::Num => "Num",
        ContentItemKind::UidRef => "UidRef",
        ContentItemKind::ImageRef => "Image",
        ContentItemKind::CompositeRef => "Composite",
    }
}

/// Path of an evidence study: `Evidence.Study[{index}]`.
pub fn study(index: usize) -> String {
    format!("{EVIDENCE_ROOT}.Study[{index}]")
}

/// Path of an evidence series: `Evidence.Study[{s}].Series[{i}]`.
pub fn series(study_index: usize, series_index: usize) -> String {
    format!("{EVIDENCE_ROOT}.Study[{study_index}].Series[{series_index}]")
}

/// Path of an evidence instance.
pub fn instance(study_index: usize, series_index: usize, instance_index: usize) -> String {
    format!(
        "{EVIDENCE_ROOT}.Study[{study_index}].Series[{series_index}].Instance[{instance_index}]"
    )
}

/// Path of a flat header attribute: `Header.{field}`.
pub fn header(field: &str) -> String {
    format!("Header.{field}")
}
