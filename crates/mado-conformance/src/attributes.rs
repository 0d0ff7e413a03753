//! # Header Attribute Checks
//!
//! Mechanical presence/format checks on the flat header fields, in the
//! required/conditional/optional style of the container format's module
//! tables. No structural logic lives here.

use chrono::DateTime;

use mado_core::{ConceptCode, ContentItem, DocumentHeader, Uid, ValidationResult};

use crate::location;

/// Run all header checks.
pub fn check_header(header: &DocumentHeader, out: &mut ValidationResult) {
    required_uid(&header.sop_class_uid, "SopClassUid", out);
    required_uid(&header.sop_instance_uid, "SopInstanceUid", out);
    required_opt_uid(header.study_instance_uid.as_ref(), "StudyInstanceUid", out);

    // Conditional fields: absence is worth flagging, not failing.
    expected_field(header.series_instance_uid.as_ref().map(Uid::as_str), "SeriesInstanceUid", out);
    expected_field(header.patient_id.as_deref(), "PatientId", out);
    expected_field(header.patient_name.as_deref(), "PatientName", out);

    match header.content_datetime.as_deref() {
        None | Some("") => {
            out.add_error(location::header("ContentDatetime"), "content timestamp is missing");
        }
        Some(raw) => {
            if DateTime::parse_from_rfc3339(raw).is_err() {
                out.add_error(
                    location::header("ContentDatetime"),
                    format!("content timestamp is not RFC 3339 with offset: \"{raw}\""),
                );
            }
        }
    }
}

/// Check that the content root carries the profile's document title.
pub fn check_document_title(
    root: &ContentItem,
    expected: &ConceptCode,
    out: &mut ValidationResult,
) {
    match &root.concept {
        Some(concept) if concept.matches(expected) => {}
        Some(concept) => {
            out.add_error(
                location::CONTENT_ROOT,
                format!("document title is {concept}, expected {expected}"),
            );
        }
        None => {
            out.add_error(
                location::CONTENT_ROOT,
                format!("document title is missing, expected {expected}"),
            );
        }
    }
}

fn required_uid(uid: &Uid, field: &str, out: &mut ValidationResult) {
    if uid.is_empty() {
        out.add_error(location::header(field), format!("{field} is missing"));
    } else if !uid.is_valid_syntax() {
        out.add_error(
            location::header(field),
            format!("{field} has invalid UID syntax: \"{uid}\""),
        );
    }
}

fn required_opt_uid(uid: Option<&Uid>, field: &str, out: &mut ValidationResult) {
    match uid {
        None => out.add_error(location::header(field), format!("{field} is missing")),
        Some(uid) => required_uid(uid, field, out),
    }
}

fn expected_field(value: Option<&str>, field: &str, out: &mut ValidationResult) {
    if value.map_or(true, str::is_empty) {
        out.add_warning(location::header(field), format!("{field} is absent"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mado_core::code::codes;
    use mado_core::ContinuityOfContent;

    fn full_header() -> DocumentHeader {
        DocumentHeader {
            sop_class_uid: Uid::new("1.2.840.10008.5.1.4.1.1.88.59"),
            sop_instance_uid: Uid::new("1.2.3.4.100"),
            study_instance_uid: Some(Uid::new("1.2.3.4")),
            series_instance_uid: Some(Uid::new("1.2.3.4.99")),
            patient_id: Some("PID-1".into()),
            patient_name: Some("DOE^JANE".into()),
            content_datetime: Some("2024-05-14T09:30:00+02:00".into()),
            institution_name: None,
            manufacturer: None,
        }
    }

    #[test]
    fn complete_header_is_clean() {
        let mut out = ValidationResult::new();
        check_header(&full_header(), &mut out);
        assert!(out.is_empty(), "{:?}", out);
    }

    #[test]
    fn missing_required_uids_are_errors() {
        let header = DocumentHeader::default();
        let mut out = ValidationResult::new();
        check_header(&header, &mut out);

        let locations: Vec<_> = out.errors().iter().map(|f| f.location.as_str()).collect();
        assert!(locations.contains(&"Header.SopClassUid"));
        assert!(locations.contains(&"Header.SopInstanceUid"));
        assert!(locations.contains(&"Header.StudyInstanceUid"));
        assert!(locations.contains(&"Header.ContentDatetime"));
    }

    #[test]
    fn absent_patient_fields_warn() {
        let header = DocumentHeader {
            patient_id: None,
            patient_name: Some(String::new()),
            ..full_header()
        };
        let mut out = ValidationResult::new();
        check_header(&header, &mut out);
        assert_eq!(out.warnings().len(), 2);
    }

    #[test]
    fn timestamp_without_offset_is_an_error() {
        let header = DocumentHeader {
            content_datetime: Some("2024-05-14T09:30:00".into()),
            ..full_header()
        };
        let mut out = ValidationResult::new();
        check_header(&header, &mut out);
        assert_eq!(out.errors().len(), 1);
        assert!(out.errors()[0].message.contains("RFC 3339"));
    }

    #[test]
    fn wrong_document_title_is_an_error() {
        let root = ContentItem::container(
            Some(codes::image_library()),
            None,
            ContinuityOfContent::Separate,
            vec![],
        );
        let mut out = ValidationResult::new();
        check_document_title(&root, &codes::manifest(), &mut out);
        assert_eq!(out.errors().len(), 1);
    }
}
