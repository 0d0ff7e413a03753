//! # Cross-Consistency Validation
//!
//! Compares the reference scanner's output against the evidence hierarchy.
//! The two lists are populated independently upstream, which is exactly
//! why they drift: the content tree claims to show objects the evidence
//! never declares (orphans — Errors), or the evidence declares objects the
//! content never shows (unusual but legal — Warnings).

use std::collections::HashSet;

use mado_core::{EvidenceStudy, Uid, ValidationResult};

use crate::location;
use crate::scanner::ScannedRef;

/// Check content references against declared evidence.
///
/// - every content reference missing from evidence → Error
/// - every evidence instance never referenced → Warning
/// - both sets empty → a single degenerate-document Error
pub fn check_cross_consistency(
    content_refs: &[ScannedRef],
    evidence: &[EvidenceStudy],
    out: &mut ValidationResult,
) {
    let evidence_uids: HashSet<&Uid> = evidence
        .iter()
        .flat_map(|study| &study.series)
        .flat_map(|series| &series.instances)
        .map(|instance| &instance.sop_instance_uid)
        .collect();

    if content_refs.is_empty() && evidence_uids.is_empty() {
        out.add_error(
            location::DOCUMENT,
            "degenerate document: no content references and no declared evidence",
        );
        return;
    }

    // Orphans, in traversal order. The scanner already deduplicated.
    for reference in content_refs {
        if !evidence_uids.contains(&reference.sop_instance_uid) {
            out.add_error(
                reference.location.as_str(),
                format!("orphan content reference: {}", reference.sop_instance_uid),
            );
        }
    }

    // Evidence the content never shows, in evidence order.
    let content_uids: HashSet<&Uid> =
        content_refs.iter().map(|r| &r.sop_instance_uid).collect();
    let mut reported: HashSet<&Uid> = HashSet::new();
    for (study_index, study) in evidence.iter().enumerate() {
        for (series_index, series) in study.series.iter().enumerate() {
            for (instance_index, instance) in series.instances.iter().enumerate() {
                let uid = &instance.sop_instance_uid;
                if !content_uids.contains(uid) && reported.insert(uid) {
                    out.add_warning(
                        location::instance(study_index, series_index, instance_index),
                        format!("evidence instance {uid} is never referenced by the content tree"),
                    );
                }
            }
        }
    }
}

/// Walk the evidence hierarchy checking identifier invariants.
///
/// Required identifiers must be non-empty at every level (Error); repeated
/// series UIDs within a study and repeated instance UIDs within a series
/// indicate sloppy upstream merging but do not corrupt navigability
/// (Warning).
pub fn check_uid_hierarchy(evidence: &[EvidenceStudy], out: &mut ValidationResult) {
    for (study_index, study) in evidence.iter().enumerate() {
        if study.study_instance_uid.is_empty() {
            out.add_error(location::study(study_index), "study instance UID is empty");
        }

        let mut seen_series: HashSet<&Uid> = HashSet::new();
        for (series_index, series) in study.series.iter().enumerate() {
            let series_path = location::series(study_index, series_index);
            let series_uid = &series.series_instance_uid;
            if series_uid.is_empty() {
                out.add_error(series_path.as_str(), "series instance UID is empty");
            } else if !seen_series.insert(series_uid) {
                out.add_warning(
                    series_path.as_str(),
                    format!("duplicate series instance UID {series_uid} within study"),
                );
            }

            let mut seen_instances: HashSet<&Uid> = HashSet::new();
            for (instance_index, instance) in series.instances.iter().enumerate() {
                let instance_path = location::instance(study_index, series_index, instance_index);
                if instance.sop_class_uid.is_empty() {
                    out.add_error(instance_path.as_str(), "SOP class UID is empty");
                }
                let instance_uid = &instance.sop_instance_uid;
                if instance_uid.is_empty() {
                    out.add_error(instance_path.as_str(), "SOP instance UID is empty");
                } else if !seen_instances.insert(instance_uid) {
                    out.add_warning(
                        instance_path.as_str(),
                        format!("duplicate SOP instance UID {instance_uid} within series"),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::ReferenceChannel;
    use mado_core::{EvidenceInstance, EvidenceSeries};

    fn scanned(uid: &str) -> ScannedRef {
        ScannedRef {
            sop_class_uid: Some(Uid::new("1.2.840.10008.5.1.4.1.1.2")),
            sop_instance_uid: Uid::new(uid),
            location: "Content/Image[0]".to_string(),
            channel: ReferenceChannel::Primary,
        }
    }

    fn evidence_with(instances: &[&str]) -> Vec<EvidenceStudy> {
        vec![EvidenceStudy {
            study_instance_uid: Uid::new("1.2.3"),
            series: vec![EvidenceSeries {
                series_instance_uid: Uid::new("1.2.3.1"),
                modality: None,
                retrieval: vec![],
                instances: instances
                    .iter()
                    .map(|uid| EvidenceInstance {
                        sop_class_uid: Uid::new("1.2.840.10008.5.1.4.1.1.2"),
                        sop_instance_uid: Uid::new(*uid),
                    })
                    .collect(),
            }],
        }]
    }

    #[test]
    fn orphan_reference_is_an_error_without_degenerate_error() {
        let mut out = ValidationResult::new();
        check_cross_consistency(&[scanned("1.9")], &[], &mut out);

        assert_eq!(out.errors().len(), 1);
        assert!(out.errors()[0].message.contains("orphan content reference: 1.9"));
    }

    #[test]
    fn unreferenced_evidence_is_a_warning() {
        let mut out = ValidationResult::new();
        check_cross_consistency(&[], &evidence_with(&["1.7"]), &mut out);

        assert!(out.errors().is_empty());
        assert_eq!(out.warnings().len(), 1);
        assert!(out.warnings()[0].message.contains("1.7"));
    }

    #[test]
    fn empty_document_is_degenerate() {
        let mut out = ValidationResult::new();
        check_cross_consistency(&[], &[], &mut out);

        assert_eq!(out.errors().len(), 1);
        assert!(out.errors()[0].message.contains("degenerate"));
    }

    #[test]
    fn matching_sets_are_clean() {
        let mut out = ValidationResult::new();
        check_cross_consistency(&[scanned("1.7")], &evidence_with(&["1.7"]), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn hierarchy_flags_empty_and_duplicate_identifiers() {
        let mut evidence = evidence_with(&["1.7", "1.7"]);
        evidence[0].series.push(EvidenceSeries {
            series_instance_uid: Uid::new("1.2.3.1"),
            modality: None,
            retrieval: vec![],
            instances: vec![],
        });
        evidence[0].series.push(EvidenceSeries {
            series_instance_uid: Uid::new(""),
            modality: None,
            retrieval: vec![],
            instances: vec![],
        });

        let mut out = ValidationResult::new();
        check_uid_hierarchy(&evidence, &mut out);

        assert_eq!(out.errors().len(), 1, "empty series UID: {:?}", out.errors());
        assert_eq!(out.warnings().len(), 2, "dup instance + dup series: {:?}", out.warnings());
    }
}
