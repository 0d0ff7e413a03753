//! # Profile Orchestrator
//!
//! Composes the validators into one pipeline for a requested profile.
//! Validators are free functions appending to a single accumulator; the
//! orchestrator owns the fixed stage order, so finding order is a function
//! of the input alone and repeat runs are byte-identical.

use mado_core::{MalformedInput, ManifestDocument, ValidationResult};

use crate::dialect::{self, TemplateDialect};
use crate::profile::{ProfileConfig, ValidationProfile};
use crate::{attributes, cross, location, retrieval, scanner, tables, template};

/// Defensive bound on content-tree depth. Documents deeper than this are
/// not diagnosable tree shapes; they are hostile or corrupt input.
pub const MAX_CONTENT_DEPTH: usize = 64;

/// Validate a document against a profile.
///
/// Returns the fully populated result; the only hard failure is
/// [`MalformedInput`], raised before any validator runs. Malformed
/// *content* never fails — it produces Error findings and the pipeline
/// continues, so one run reports every issue at once.
///
/// # Errors
///
/// [`MalformedInput`] when the content root is not a container or the
/// tree exceeds [`MAX_CONTENT_DEPTH`].
pub fn validate(
    document: &ManifestDocument,
    profile: ValidationProfile,
) -> Result<ValidationResult, MalformedInput> {
    guard_input(document)?;

    let config = ProfileConfig::resolve(profile);
    let mut out = ValidationResult::new();

    tracing::debug!(profile = %profile, "starting validation run");

    attributes::check_header(&document.header, &mut out);
    attributes::check_document_title(&document.content, &config.document_title, &mut out);

    let detected = dialect::detect_dialect(&document.content, &document.evidence);
    match detected {
        TemplateDialect::Unknown => {
            out.add_error(
                location::CONTENT_ROOT,
                "no template dialect recognized: the content tree has no image library container \
                 and the evidence carries no extended series attributes",
            );
        }
        _ => {
            out.add_info(location::DOCUMENT, format!("detected dialect: {detected}"));
        }
    }

    let rules = tables::rules_for(detected, &config);
    template::check_template(&document.content, &rules, &mut out);

    let refs = scanner::scan_references(
        &document.content,
        &document.header.sop_instance_uid,
        config.allow_benign_duplicates,
        &config.instance_reference_code,
        &mut out,
    );
    tracing::debug!(references = refs.len(), dialect = %detected, "content tree scanned");

    cross::check_cross_consistency(&refs, &document.evidence, &mut out);
    cross::check_uid_hierarchy(&document.evidence, &mut out);
    retrieval::check_retrieval_addressing(&document.evidence, &mut out);

    tracing::debug!(
        errors = out.errors().len(),
        warnings = out.warnings().len(),
        "validation run finished"
    );
    Ok(out)
}

/// Reject input no validator could attach diagnostics to.
///
/// Depth is measured iteratively; the recursive walks downstream are safe
/// once the bound holds.
fn guard_input(document: &ManifestDocument) -> Result<(), MalformedInput> {
    if !document.content.is_container() {
        return Err(MalformedInput::RootNotContainer {
            kind: document.content.kind(),
        });
    }

    let mut stack: Vec<(&mado_core::ContentItem, usize)> = vec![(&document.content, 1)];
    while let Some((item, depth)) = stack.pop() {
        if depth > MAX_CONTENT_DEPTH {
            return Err(MalformedInput::DepthExceeded {
                limit: MAX_CONTENT_DEPTH,
            });
        }
        for child in item.children() {
            stack.push((child, depth + 1));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mado_core::code::codes;
    use mado_core::{ContentItem, ContinuityOfContent, DocumentHeader, RelationshipKind, Uid};

    fn minimal_document() -> ManifestDocument {
        ManifestDocument {
            header: DocumentHeader {
                sop_class_uid: Uid::new("1.2.840.10008.5.1.4.1.1.88.59"),
                sop_instance_uid: Uid::new("1.2.3.100"),
                study_instance_uid: Some(Uid::new("1.2.3")),
                series_instance_uid: Some(Uid::new("1.2.3.99")),
                patient_id: Some("PID".into()),
                patient_name: Some("DOE^J".into()),
                content_datetime: Some("2024-05-14T09:30:00Z".into()),
                ..DocumentHeader::default()
            },
            content: ContentItem::container(
                Some(codes::manifest()),
                None,
                ContinuityOfContent::Separate,
                vec![],
            ),
            evidence: vec![],
        }
    }

    #[test]
    fn non_container_root_is_malformed_input() {
        let mut doc = minimal_document();
        doc.content = ContentItem::text(None, RelationshipKind::Contains, "not a tree");
        let err = validate(&doc, ValidationProfile::Manifest).unwrap_err();
        assert!(matches!(err, MalformedInput::RootNotContainer { .. }));
    }

    #[test]
    fn excessive_depth_is_malformed_input() {
        let mut tree = ContentItem::container(
            None,
            Some(RelationshipKind::Contains),
            ContinuityOfContent::Separate,
            vec![],
        );
        for _ in 0..MAX_CONTENT_DEPTH {
            tree = ContentItem::container(
                None,
                Some(RelationshipKind::Contains),
                ContinuityOfContent::Separate,
                vec![tree],
            );
        }
        let mut doc = minimal_document();
        doc.content = tree;

        let err = validate(&doc, ValidationProfile::Manifest).unwrap_err();
        assert!(matches!(err, MalformedInput::DepthExceeded { .. }));
    }

    #[test]
    fn empty_document_reports_unknown_dialect_and_degenerate_content() {
        let result = validate(&minimal_document(), ValidationProfile::Manifest).unwrap();
        assert!(!result.is_valid());
        let messages: Vec<_> = result.errors().iter().map(|f| f.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("no template dialect")));
        assert!(messages.iter().any(|m| m.contains("degenerate document")));
    }
}
