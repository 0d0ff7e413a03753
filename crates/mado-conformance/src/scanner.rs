//! # Reference Scanner
//!
//! One depth-first walk of the content tree, children in document order,
//! producing the ordered set of object references the document claims to
//! show. Self-references and duplicates are flagged as the walk goes, so
//! finding order matches traversal order and stays reproducible.
//!
//! Image and composite reference nodes are the primary channel. UIDREF
//! nodes whose concept is the instance-reference code form an explicitly
//! secondary channel: their UIDs join the reference set without the
//! duplicate bookkeeping applied to the primary channel.

use std::collections::HashSet;

use mado_core::{ConceptCode, ContentItem, ContentValue, Uid, ValidationResult};

use crate::location;

/// Which channel a scanned reference arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceChannel {
    /// An image or composite reference node.
    Primary,
    /// A UIDREF node carrying the instance-reference concept.
    UidReference,
}

/// One object reference found in the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedRef {
    /// SOP class of the referenced object; absent on the UIDREF channel.
    pub sop_class_uid: Option<Uid>,
    /// SOP instance of the referenced object.
    pub sop_instance_uid: Uid,
    /// Content path of the node the reference was found at.
    pub location: String,
    /// Channel the reference arrived through.
    pub channel: ReferenceChannel,
}

/// Scan the content tree for object references.
///
/// `self_uid` is the document's own SOP instance UID; referencing it is an
/// Error in every dialect. When `allow_benign_duplicates` is set, repeated
/// primary references are silently tolerated; otherwise each repeat is a
/// Warning. `instance_reference_code` is the profile's marker concept for
/// the secondary UIDREF channel. Findings go to `out`; the returned list
/// contains each distinct referenced instance once, in first-seen
/// traversal order.
pub fn scan_references(
    root: &ContentItem,
    self_uid: &Uid,
    allow_benign_duplicates: bool,
    instance_reference_code: &ConceptCode,
    out: &mut ValidationResult,
) -> Vec<ScannedRef> {
    let mut scan = Scan {
        self_uid,
        allow_benign_duplicates,
        instance_reference_code,
        seen: HashSet::new(),
        refs: Vec::new(),
    };
    scan.walk_children(root, location::CONTENT_ROOT, out);
    scan.refs
}

struct Scan<'a> {
    self_uid: &'a Uid,
    allow_benign_duplicates: bool,
    instance_reference_code: &'a ConceptCode,
    seen: HashSet<Uid>,
    refs: Vec<ScannedRef>,
}

impl Scan<'_> {
    fn walk_children(&mut self, item: &ContentItem, path: &str, out: &mut ValidationResult) {
        for (index, child) in item.children().iter().enumerate() {
            let child_path = location::content_child(path, child, index);
            self.visit(child, &child_path, out);
            self.walk_children(child, &child_path, out);
        }
    }

    fn visit(&mut self, item: &ContentItem, path: &str, out: &mut ValidationResult) {
        match &item.value {
            ContentValue::ImageRef {
                sop_class_uid,
                sop_instance_uid,
                ..
            }
            | ContentValue::CompositeRef {
                sop_class_uid,
                sop_instance_uid,
            } => {
                self.primary_reference(sop_class_uid, sop_instance_uid, path, out);
            }
            ContentValue::UidRef { uid } => {
                if item.concept_matches(self.instance_reference_code) {
                    self.uid_reference(uid, path);
                }
            }
            _ => {}
        }
    }

    fn primary_reference(
        &mut self,
        sop_class_uid: &Uid,
        sop_instance_uid: &Uid,
        path: &str,
        out: &mut ValidationResult,
    ) {
        if sop_instance_uid == self.self_uid && !self.self_uid.is_empty() {
            out.add_error(
                path,
                format!(
                    "document references its own SOP instance UID {sop_instance_uid}"
                ),
            );
            return;
        }

        if self.seen.contains(sop_instance_uid) {
            if !self.allow_benign_duplicates {
                out.add_warning(
                    path,
                    format!("duplicate reference to instance {sop_instance_uid}"),
                );
            }
            return;
        }

        self.seen.insert(sop_instance_uid.clone());
        self.refs.push(ScannedRef {
            sop_class_uid: Some(sop_class_uid.clone()),
            sop_instance_uid: sop_instance_uid.clone(),
            location: path.to_string(),
            channel: ReferenceChannel::Primary,
        });
    }

    fn uid_reference(&mut self, uid: &Uid, path: &str) {
        // Secondary channel: no self/duplicate policing, but the set still
        // holds each instance once.
        if self.seen.insert(uid.clone()) {
            self.refs.push(ScannedRef {
                sop_class_uid: None,
                sop_instance_uid: uid.clone(),
                location: path.to_string(),
                channel: ReferenceChannel::UidReference,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mado_core::code::codes;
    use mado_core::{ContinuityOfContent, RelationshipKind};

    fn root(children: Vec<ContentItem>) -> ContentItem {
        ContentItem::container(
            Some(codes::manifest()),
            None,
            ContinuityOfContent::Separate,
            children,
        )
    }

    fn image(uid: &str) -> ContentItem {
        ContentItem::image_ref(RelationshipKind::Contains, "1.2.840.10008.5.1.4.1.1.2", uid, None)
    }

    #[test]
    fn collects_references_in_traversal_order() {
        let tree = root(vec![image("1.1"), image("1.2"), image("1.3")]);
        let mut out = ValidationResult::new();
        let refs = scan_references(&tree, &Uid::new("9.9"), false, &codes::referenced_instance(), &mut out);

        let uids: Vec<_> = refs.iter().map(|r| r.sop_instance_uid.as_str()).collect();
        assert_eq!(uids, ["1.1", "1.2", "1.3"]);
        assert!(out.is_empty());
    }

    #[test]
    fn self_reference_is_an_error_per_occurrence() {
        let tree = root(vec![image("9.9"), image("1.2"), image("9.9")]);
        let mut out = ValidationResult::new();
        let refs = scan_references(&tree, &Uid::new("9.9"), false, &codes::referenced_instance(), &mut out);

        assert_eq!(out.errors().len(), 2);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].sop_instance_uid.as_str(), "1.2");
    }

    #[test]
    fn duplicates_warn_unless_benign() {
        let tree = root(vec![image("1.1"), image("1.1")]);

        let mut strict = ValidationResult::new();
        let refs = scan_references(&tree, &Uid::new("9.9"), false, &codes::referenced_instance(), &mut strict);
        assert_eq!(strict.warnings().len(), 1);
        assert_eq!(refs.len(), 1);

        let mut lenient = ValidationResult::new();
        let refs = scan_references(&tree, &Uid::new("9.9"), true, &codes::referenced_instance(), &mut lenient);
        assert!(lenient.is_empty());
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn instance_reference_uidrefs_join_the_set() {
        let tree = root(vec![
            ContentItem::uid_ref(
                Some(codes::referenced_instance()),
                RelationshipKind::Contains,
                "1.5",
            ),
            // A study-UID reference is not an instance reference.
            ContentItem::uid_ref(
                Some(codes::study_instance_uid()),
                RelationshipKind::HasProperties,
                "1.6",
            ),
        ]);
        let mut out = ValidationResult::new();
        let refs = scan_references(&tree, &Uid::new("9.9"), false, &codes::referenced_instance(), &mut out);

        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].sop_instance_uid.as_str(), "1.5");
        assert_eq!(refs[0].channel, ReferenceChannel::UidReference);
        assert!(refs[0].sop_class_uid.is_none());
    }

    #[test]
    fn nested_containers_are_walked_depth_first() {
        let tree = root(vec![
            ContentItem::container(
                Some(codes::image_library()),
                Some(RelationshipKind::Contains),
                ContinuityOfContent::Separate,
                vec![image("2.1")],
            ),
            image("2.2"),
        ]);
        let mut out = ValidationResult::new();
        let refs = scan_references(&tree, &Uid::new("9.9"), false, &codes::referenced_instance(), &mut out);

        let uids: Vec<_> = refs.iter().map(|r| r.sop_instance_uid.as_str()).collect();
        assert_eq!(uids, ["2.1", "2.2"]);
        assert!(refs[0].location.starts_with("Content/ImageLibrary[0]/"));
    }
}
