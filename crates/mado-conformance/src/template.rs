//! # Template Conformance
//!
//! Checks the content tree's shape against a declarative rule table for a
//! specific template dialect. Rules describe node shape — concept name,
//! allowed value kinds, cardinality, relationship — and nest: a rule for a
//! container carries the rules for that container's own children.
//!
//! Extra nodes no rule matches are permitted. The underlying templates are
//! additively extensible, so an unknown extension node never fails
//! validation; only missing or malformed *required* structure does.

use mado_core::{ConceptCode, ContentItem, ContentItemKind, ContentValue, RelationshipKind, ValidationResult};

use crate::location;

/// How many matches a rule demands within one sibling group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly `n` matching siblings.
    Exactly(usize),
    /// At least `n` matching siblings.
    AtLeast(usize),
    /// Zero or more matching siblings.
    Optional,
}

/// Rule-specific value predicate. Numeric and text values governed by a
/// rule have per-concept semantics, so each gets its own named check
/// rather than a generic comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCheck {
    /// No value constraint.
    None,
    /// A numeric item must equal the number of image-reference siblings in
    /// its container (the declared size of an image group).
    ImageCountMatchesSiblings,
}

/// Declarative description of one rule-governed node position.
#[derive(Debug, Clone)]
pub struct TemplateRule {
    /// Path segment naming the position in finding locations.
    pub position: &'static str,
    /// Concept name that identifies matching siblings; `None` means the
    /// rule matches by allowed kind alone.
    pub required_concept: Option<ConceptCode>,
    /// Value kinds a matching node may have.
    pub allowed_kinds: &'static [ContentItemKind],
    /// Demanded number of matches.
    pub cardinality: Cardinality,
    /// Relationship a matching node must carry toward its parent.
    pub relationship: RelationshipKind,
    /// Value predicate applied to each matching node.
    pub value_check: ValueCheck,
    /// Rules applied, in turn, to the children of each matching container.
    pub children: Vec<TemplateRule>,
}

/// Check the content tree against a dialect's rule table.
///
/// The table's top-level rules govern the root container's children;
/// nested rules recurse into each matched container.
pub fn check_template(root: &ContentItem, rules: &[TemplateRule], out: &mut ValidationResult) {
    check_sibling_group(root, location::CONTENT_ROOT, rules, out);
}

fn check_sibling_group(
    container: &ContentItem,
    path: &str,
    rules: &[TemplateRule],
    out: &mut ValidationResult,
) {
    let children = container.children();

    for rule in rules {
        let matches: Vec<(usize, &ContentItem)> = children
            .iter()
            .enumerate()
            .filter(|&(_, child)| rule_matches(rule, child))
            .collect();

        check_cardinality(rule, matches.len(), path, out);

        for (index, child) in matches {
            let child_path = location::content_child(path, child, index);
            check_matched_node(rule, child, children, &child_path, out);
            if child.is_container() && !rule.children.is_empty() {
                check_sibling_group(child, &child_path, &rule.children, out);
            }
        }
    }
}

fn rule_matches(rule: &TemplateRule, child: &ContentItem) -> bool {
    match &rule.required_concept {
        Some(concept) => child.concept_matches(concept),
        None => rule.allowed_kinds.contains(&child.kind()),
    }
}

fn check_cardinality(rule: &TemplateRule, found: usize, path: &str, out: &mut ValidationResult) {
    let position = format!("{path}/{}", rule.position);
    match rule.cardinality {
        Cardinality::Exactly(expected) if found < expected => {
            out.add_error(
                position,
                format!(
                    "required {} item missing: found {found}, expected {expected}",
                    rule.position
                ),
            );
        }
        Cardinality::Exactly(expected) if found > expected => {
            out.add_error(
                position,
                format!(
                    "too many {} items: found {found}, expected {expected}",
                    rule.position
                ),
            );
        }
        Cardinality::AtLeast(minimum) if found < minimum => {
            out.add_error(
                position,
                format!(
                    "required {} item missing: found {found}, expected at least {minimum}",
                    rule.position
                ),
            );
        }
        _ => {}
    }
}

fn check_matched_node(
    rule: &TemplateRule,
    node: &ContentItem,
    siblings: &[ContentItem],
    path: &str,
    out: &mut ValidationResult,
) {
    if !rule.allowed_kinds.contains(&node.kind()) {
        let allowed = rule
            .allowed_kinds
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        out.add_error(
            path,
            format!("{} has value kind {}, allowed: {allowed}", rule.position, node.kind()),
        );
    }

    match node.relationship {
        Some(relationship) if relationship == rule.relationship => {}
        Some(relationship) => {
            out.add_error(
                path,
                format!(
                    "{} carries relationship {relationship}, expected {}",
                    rule.position, rule.relationship
                ),
            );
        }
        None => {
            out.add_error(
                path,
                format!("{} carries no relationship to its parent", rule.position),
            );
        }
    }

    check_value(rule, node, siblings, path, out);
}

fn check_value(
    rule: &TemplateRule,
    node: &ContentItem,
    siblings: &[ContentItem],
    path: &str,
    out: &mut ValidationResult,
) {
    match rule.value_check {
        ValueCheck::None => {}
        ValueCheck::ImageCountMatchesSiblings => {
            let ContentValue::Num { value } = &node.value else {
                return; // kind mismatch already reported
            };
            let value = *value;
            let image_count = siblings
                .iter()
                .filter(|s| s.kind() == ContentItemKind::ImageRef)
                .count();
            if value != image_count as f64 {
                out.add_error(
                    path,
                    format!(
                        "declared image count {value} does not match {image_count} image reference(s) in the group"
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mado_core::code::codes;
    use mado_core::ContinuityOfContent;

    fn modality_rule() -> TemplateRule {
        TemplateRule {
            position: "Modality",
            required_concept: Some(codes::modality()),
            allowed_kinds: &[ContentItemKind::Code],
            cardinality: Cardinality::Exactly(1),
            relationship: RelationshipKind::HasAcqContext,
            value_check: ValueCheck::None,
            children: Vec::new(),
        }
    }

    fn root(children: Vec<ContentItem>) -> ContentItem {
        ContentItem::container(
            Some(codes::manifest()),
            None,
            ContinuityOfContent::Separate,
            children,
        )
    }

    fn modality_item() -> ContentItem {
        ContentItem::code(
            Some(codes::modality()),
            RelationshipKind::HasAcqContext,
            ConceptCode::new("CT", "DCM", "Computed Tomography"),
        )
    }

    #[test]
    fn missing_required_node_is_one_error() {
        let mut out = ValidationResult::new();
        check_template(&root(vec![]), &[modality_rule()], &mut out);
        assert_eq!(out.errors().len(), 1);
        assert_eq!(out.errors()[0].location, "Content/Modality");
    }

    #[test]
    fn satisfied_rule_produces_no_findings() {
        let mut out = ValidationResult::new();
        check_template(&root(vec![modality_item()]), &[modality_rule()], &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn wrong_kind_is_reported() {
        let item = ContentItem::text(
            Some(codes::modality()),
            RelationshipKind::HasAcqContext,
            "CT",
        );
        let mut out = ValidationResult::new();
        check_template(&root(vec![item]), &[modality_rule()], &mut out);
        assert_eq!(out.errors().len(), 1);
        assert!(out.errors()[0].message.contains("value kind TEXT"));
    }

    #[test]
    fn wrong_relationship_is_reported() {
        let item = ContentItem::code(
            Some(codes::modality()),
            RelationshipKind::Contains,
            ConceptCode::new("CT", "DCM", "Computed Tomography"),
        );
        let mut out = ValidationResult::new();
        check_template(&root(vec![item]), &[modality_rule()], &mut out);
        assert_eq!(out.errors().len(), 1);
        assert!(out.errors()[0].message.contains("CONTAINS"));
    }

    #[test]
    fn extra_unmatched_nodes_are_tolerated() {
        let extension = ContentItem::text(
            Some(ConceptCode::new("99999", "99LOCAL", "Private Extension")),
            RelationshipKind::Contains,
            "vendor data",
        );
        let mut out = ValidationResult::new();
        check_template(
            &root(vec![modality_item(), extension]),
            &[modality_rule()],
            &mut out,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn nested_rules_recurse_into_matched_containers() {
        let library = ContentItem::container(
            Some(codes::image_library()),
            Some(RelationshipKind::Contains),
            ContinuityOfContent::Separate,
            vec![], // modality missing inside
        );
        let table = vec![TemplateRule {
            position: "ImageLibrary",
            required_concept: Some(codes::image_library()),
            allowed_kinds: &[ContentItemKind::Container],
            cardinality: Cardinality::Exactly(1),
            relationship: RelationshipKind::Contains,
            value_check: ValueCheck::None,
            children: vec![modality_rule()],
        }];
        let mut out = ValidationResult::new();
        check_template(&root(vec![library]), &table, &mut out);
        assert_eq!(out.errors().len(), 1);
        assert_eq!(out.errors()[0].location, "Content/ImageLibrary[0]/Modality");
    }

    #[test]
    fn image_count_predicate_checks_siblings() {
        let group = ContentItem::container(
            Some(codes::image_library_group()),
            Some(RelationshipKind::Contains),
            ContinuityOfContent::Separate,
            vec![
                ContentItem::num(
                    Some(codes::number_of_images()),
                    RelationshipKind::HasProperties,
                    2.0,
                ),
                ContentItem::image_ref(RelationshipKind::Contains, "1.2", "1.3", None),
            ],
        );
        let table = vec![TemplateRule {
            position: "Group",
            required_concept: Some(codes::image_library_group()),
            allowed_kinds: &[ContentItemKind::Container],
            cardinality: Cardinality::Optional,
            relationship: RelationshipKind::Contains,
            value_check: ValueCheck::None,
            children: vec![TemplateRule {
                position: "NumberOfImages",
                required_concept: Some(codes::number_of_images()),
                allowed_kinds: &[ContentItemKind::Num],
                cardinality: Cardinality::Optional,
                relationship: RelationshipKind::HasProperties,
                value_check: ValueCheck::ImageCountMatchesSiblings,
                children: Vec::new(),
            }],
        }];
        let mut out = ValidationResult::new();
        check_template(&root(vec![group]), &table, &mut out);
        assert_eq!(out.errors().len(), 1);
        assert!(out.errors()[0].message.contains("declared image count 2"));
    }
}
