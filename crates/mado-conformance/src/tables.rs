//! # Dialect Rule Tables
//!
//! The structural rule tables, one per template dialect. Tables are plain
//! immutable data built per run by constructor functions — adding a
//! dialect means adding a table here, not branching logic in the
//! validator.

use mado_core::code::codes;
use mado_core::{ContentItemKind, RelationshipKind};

use crate::dialect::TemplateDialect;
use crate::profile::ProfileConfig;
use crate::template::{Cardinality, TemplateRule, ValueCheck};

/// Resolve the rule table for a detected dialect under a profile.
///
/// The unknown dialect gets an empty table: no structural rules can be
/// applied, and the orchestrator has already recorded the diagnostic.
pub fn rules_for(dialect: TemplateDialect, config: &ProfileConfig) -> Vec<TemplateRule> {
    match dialect {
        TemplateDialect::TemplateFamilyA => template_family_a(config),
        TemplateDialect::LegacyExtendedAttributes => legacy_extended_attributes(config),
        TemplateDialect::Unknown => Vec::new(),
    }
}

/// The structural dialect: a manifest whose body is an image library of
/// grouped image references, each group sized and qualified.
fn template_family_a(config: &ProfileConfig) -> Vec<TemplateRule> {
    let mut rules = vec![TemplateRule {
        position: "ImageLibrary",
        required_concept: Some(codes::image_library()),
        allowed_kinds: &[ContentItemKind::Container],
        cardinality: Cardinality::Exactly(1),
        relationship: RelationshipKind::Contains,
        value_check: ValueCheck::None,
        children: vec![
            TemplateRule {
                position: "Modality",
                required_concept: Some(codes::modality()),
                allowed_kinds: &[ContentItemKind::Code],
                cardinality: Cardinality::Exactly(1),
                relationship: RelationshipKind::HasAcqContext,
                value_check: ValueCheck::None,
                children: Vec::new(),
            },
            TemplateRule {
                position: "Group",
                required_concept: Some(codes::image_library_group()),
                allowed_kinds: &[ContentItemKind::Container],
                cardinality: Cardinality::Optional,
                relationship: RelationshipKind::Contains,
                value_check: ValueCheck::None,
                children: vec![
                    TemplateRule {
                        position: "NumberOfImages",
                        required_concept: Some(codes::number_of_images()),
                        allowed_kinds: &[ContentItemKind::Num],
                        cardinality: Cardinality::Optional,
                        relationship: RelationshipKind::HasProperties,
                        value_check: ValueCheck::ImageCountMatchesSiblings,
                        children: Vec::new(),
                    },
                    TemplateRule {
                        position: "Entry",
                        required_concept: None,
                        allowed_kinds: &[ContentItemKind::ImageRef, ContentItemKind::CompositeRef],
                        cardinality: Cardinality::AtLeast(1),
                        relationship: RelationshipKind::Contains,
                        value_check: ValueCheck::None,
                        children: Vec::new(),
                    },
                ],
            },
        ],
    }];

    rules.push(study_uid_rule());
    if config.requires_description {
        rules.push(description_rule(Cardinality::Exactly(1)));
    }
    rules
}

/// Pre-template documents: no image library, only the root-level items
/// the legacy form carried.
fn legacy_extended_attributes(config: &ProfileConfig) -> Vec<TemplateRule> {
    let mut rules = vec![study_uid_rule()];
    if config.requires_description {
        rules.push(description_rule(Cardinality::Exactly(1)));
    }
    rules
}

fn study_uid_rule() -> TemplateRule {
    TemplateRule {
        position: "StudyUid",
        required_concept: Some(codes::study_instance_uid()),
        allowed_kinds: &[ContentItemKind::UidRef],
        cardinality: Cardinality::Optional,
        relationship: RelationshipKind::HasProperties,
        value_check: ValueCheck::None,
        children: Vec::new(),
    }
}

fn description_rule(cardinality: Cardinality) -> TemplateRule {
    TemplateRule {
        position: "Description",
        required_concept: Some(codes::key_object_description()),
        allowed_kinds: &[ContentItemKind::Text],
        cardinality,
        relationship: RelationshipKind::Contains,
        value_check: ValueCheck::None,
        children: Vec::new(),
    }
}
