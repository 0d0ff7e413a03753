//! # Content Tree Model
//!
//! Typed in-memory representation of a manifest's hierarchical document
//! body: a recursive tree of content items, each carrying a concept name,
//! a relationship to its parent, and a value.
//!
//! The model mirrors what the external document parser materializes. It is
//! deliberately permissive — the invariants the format demands (root is a
//! container, every non-root item carries a relationship) are *checked* by
//! the conformance engine, not enforced by construction, so that a broken
//! document can still be walked and diagnosed end to end.

use serde::{Deserialize, Serialize};

use crate::code::ConceptCode;
use crate::uid::Uid;

/// Relationship of a content item to its parent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipKind {
    /// Parent container contains this item.
    Contains,
    /// Item states a property of the parent.
    HasProperties,
    /// Item states acquisition context of the parent.
    HasAcqContext,
    /// Item modifies the parent's concept name.
    HasConceptMod,
    /// Parent was inferred from this item.
    InferredFrom,
    /// Parent was selected from this item.
    SelectedFrom,
}

impl RelationshipKind {
    /// Canonical wire spelling of the relationship.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "CONTAINS",
            Self::HasProperties => "HAS PROPERTIES",
            Self::HasAcqContext => "HAS ACQ CONTEXT",
            Self::HasConceptMod => "HAS CONCEPT MOD",
            Self::InferredFrom => "INFERRED FROM",
            Self::SelectedFrom => "SELECTED FROM",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a container's children form one continuous statement or a set
/// of separate ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContinuityOfContent {
    /// Children are independent items.
    Separate,
    /// Children form continuous prose.
    Continuous,
}

/// The value carried by a content item, one variant per item kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentValue {
    /// A container of further items.
    Container {
        /// Continuity-of-content attribute; every container declares one.
        continuity: ContinuityOfContent,
        /// Child items in document order.
        children: Vec<ContentItem>,
    },
    /// Free text.
    Text {
        /// The text value.
        value: String,
    },
    /// A coded value.
    Code {
        /// The coded value.
        value: ConceptCode,
    },
    /// A decimal number.
    Num {
        /// The numeric value.
        value: f64,
    },
    /// A bare UID reference.
    UidRef {
        /// The referenced UID.
        uid: Uid,
    },
    /// A reference to an image object, optionally frame-qualified.
    ImageRef {
        /// SOP class of the referenced object.
        sop_class_uid: Uid,
        /// SOP instance of the referenced object.
        sop_instance_uid: Uid,
        /// Referenced frame within a multi-frame object.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        frame_number: Option<u32>,
    },
    /// A reference to a non-image composite object.
    CompositeRef {
        /// SOP class of the referenced object.
        sop_class_uid: Uid,
        /// SOP instance of the referenced object.
        sop_instance_uid: Uid,
    },
}

/// Discriminant of [`ContentValue`], used by rule tables and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentItemKind {
    /// Container item.
    Container,
    /// Text item.
    Text,
    /// Code item.
    Code,
    /// Numeric item.
    Num,
    /// UID reference item.
    UidRef,
    /// Image reference item.
    ImageRef,
    /// Composite reference item.
    CompositeRef,
}

impl ContentItemKind {
    /// Short diagnostic name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Container => "CONTAINER",
            Self::Text => "TEXT",
            Self::Code => "CODE",
            Self::Num => "NUM",
            Self::UidRef => "UIDREF",
            Self::ImageRef => "IMAGE",
            Self::CompositeRef => "COMPOSITE",
        }
    }
}

impl std::fmt::Display for ContentItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Concept name of the item. The root carries the document title;
    /// an absent concept on a rule-governed node is a conformance finding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<ConceptCode>,
    /// Relationship to the parent. `None` on the root item only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipKind>,
    /// The item's value.
    #[serde(flatten)]
    pub value: ContentValue,
}

impl ContentItem {
    /// Build a container item.
    pub fn container(
        concept: Option<ConceptCode>,
        relationship: Option<RelationshipKind>,
        continuity: ContinuityOfContent,
        children: Vec<ContentItem>,
    ) -> Self {
        Self {
            concept,
            relationship,
            value: ContentValue::Container {
                continuity,
                children,
            },
        }
    }

    /// Build a text item.
    pub fn text(
        concept: Option<ConceptCode>,
        relationship: RelationshipKind,
        value: impl Into<String>,
    ) -> Self {
        Self {
            concept,
            relationship: Some(relationship),
            value: ContentValue::Text {
                value: value.into(),
            },
        }
    }

    /// Build a code item.
    pub fn code(
        concept: Option<ConceptCode>,
        relationship: RelationshipKind,
        value: ConceptCode,
    ) -> Self {
        Self {
            concept,
            relationship: Some(relationship),
            value: ContentValue::Code { value },
        }
    }

    /// Build a numeric item.
    pub fn num(concept: Option<ConceptCode>, relationship: RelationshipKind, value: f64) -> Self {
        Self {
            concept,
            relationship: Some(relationship),
            value: ContentValue::Num { value },
        }
    }

    /// Build a UID reference item.
    pub fn uid_ref(
        concept: Option<ConceptCode>,
        relationship: RelationshipKind,
        uid: impl Into<Uid>,
    ) -> Self {
        Self {
            concept,
            relationship: Some(relationship),
            value: ContentValue::UidRef { uid: uid.into() },
        }
    }

    /// Build an image reference item.
    pub fn image_ref(
        relationship: RelationshipKind,
        sop_class_uid: impl Into<Uid>,
        sop_instance_uid: impl Into<Uid>,
        frame_number: Option<u32>,
    ) -> Self {
        Self {
            concept: None,
            relationship: Some(relationship),
            value: ContentValue::ImageRef {
                sop_class_uid: sop_class_uid.into(),
                sop_instance_uid: sop_instance_uid.into(),
                frame_number,
            },
        }
    }

    /// Build a composite reference item.
    pub fn composite_ref(
        relationship: RelationshipKind,
        sop_class_uid: impl Into<Uid>,
        sop_instance_uid: impl Into<Uid>,
    ) -> Self {
        Self {
            concept: None,
            relationship: Some(relationship),
            value: ContentValue::CompositeRef {
                sop_class_uid: sop_class_uid.into(),
                sop_instance_uid: sop_instance_uid.into(),
            },
        }
    }

    /// The item's kind discriminant.
    pub fn kind(&self) -> ContentItemKind {
        match &self.value {
            ContentValue::Container { .. } => ContentItemKind::Container,
            ContentValue::Text { .. } => ContentItemKind::Text,
            ContentValue::Code { .. } => ContentItemKind::Code,
            ContentValue::Num { .. } => ContentItemKind::Num,
            ContentValue::UidRef { .. } => ContentItemKind::UidRef,
            ContentValue::ImageRef { .. } => ContentItemKind::ImageRef,
            ContentValue::CompositeRef { .. } => ContentItemKind::CompositeRef,
        }
    }

    /// Whether the item is a container.
    pub fn is_container(&self) -> bool {
        matches!(self.value, ContentValue::Container { .. })
    }

    /// Child items, empty for non-containers.
    pub fn children(&self) -> &[ContentItem] {
        match &self.value {
            ContentValue::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// Whether the item's concept name matches the given code.
    pub fn concept_matches(&self, code: &ConceptCode) -> bool {
        self.concept.as_ref().is_some_and(|c| c.matches(code))
    }
}
