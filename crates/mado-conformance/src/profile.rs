//! # Validation Profiles
//!
//! The closed set of conformance profiles a caller may request, and the
//! per-profile configuration the orchestrator resolves once at the start
//! of a run. Profile differences are data, not branching logic: the
//! expected document title, the duplicate-reference policy, and which rule
//! table rows apply.

use thiserror::Error;

use mado_core::code::{codes, ConceptCode};

/// A requested conformance profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationProfile {
    /// Plain manifest: strict reference discipline, no description item.
    Manifest,
    /// Manifest with a key-object description; tolerates benign repeated
    /// references (the same object shown from two structural positions).
    ManifestWithDescription,
}

impl ValidationProfile {
    /// All supported profiles, in canonical order.
    pub fn all() -> &'static [ValidationProfile] {
        &[Self::Manifest, Self::ManifestWithDescription]
    }

    /// Canonical identifier of the profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::ManifestWithDescription => "manifest-with-description",
        }
    }
}

impl std::fmt::Display for ValidationProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The requested profile identifier is not one of the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown validation profile \"{0}\" (supported: manifest, manifest-with-description)")]
pub struct UnknownProfile(pub String);

impl std::str::FromStr for ValidationProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manifest" => Ok(Self::Manifest),
            "manifest-with-description" => Ok(Self::ManifestWithDescription),
            other => Err(UnknownProfile(other.to_string())),
        }
    }
}

/// Per-profile configuration, resolved once at orchestration start.
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// The profile this configuration was resolved from.
    pub profile: ValidationProfile,
    /// Expected concept name of the content root.
    pub document_title: ConceptCode,
    /// Whether repeated image/composite references are legitimate for this
    /// profile. An explicit flag rather than something inferred from the
    /// detected dialect: the duplicate policy is a profile decision layered
    /// on top of the structural rules.
    pub allow_benign_duplicates: bool,
    /// Whether the rule table must require a description item.
    pub requires_description: bool,
    /// Concept name marking a UIDREF node as the secondary
    /// instance-reference channel for this profile.
    pub instance_reference_code: ConceptCode,
}

impl ProfileConfig {
    /// Resolve the static configuration for a profile.
    pub fn resolve(profile: ValidationProfile) -> Self {
        match profile {
            ValidationProfile::Manifest => Self {
                profile,
                document_title: codes::manifest(),
                allow_benign_duplicates: false,
                requires_description: false,
                instance_reference_code: codes::referenced_instance(),
            },
            ValidationProfile::ManifestWithDescription => Self {
                profile,
                document_title: codes::manifest(),
                allow_benign_duplicates: true,
                requires_description: true,
                instance_reference_code: codes::referenced_instance(),
            },
        }
    }
}
