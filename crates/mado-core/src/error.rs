//! # Hard-Failure Errors
//!
//! Structured error types built with `thiserror`. No `Box<dyn Error>`,
//! no `.unwrap()` outside tests.
//!
//! The conformance engine has exactly one hard-failure condition:
//! [`MalformedInput`], raised before any validator runs, when the parsed
//! document is too broken to attach path-based diagnostics to. Every
//! other problem — structural violations, broken cross-references, bad
//! addressing — degrades to a finding and the pipeline continues.

use thiserror::Error;

use crate::content::ContentItemKind;

/// The document-parsing collaborator produced something the engine cannot
/// meaningfully walk. Surfaced to the caller instead of a finding list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedInput {
    /// The content root is not a container item.
    #[error("content root must be a CONTAINER item, found {kind}")]
    RootNotContainer {
        /// The kind the root actually has.
        kind: ContentItemKind,
    },

    /// The content tree is deeper than the defensive recursion bound.
    #[error("content tree exceeds maximum depth {limit}")]
    DepthExceeded {
        /// The configured depth limit.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_kind() {
        let err = MalformedInput::RootNotContainer {
            kind: ContentItemKind::Text,
        };
        assert_eq!(err.to_string(), "content root must be a CONTAINER item, found TEXT");
    }
}
