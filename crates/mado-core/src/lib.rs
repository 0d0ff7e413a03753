#![deny(missing_docs)]

//! # mado-core — Foundational Types for the MADO Stack
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `serde_json`,
//! and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`Uid`] is a distinct
//!    type, not a bare `String`. UIDs are *not* validated at construction:
//!    documents arrive from an untrusted upstream parser, and a malformed
//!    identifier must surface as a categorized finding, never as a
//!    constructor failure halfway through decoding.
//!
//! 2. **The document model is immutable reference data.** A
//!    [`ManifestDocument`] is built once per validation run and never
//!    mutated by any validator. There is no cache and no shared state, so
//!    validating N independent documents in parallel needs no coordination.
//!
//! 3. **Findings, not exceptions.** Conformance problems are collected in a
//!    [`ValidationResult`] — three ordered severity lists with stable
//!    location paths — so a single run reports every issue at once.
//!
//! 4. **[`MalformedInput`] is the only hard failure.** It is raised before
//!    validation starts, when no meaningful path-based diagnostics could be
//!    attached to the input at all.

pub mod code;
pub mod content;
pub mod document;
pub mod error;
pub mod evidence;
pub mod finding;
pub mod header;
pub mod uid;

// Re-export primary types at crate root for ergonomic imports.
pub use code::ConceptCode;
pub use content::{ContentItem, ContentItemKind, ContentValue, ContinuityOfContent, RelationshipKind};
pub use document::ManifestDocument;
pub use error::MalformedInput;
pub use evidence::{AddressingMode, EvidenceInstance, EvidenceSeries, EvidenceStudy, RetrievalAddress};
pub use finding::{Finding, Severity, ValidationResult};
pub use header::DocumentHeader;
pub use uid::Uid;
