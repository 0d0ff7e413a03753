//! # mado-conformance — Profile-Driven Conformance Engine
//!
//! Validates materialized manifest documents against competing conformance
//! profiles, producing a categorized [`ValidationResult`] rather than a
//! single pass/fail bit.
//!
//! ## Pipeline
//!
//! [`validate`] composes the stages in a fixed order: header attribute
//! checks → dialect detection → template conformance against the detected
//! dialect's rule table → one reference-scanning walk of the content tree
//! → cross-consistency between content references and declared evidence →
//! retrieval addressing checks. Every stage appends to one accumulator;
//! none aborts on malformed content.
//!
//! ## Design
//!
//! - Validators are free functions over `(tree, evidence, config)`; the
//!   orchestrator concatenates their output. No validator hierarchy.
//! - Rule tables are plain immutable data ([`tables`]); adding a dialect
//!   means adding a table.
//! - The engine performs no I/O, holds no cache, and shares no state
//!   between runs, so independent documents validate in parallel with
//!   zero coordination.

pub mod attributes;
pub mod cross;
pub mod dialect;
pub mod location;
pub mod orchestrator;
pub mod profile;
pub mod retrieval;
pub mod scanner;
pub mod tables;
pub mod template;

pub use dialect::{detect_dialect, TemplateDialect};
pub use orchestrator::{validate, MAX_CONTENT_DEPTH};
pub use profile::{ProfileConfig, UnknownProfile, ValidationProfile};
pub use scanner::{ReferenceChannel, ScannedRef};
pub use template::{Cardinality, TemplateRule, ValueCheck};

// Re-export the result types callers consume alongside `validate`.
pub use mado_core::{Finding, MalformedInput, Severity, ValidationResult};
