//! # mado-cli — CLI Front End for the MADO Stack
//!
//! Thin wrapper over `mado-conformance`: decodes a JSON-materialized
//! manifest document, runs the requested profile, and renders the three
//! categorized finding lists. All validation logic lives in the engine;
//! this crate only does argument handling, decoding, and presentation.
//!
//! ## Exit codes
//!
//! - `0` — the document validated with no errors.
//! - `1` — the document produced error findings.
//! - `2` — the input was malformed beyond diagnosis (no usable content
//!   tree) or could not be read/decoded at all.

pub mod validate;

pub use validate::{run_validate, ValidateArgs};
