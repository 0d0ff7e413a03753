//! # Findings and the Validation Result
//!
//! Categorized conformance findings and the append-only, mergeable
//! accumulator the engine returns. The accumulator is the engine's only
//! output type: validators never abort on data-shape problems, they append
//! a finding and continue, so one run reports every issue at once.
//!
//! ## Serialization contract
//!
//! A [`ValidationResult`] serializes as three ordered lists (`errors`,
//! `warnings`, `info`), each entry `{severity, message, location}`.
//! Ordering is stable across runs on the same input, which keeps snapshot
//! tests byte-identical.

use serde::{Deserialize, Serialize};

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A conformance rule violation. Any error makes the document invalid.
    Error,
    /// A tolerated rule violation worth flagging.
    Warning,
    /// A diagnostic note with no bearing on validity.
    Info,
}

impl Severity {
    /// Lowercase diagnostic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One categorized finding with a stable location path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The finding's severity.
    pub severity: Severity,
    /// Human-readable description of what was found.
    pub message: String,
    /// Dot/bracket path to the node or attribute the finding concerns,
    /// e.g. `Evidence.Study[0].Series[2]` or `Content/ImageLibrary[0]`.
    pub location: String,
}

impl Finding {
    /// Build an error finding.
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            location: location.into(),
        }
    }

    /// Build a warning finding.
    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            location: location.into(),
        }
    }

    /// Build an informational finding.
    pub fn info(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            location: location.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

/// Append-only, mergeable collection of findings, bucketed by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
    info: Vec<Finding>,
}

impl ValidationResult {
    /// An empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding to its severity bucket.
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
            Severity::Info => self.info.push(finding),
        }
    }

    /// Append an error finding.
    pub fn add_error(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.push(Finding::error(location, message));
    }

    /// Append a warning finding.
    pub fn add_warning(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.push(Finding::warning(location, message));
    }

    /// Append an informational finding.
    pub fn add_info(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.push(Finding::info(location, message));
    }

    /// Concatenate another result onto this one. Merge order does not
    /// affect validity, only the order findings are listed.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.info.extend(other.info);
    }

    /// Whether the document passed: no error findings.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error findings, in the order they were appended.
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    /// Warning findings, in the order they were appended.
    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    /// Informational findings, in the order they were appended.
    pub fn info(&self) -> &[Finding] {
        &self.info
    }

    /// Total number of findings across all severities.
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    /// Whether no findings were recorded at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate all findings, errors first, then warnings, then info.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.info.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_routes_by_severity() {
        let mut result = ValidationResult::new();
        result.add_error("Content", "broken");
        result.add_warning("Evidence.Study[0]", "odd");
        result.add_info("Document", "note");

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.warnings().len(), 1);
        assert_eq!(result.info().len(), 1);
        assert!(!result.is_valid());
    }

    #[test]
    fn merge_concatenates_in_order() {
        let mut a = ValidationResult::new();
        a.add_error("X", "first");
        let mut b = ValidationResult::new();
        b.add_error("Y", "second");
        b.add_warning("Z", "third");

        a.merge(b);
        assert_eq!(a.errors().len(), 2);
        assert_eq!(a.errors()[0].location, "X");
        assert_eq!(a.errors()[1].location, "Y");
        assert_eq!(a.warnings().len(), 1);
    }

    #[test]
    fn empty_result_is_valid() {
        assert!(ValidationResult::new().is_valid());
        assert!(ValidationResult::new().is_empty());
    }

    #[test]
    fn serializes_as_three_lists() {
        let mut result = ValidationResult::new();
        result.add_error("Content", "broken");
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("errors").unwrap().is_array());
        assert!(json.get("warnings").unwrap().is_array());
        assert!(json.get("info").unwrap().is_array());
        assert_eq!(json["errors"][0]["severity"], "error");
        assert_eq!(json["errors"][0]["location"], "Content");
    }
}
