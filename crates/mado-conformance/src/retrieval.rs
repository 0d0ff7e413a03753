//! # Retrieval Addressing Validation
//!
//! Per-series checks that the metadata describing *how to fetch* the
//! referenced objects is well-formed, plus the document-wide mixed-mode
//! check. The engine never retrieves anything; it only judges whether a
//! retriever could.

use std::collections::BTreeSet;

use mado_core::{AddressingMode, EvidenceStudy, RetrievalAddress, ValidationResult};
use url::Url;

use crate::location;

/// Validate retrieval addressing across the evidence hierarchy.
pub fn check_retrieval_addressing(evidence: &[EvidenceStudy], out: &mut ValidationResult) {
    // (location, modes) per series, for the mixed-mode pass.
    let mut series_modes: Vec<(String, BTreeSet<AddressingMode>)> = Vec::new();

    for (study_index, study) in evidence.iter().enumerate() {
        for (series_index, series) in study.series.iter().enumerate() {
            let series_path = location::series(study_index, series_index);

            if series.retrieval.is_empty() {
                out.add_error(series_path.as_str(), "series declares no retrieval address");
                continue;
            }

            for address in &series.retrieval {
                check_address(address, &series_path, out);
            }

            let modes: BTreeSet<AddressingMode> =
                series.retrieval.iter().map(RetrievalAddress::mode).collect();
            series_modes.push((series_path, modes));
        }
    }

    check_mixed_modes(&series_modes, out);

    let all_modes: BTreeSet<&'static str> = series_modes
        .iter()
        .flat_map(|(_, modes)| modes.iter().map(AddressingMode::as_str))
        .collect();
    if !all_modes.is_empty() {
        let listing = all_modes.into_iter().collect::<Vec<_>>().join(", ");
        out.add_info(
            location::EVIDENCE_ROOT,
            format!("retrieval addressing in use: {listing}"),
        );
    }
}

fn check_address(address: &RetrievalAddress, series_path: &str, out: &mut ValidationResult) {
    match address {
        RetrievalAddress::Url(raw) => match Url::parse(raw) {
            Ok(parsed) => {
                let scheme = parsed.scheme();
                let has_host = parsed.host_str().is_some_and(|h| !h.is_empty());
                if scheme != "http" && scheme != "https" {
                    out.add_error(
                        series_path,
                        format!("retrieve URL has unsupported scheme \"{scheme}\": {raw}"),
                    );
                } else if !has_host {
                    out.add_error(series_path, format!("retrieve URL has no host: {raw}"));
                } else if scheme == "http" {
                    out.add_warning(
                        series_path,
                        format!("retrieve URL uses http rather than https: {raw}"),
                    );
                }
            }
            Err(_) => {
                out.add_error(
                    series_path,
                    format!("retrieve URL is not an absolute URL: {raw}"),
                );
            }
        },
        RetrievalAddress::LocationUid(uid) => {
            if !uid.is_valid_syntax() {
                out.add_error(
                    series_path,
                    format!("retrieve location UID has invalid syntax: \"{uid}\""),
                );
            }
        }
        RetrievalAddress::Uri(raw) => {
            if raw.is_empty() {
                out.add_error(series_path, "retrieve URI is empty");
            }
        }
    }
}

/// Two series that share no addressing mode at all indicate a document
/// assembled from differently-conventioned sources. One warning per
/// document is enough; it names the first offending pair.
fn check_mixed_modes(series_modes: &[(String, BTreeSet<AddressingMode>)], out: &mut ValidationResult) {
    for (i, (path_a, modes_a)) in series_modes.iter().enumerate() {
        for (path_b, modes_b) in &series_modes[i + 1..] {
            if modes_a.is_disjoint(modes_b) {
                out.add_warning(
                    path_b.clone(),
                    format!(
                        "mixed retrieval addressing: this series shares no addressing mode with {path_a}"
                    ),
                );
                return;
            }
        }
    }
}
