//! Candidate validation and exclusion accounting
//!
//! A pure predicate: the same candidate and mapping always produce the same
//! verdict, with no side effects. The pipeline counts rejections in one
//! aggregate counter; a rejection never aborts the run.

use std::collections::BTreeMap;

use crate::continent::Continent;
use crate::model::GeoCandidate;

/// Why a candidate was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No entry in the continent mapping for this key
    MissingClassification,
    /// Mapped to a continent outside the permitted set (e.g. Antarctica)
    ExcludedClassification,
    /// A mandatory field is empty
    MissingField,
}

/// Accept or reject a merged candidate.
///
/// Mandatory fields are the English and German country and capital names;
/// the continent pair is guaranteed by successful classification.
pub fn validate(
    candidate: &GeoCandidate,
    continents: &BTreeMap<String, String>,
) -> Result<Continent, Rejection> {
    let continent_en = continents
        .get(&candidate.id)
        .ok_or(Rejection::MissingClassification)?;

    let continent = Continent::from_en(continent_en).ok_or(Rejection::ExcludedClassification)?;

    let mandatory = [
        &candidate.country_en,
        &candidate.country_de,
        &candidate.capital_en,
        &candidate.capital_de,
    ];
    if mandatory.iter().any(|field| field.is_empty()) {
        return Err(Rejection::MissingField);
    }

    Ok(continent)
}
