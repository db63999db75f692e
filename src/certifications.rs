use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, sync::LazyLock};
use thiserror::Error;

const CERTIFICATIONS_FILE: &str = "certifications.json";

static CERTIFICATIONS: LazyLock<Result<Vec<Certification>, DataError>> =
    LazyLock::new(|| {
        let file = DataAssets::get(CERTIFICATIONS_FILE).ok_or(DataError::NotFound)?;
        let json = std::str::from_utf8(&file.data).map_err(|e| DataError::Parse(e.to_string()))?;
        parse_certifications(json)
    });

#[derive(Embed)]
#[folder = "data"]
pub struct DataAssets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub issued: NaiveDate,
    pub credential_url: String,
    /// Badge image under the site root; cards fall back to a monogram.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("certification data not found")]
    NotFound,
    #[error("couldn't parse certification data: {0}")]
    Parse(String),
    #[error("no certifications to show")]
    Empty,
    #[error("duplicate certification id: {0}")]
    DuplicateId(String),
}

/// Parse a JSON certification list, checking it can back a carousel:
/// at least one entry and unique ids.
pub fn parse_certifications(json: &str) -> Result<Vec<Certification>, DataError> {
    let certs: Vec<Certification> =
        serde_json::from_str(json).map_err(|e| DataError::Parse(e.to_string()))?;
    if certs.is_empty() {
        return Err(DataError::Empty);
    }
    let mut seen = HashSet::new();
    for cert in &certs {
        if !seen.insert(cert.id.as_str()) {
            return Err(DataError::DuplicateId(cert.id.clone()));
        }
    }
    Ok(certs)
}

impl Certification {
    /// Up to two initials of the issuer, for cards without a badge image.
    pub fn monogram(&self) -> String {
        self.issuer
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The embedded certification list, parsed once.
pub fn load_certifications() -> Result<Vec<Certification>, DataError> {
    CERTIFICATIONS.clone()
}
