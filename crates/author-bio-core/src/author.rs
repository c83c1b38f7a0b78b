//! Author records supplied by the host.

use serde::{Deserialize, Serialize};

use crate::error::BioResult;

/// The `{ name, bio }` record describing a content author.
///
/// Both fields are optional. `null` and a missing key mean the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    /// Display name of the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short biography shown after the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl AuthorInfo {
    /// Create a record with both fields set.
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            bio: Some(bio.into()),
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the biography.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Whether the record carries a non-empty name.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Parse a single record. Blank input is the omitted author.
    pub fn from_json(input: &str) -> BioResult<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(input)?)
    }

    /// Parse either a single record or an array of records.
    ///
    /// A single record yields a one-element list. Blank input yields one
    /// empty record.
    pub fn from_json_many(input: &str) -> BioResult<Vec<Self>> {
        let trimmed = input.trim_start();
        if trimmed.is_empty() {
            return Ok(vec![Self::default()]);
        }
        if trimmed.starts_with('[') {
            return Ok(serde_json::from_str(input)?);
        }
        Ok(vec![serde_json::from_str(input)?])
    }
}
