//! @acp:module "Recommendation Input"
//! @acp:summary "Load recommendation working sets from JSON or YAML"
//! @acp:domain roadmap
//! @acp:layer io
//!
//! Accepts either a bare array of recommendations or an object with a
//! `recommendations` array. Missing optional fields take their defaults.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::error::RoadmapError;
use crate::model::Recommendation;

/// Serialization format of a recommendation file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Format implied by a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        ext.parse::<InputFormat>()
            .map_err(|_| anyhow::Error::from(RoadmapError::UnsupportedFormat(format!("{:?}", path))))
    }
}

impl FromStr for InputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            _ => Err(anyhow!("Unknown input format: {}", s)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendationDocument {
    List(Vec<Recommendation>),
    Wrapped { recommendations: Vec<Recommendation> },
}

impl RecommendationDocument {
    fn into_vec(self) -> Vec<Recommendation> {
        match self {
            RecommendationDocument::List(recs) => recs,
            RecommendationDocument::Wrapped { recommendations } => recommendations,
        }
    }
}

/// @acp:summary "Parse recommendations from text"
pub fn parse_recommendations(text: &str, format: InputFormat) -> Result<Vec<Recommendation>> {
    let document: RecommendationDocument = match format {
        InputFormat::Json => {
            serde_json::from_str(text).context("Failed to parse recommendations as JSON")?
        }
        InputFormat::Yaml => {
            serde_yaml::from_str(text).context("Failed to parse recommendations as YAML")?
        }
    };

    let recs = document.into_vec();
    tracing::debug!("Parsed {} recommendations", recs.len());
    Ok(recs)
}

/// @acp:summary "Load recommendations from a .json, .yaml or .yml file"
pub fn load_recommendations<P: AsRef<Path>>(path: P) -> Result<Vec<Recommendation>> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read recommendations from {:?}", path))?;
    parse_recommendations(&text, format)
        .with_context(|| format!("Invalid recommendations file {:?}", path))
}
