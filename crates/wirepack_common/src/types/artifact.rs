use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
  #[default]
  Js,
  Asset,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMetadata {
  pub is_async: bool,
  /// Filenames that have to be loaded, but not executed, before this artifact.
  pub requires: Vec<String>,
}

/// A deployable file. Its JSON shape is consumed by downstream tooling and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
  pub filename: String,
  #[serde(rename = "type")]
  pub kind: ArtifactType,
  pub source: String,
  pub origin_filename: String,
  pub metadata: ArtifactMetadata,
}
