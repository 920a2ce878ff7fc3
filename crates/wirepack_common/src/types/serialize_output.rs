use serde::{Deserialize, Serialize};

use crate::Artifact;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitBundle {
  pub artifacts: Vec<Artifact>,
  pub assets: Vec<Artifact>,
}

/// Result of one serialize call: a bundle string in classic mode, artifacts in static mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerializeOutput {
  Bundle(String),
  Split(SplitBundle),
}

impl SerializeOutput {
  pub fn as_bundle(&self) -> Option<&str> {
    match self {
      Self::Bundle(code) => Some(code),
      Self::Split(_) => None,
    }
  }

  pub fn as_split(&self) -> Option<&SplitBundle> {
    match self {
      Self::Split(bundle) => Some(bundle),
      Self::Bundle(_) => None,
    }
  }

  pub fn into_split(self) -> Option<SplitBundle> {
    match self {
      Self::Split(bundle) => Some(bundle),
      Self::Bundle(_) => None,
    }
  }
}

#[test]
fn test_untagged_serialization() {
  assert_eq!(serde_json::to_string(&SerializeOutput::Bundle("code".into())).unwrap(), r#""code""#);
  assert_eq!(
    serde_json::to_string(&SerializeOutput::Split(SplitBundle::default())).unwrap(),
    r#"{"artifacts":[],"assets":[]}"#
  );
}
