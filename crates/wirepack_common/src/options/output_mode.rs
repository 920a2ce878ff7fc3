use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// How the serializer shapes its output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
  /// One self-contained bundle string, dynamic imports are not split.
  #[default]
  Classic,
  /// Split artifacts with content-addressed filenames, one per chunk.
  Static,
}

impl OutputMode {
  #[inline]
  pub fn is_split(&self) -> bool {
    matches!(self, Self::Static)
  }
}

impl Display for OutputMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Classic => write!(f, "classic"),
      Self::Static => write!(f, "static"),
    }
  }
}
