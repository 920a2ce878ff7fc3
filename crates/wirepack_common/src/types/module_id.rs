use std::{borrow::Borrow, path::Path};

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};
use wirepack_utils::path_ext::PathExt;

/// `ModuleId` is the unique string identifier for each module: its absolute path.
/// - It is the key of the module in the graph and the id the runtime registers the module under.
/// - It is cheap to clone, so stages pass it around freely.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(ArcStr);

impl ModuleId {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  pub fn as_path(&self) -> &Path {
    Path::new(self.0.as_str())
  }

  /// The id relative to `root` with forward slashes, stable across machines and OSes.
  pub fn stabilize(&self, root: &Path) -> String {
    self.as_path().relative_slash(root)
  }

  pub fn as_arc_str(&self) -> &ArcStr {
    &self.0
  }
}

impl std::ops::Deref for ModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

impl Borrow<str> for ModuleId {
  fn borrow(&self) -> &str {
    self
  }
}

impl std::fmt::Display for ModuleId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<ArcStr> for ModuleId {
  fn from(value: ArcStr) -> Self {
    Self::new(value)
  }
}

impl From<&str> for ModuleId {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for ModuleId {
  fn from(value: String) -> Self {
    Self::new(value)
  }
}
