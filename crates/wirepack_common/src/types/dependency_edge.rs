use serde::{Deserialize, Serialize};

use crate::{ImportKind, ModuleId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
  pub target: ModuleId,
  #[serde(default)]
  pub kind: ImportKind,
}

impl DependencyEdge {
  /// A synchronous edge: `target` must be loaded before the importer executes.
  pub fn sync(target: impl Into<ModuleId>) -> Self {
    Self { target: target.into(), kind: ImportKind::Import }
  }

  /// A dynamic `import()` boundary.
  pub fn dynamic(target: impl Into<ModuleId>) -> Self {
    Self { target: target.into(), kind: ImportKind::DynamicImport }
  }

  #[inline]
  pub fn is_async(&self) -> bool {
    !self.kind.is_static()
  }
}
