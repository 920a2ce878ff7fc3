use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportKind {
  /// `_$$_REQUIRE(dependencyMap[0], "./foo")`
  #[default]
  Import,
  /// `import('foo')`
  DynamicImport,
}

impl ImportKind {
  pub fn is_static(&self) -> bool {
    matches!(self, Self::Import)
  }
}
