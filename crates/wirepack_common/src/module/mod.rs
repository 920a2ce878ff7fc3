pub mod output_type;

use std::{borrow::Cow, path::Path};

use serde::{Deserialize, Serialize};

use crate::{DependencyEdge, ModuleId, OutputType};

/// One transformed module as handed over by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
  pub id: ModuleId,
  pub source: String,
  /// In declaration order. The position of an edge is its index in the module's dependency map.
  #[serde(default)]
  pub dependencies: Vec<DependencyEdge>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(default)]
  pub output_type: OutputType,
}

impl Module {
  pub fn new(id: impl Into<ModuleId>, source: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      source: source.into(),
      dependencies: vec![],
      display_name: None,
      output_type: OutputType::Js,
    }
  }

  #[must_use]
  pub fn with_dependency(mut self, edge: DependencyEdge) -> Self {
    self.dependencies.push(edge);
    self
  }

  #[must_use]
  pub fn with_output_type(mut self, output_type: OutputType) -> Self {
    self.output_type = output_type;
    self
  }

  #[must_use]
  pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
    self.display_name = Some(display_name.into());
    self
  }

  /// The name shown to humans: the resolver-provided one, else the id relative to `server_root`.
  pub fn display_name(&self, server_root: &Path) -> Cow<'_, str> {
    self
      .display_name
      .as_deref()
      .map_or_else(|| Cow::Owned(self.id.stabilize(server_root)), Cow::Borrowed)
  }
}
