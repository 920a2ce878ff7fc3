use oxc_index::IndexVec;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use wirepack_error::SerializeError;

use crate::{DependencyEdge, Module, ModuleId, ModuleIdx};

/// The resolved module graph of one bundle request.
///
/// Modules live in an arena addressed by `ModuleIdx`. Edges keep the target's `ModuleId` and are
/// resolved against the arena on demand, so a graph with a dangling edge can still be built and
/// only fails once a traversal reaches the edge.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawModuleGraph")]
pub struct ModuleGraph {
  entry_point: ModuleId,
  modules: IndexVec<ModuleIdx, Module>,
  idx_by_id: FxHashMap<ModuleId, ModuleIdx>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawModuleGraph {
  entry_point: ModuleId,
  modules: Vec<Module>,
}

impl From<RawModuleGraph> for ModuleGraph {
  fn from(raw: RawModuleGraph) -> Self {
    Self::new(raw.entry_point, raw.modules)
  }
}

impl ModuleGraph {
  pub fn new(entry_point: impl Into<ModuleId>, modules: impl IntoIterator<Item = Module>) -> Self {
    let mut graph =
      Self { entry_point: entry_point.into(), modules: IndexVec::new(), idx_by_id: FxHashMap::default() };
    for module in modules {
      graph.insert(module);
    }
    graph
  }

  /// Adds `module`, replacing a previous module with the same id in place.
  pub fn insert(&mut self, module: Module) -> ModuleIdx {
    if let Some(&idx) = self.idx_by_id.get(&module.id) {
      self.modules[idx] = module;
      return idx;
    }
    let id = module.id.clone();
    let idx = self.modules.push(module);
    self.idx_by_id.insert(id, idx);
    idx
  }

  pub fn entry_point(&self) -> &ModuleId {
    &self.entry_point
  }

  pub fn modules(&self) -> &IndexVec<ModuleIdx, Module> {
    &self.modules
  }

  pub fn module(&self, idx: ModuleIdx) -> &Module {
    &self.modules[idx]
  }

  pub fn idx_of(&self, id: &str) -> Option<ModuleIdx> {
    self.idx_by_id.get(id).copied()
  }

  pub fn get(&self, id: &str) -> Option<&Module> {
    self.idx_of(id).map(|idx| &self.modules[idx])
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  pub fn resolve_dependency(
    &self,
    importer: &Module,
    edge: &DependencyEdge,
  ) -> Result<ModuleIdx, SerializeError> {
    self.idx_of(&edge.target).ok_or_else(|| SerializeError::UnresolvedModule {
      importer: importer.id.to_string(),
      target: edge.target.to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolves_edges_against_the_arena() {
    let graph = ModuleGraph::new("/app/index.js", [
      Module::new("/app/index.js", "").with_dependency(DependencyEdge::sync("/app/foo.js")),
      Module::new("/app/foo.js", ""),
    ]);

    let index = graph.get("/app/index.js").unwrap();
    let foo = graph.resolve_dependency(index, &index.dependencies[0]).unwrap();
    assert_eq!(graph.module(foo).id.as_ref(), "/app/foo.js");
    assert_eq!(graph.len(), 2);
  }

  #[test]
  fn dangling_edges_fail_on_resolution() {
    let graph = ModuleGraph::new("/app/index.js", [
      Module::new("/app/index.js", "").with_dependency(DependencyEdge::sync("/app/missing.js"))
    ]);

    let index = graph.get("/app/index.js").unwrap();
    let error = graph.resolve_dependency(index, &index.dependencies[0]).unwrap_err();
    assert!(matches!(
      error,
      SerializeError::UnresolvedModule { importer, target }
        if importer == "/app/index.js" && target == "/app/missing.js"
    ));
  }

  #[test]
  fn later_duplicates_replace_earlier_ones() {
    let graph = ModuleGraph::new("/app/index.js", [
      Module::new("/app/index.js", "old"),
      Module::new("/app/index.js", "new"),
    ]);

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.get("/app/index.js").unwrap().source, "new");
  }

  #[test]
  fn deserializes_from_json() {
    let graph: ModuleGraph = serde_json::from_str(
      r#"{ "entryPoint": "/app/index.js", "modules": [{ "id": "/app/index.js", "source": "" }] }"#,
    )
    .unwrap();

    assert_eq!(graph.entry_point().as_ref(), "/app/index.js");
    assert!(graph.idx_of("/app/index.js").is_some());
  }
}
