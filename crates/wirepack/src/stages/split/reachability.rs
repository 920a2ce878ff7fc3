use wirepack_common::{DependencyEdge, ModuleGraph, ModuleIdx};
use wirepack_error::SerializeError;
use wirepack_utils::collections::FxIndexSet;

/// Depth-first pre-order walk starting at `root`.
///
/// `on_edge` sees every edge of every visited module, in declaration order, and decides whether the
/// walk descends into the target. A target is entered at most once. Frames are kept on an explicit
/// stack, so the depth of the graph is not bounded by the call stack.
pub(crate) fn walk(
  graph: &ModuleGraph,
  root: ModuleIdx,
  on_edge: impl FnMut(&DependencyEdge, ModuleIdx) -> bool,
) -> Result<FxIndexSet<ModuleIdx>, SerializeError> {
  let mut visited = FxIndexSet::default();
  walk_into(graph, root, &mut visited, on_edge)?;
  Ok(visited)
}

/// Same as `walk`, but continues an earlier walk: modules already in `visited` are not entered
/// again, and `root` itself is skipped when it was visited before.
fn walk_into(
  graph: &ModuleGraph,
  root: ModuleIdx,
  visited: &mut FxIndexSet<ModuleIdx>,
  mut on_edge: impl FnMut(&DependencyEdge, ModuleIdx) -> bool,
) -> Result<(), SerializeError> {
  if !visited.insert(root) {
    return Ok(());
  }
  // (module, index of the next edge to look at)
  let mut stack = vec![(root, 0usize)];

  while let Some(frame) = stack.last_mut() {
    let module = graph.module(frame.0);
    let Some(edge) = module.dependencies.get(frame.1) else {
      stack.pop();
      continue;
    };
    frame.1 += 1;

    let target = graph.resolve_dependency(module, edge)?;
    if on_edge(edge, target) && visited.insert(target) {
      stack.push((target, 0));
    }
  }

  Ok(())
}

/// Modules reachable from `root` without following an edge for which `is_boundary` holds, in
/// emission order.
pub fn reachable_from(
  graph: &ModuleGraph,
  root: ModuleIdx,
  is_boundary: impl Fn(&DependencyEdge, ModuleIdx) -> bool,
) -> Result<FxIndexSet<ModuleIdx>, SerializeError> {
  walk(graph, root, |edge, target| !is_boundary(edge, target))
}

/// Targets of every dynamic import in the graph, in discovery order.
///
/// Discovery is a pre-order walk from `entry`, continued from each module it did not reach, in
/// graph order.
pub fn collect_async_roots(
  graph: &ModuleGraph,
  entry: ModuleIdx,
) -> Result<FxIndexSet<ModuleIdx>, SerializeError> {
  let mut roots = FxIndexSet::default();
  let mut visited = FxIndexSet::default();
  let mut on_edge = |edge: &DependencyEdge, target: ModuleIdx| {
    if edge.is_async() {
      roots.insert(target);
    }
    true
  };

  walk_into(graph, entry, &mut visited, &mut on_edge)?;
  for module_idx in graph.modules().indices() {
    walk_into(graph, module_idx, &mut visited, &mut on_edge)?;
  }

  Ok(roots)
}

#[cfg(test)]
mod tests {
  use wirepack_common::Module;

  use super::*;

  fn ids(graph: &ModuleGraph, set: &FxIndexSet<ModuleIdx>) -> Vec<String> {
    set.iter().map(|idx| graph.module(*idx).id.to_string()).collect()
  }

  fn sample() -> ModuleGraph {
    ModuleGraph::new("/app/index.js", [
      Module::new("/app/index.js", "")
        .with_dependency(DependencyEdge::sync("/app/a.js"))
        .with_dependency(DependencyEdge::dynamic("/app/lazy.js"))
        .with_dependency(DependencyEdge::sync("/app/b.js")),
      Module::new("/app/a.js", "").with_dependency(DependencyEdge::sync("/app/c.js")),
      Module::new("/app/b.js", "").with_dependency(DependencyEdge::sync("/app/a.js")),
      Module::new("/app/c.js", "").with_dependency(DependencyEdge::sync("/app/index.js")),
      Module::new("/app/lazy.js", "").with_dependency(DependencyEdge::dynamic("/app/later.js")),
      Module::new("/app/later.js", ""),
    ])
  }

  #[test]
  fn sync_closure_is_pre_order_and_cycle_safe() {
    let graph = sample();
    let entry = graph.idx_of("/app/index.js").unwrap();
    let closure = reachable_from(&graph, entry, |edge, _| edge.is_async()).unwrap();
    assert_eq!(ids(&graph, &closure), ["/app/index.js", "/app/a.js", "/app/c.js", "/app/b.js"]);
  }

  #[test]
  fn async_roots_include_nested_dynamic_imports() {
    let graph = sample();
    let entry = graph.idx_of("/app/index.js").unwrap();
    let roots = collect_async_roots(&graph, entry).unwrap();
    assert_eq!(ids(&graph, &roots), ["/app/lazy.js", "/app/later.js"]);
  }

  #[test]
  fn async_roots_of_unreached_modules_come_last() {
    let graph = ModuleGraph::new("/app/index.js", [
      Module::new("/app/orphan.js", "").with_dependency(DependencyEdge::dynamic("/app/side.js")),
      Module::new("/app/index.js", "").with_dependency(DependencyEdge::dynamic("/app/lazy.js")),
      Module::new("/app/lazy.js", "").with_dependency(DependencyEdge::sync("/app/orphan.js")),
      Module::new("/app/side.js", ""),
      Module::new("/app/island.js", "").with_dependency(DependencyEdge::dynamic("/app/far.js")),
      Module::new("/app/far.js", ""),
    ]);
    let entry = graph.idx_of("/app/index.js").unwrap();
    let roots = collect_async_roots(&graph, entry).unwrap();
    assert_eq!(ids(&graph, &roots), ["/app/lazy.js", "/app/side.js", "/app/far.js"]);
  }

  #[test]
  fn boundaries_can_look_at_the_target() {
    let graph = sample();
    let entry = graph.idx_of("/app/index.js").unwrap();
    let a = graph.idx_of("/app/a.js").unwrap();
    let closure = reachable_from(&graph, entry, |edge, target| edge.is_async() || target == a);
    assert_eq!(ids(&graph, &closure.unwrap()), ["/app/index.js", "/app/b.js"]);
  }

  #[test]
  fn missing_targets_are_reported() {
    let graph = ModuleGraph::new("/app/index.js", [
      Module::new("/app/index.js", "").with_dependency(DependencyEdge::dynamic("/app/gone.js"))
    ]);
    let entry = graph.idx_of("/app/index.js").unwrap();
    let error = collect_async_roots(&graph, entry).unwrap_err();
    assert_eq!(error, SerializeError::UnresolvedModule {
      importer: "/app/index.js".to_string(),
      target: "/app/gone.js".to_string(),
    });
  }

  #[test]
  fn deep_chains_do_not_overflow() {
    let depth = 50_000;
    let graph = ModuleGraph::new(
      "/app/m0.js",
      (0..depth).map(|i| {
        let module = Module::new(format!("/app/m{i}.js"), "");
        if i + 1 < depth {
          module.with_dependency(DependencyEdge::sync(format!("/app/m{}.js", i + 1)))
        } else {
          module
        }
      }),
    );
    let entry = graph.idx_of("/app/m0.js").unwrap();
    assert_eq!(reachable_from(&graph, entry, |edge, _| edge.is_async()).unwrap().len(), depth);
  }
}
