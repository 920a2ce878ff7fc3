use rustc_hash::FxHashSet;
use wirepack_common::ModuleIdx;
use wirepack_error::BuildResult;
use wirepack_utils::collections::FxIndexSet;

use crate::graph::ChunkGraph;

use super::{
  reachability::{collect_async_roots, reachable_from},
  SplitStage,
};

/// Synchronous closure of one async root, before shared modules are hoisted out.
#[derive(Debug)]
pub struct AsyncClosure {
  pub root: ModuleIdx,
  pub modules: FxIndexSet<ModuleIdx>,
}

impl SplitStage<'_> {
  /// One closure per async root that is not already covered by the main chunk or by an earlier
  /// closure. Roots are processed in discovery order and the first claim wins.
  pub(super) fn compute_async_closures(
    &self,
    chunk_graph: &ChunkGraph,
  ) -> BuildResult<Vec<AsyncClosure>> {
    let roots = collect_async_roots(self.graph, self.entry)?;

    let mut closures: Vec<AsyncClosure> = Vec::with_capacity(roots.len());
    let mut claimed = FxHashSet::default();
    let mut chunk_roots = FxHashSet::default();

    for root in roots {
      if chunk_graph.chunk_of(root).is_some() {
        tracing::trace!(root = %self.graph.module(root).id, "async root is part of the main chunk");
        continue;
      }
      if claimed.contains(&root) {
        tracing::trace!(root = %self.graph.module(root).id, "async root is claimed by an earlier chunk");
        continue;
      }

      // Stop at the main chunk and at the roots of other async chunks; those are loaded by
      // reference instead of being inlined.
      let modules = reachable_from(self.graph, root, |edge, target| {
        edge.is_async() || chunk_graph.chunk_of(target).is_some() || chunk_roots.contains(&target)
      })?;

      claimed.extend(modules.iter().copied());
      chunk_roots.insert(root);
      closures.push(AsyncClosure { root, modules });
    }

    Ok(closures)
  }
}
