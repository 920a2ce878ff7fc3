mod code_splitting;
mod dedupe_common_modules;
pub mod reachability;

use wirepack_common::{Chunk, ChunkKind, ModuleGraph, ModuleIdx};
use wirepack_error::BuildResult;
use wirepack_utils::bitset::BitSet;

use crate::graph::ChunkGraph;

use self::reachability::reachable_from;

/// Partitions the module graph into a main chunk, one chunk per async root and common chunks for
/// modules shared between async chunks. Modules outside every closure end up in the main chunk.
pub struct SplitStage<'a> {
  graph: &'a ModuleGraph,
  entry: ModuleIdx,
}

impl<'a> SplitStage<'a> {
  pub fn new(graph: &'a ModuleGraph, entry: ModuleIdx) -> Self {
    Self { graph, entry }
  }

  pub fn split(&self) -> BuildResult<ChunkGraph> {
    let mut chunk_graph = ChunkGraph::new(self.graph.len());

    let main_modules = reachable_from(self.graph, self.entry, |edge, _| edge.is_async())?;
    let main_chunk_idx =
      chunk_graph.add_chunk(Chunk::new(ChunkKind::Main { entry: self.entry }, BitSet::default(), vec![]));
    main_modules.into_iter().for_each(|module_idx| {
      chunk_graph.add_module_to_chunk(module_idx, main_chunk_idx);
    });

    let async_closures = self.compute_async_closures(&chunk_graph)?;
    self.dedupe_common_modules(&mut chunk_graph, async_closures);

    // Modules the entry does not reach still ship, after the main chunk's own closure.
    let unreached = self
      .graph
      .modules()
      .indices()
      .filter(|module_idx| chunk_graph.chunk_of(*module_idx).is_none())
      .collect::<Vec<_>>();
    for module_idx in &unreached {
      chunk_graph.add_module_to_chunk(*module_idx, main_chunk_idx);
    }

    tracing::debug!(
      chunks = chunk_graph.chunk_table.len(),
      unreached = unreached.len(),
      async_chunks = chunk_graph.chunk_table.iter().filter(|chunk| chunk.is_async()).count(),
      common_chunks = chunk_graph.chunk_table.iter().filter(|chunk| chunk.is_common()).count(),
      "split module graph"
    );

    Ok(chunk_graph)
  }
}
