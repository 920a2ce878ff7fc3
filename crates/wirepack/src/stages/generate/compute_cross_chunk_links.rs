use itertools::Itertools;
use wirepack_common::ChunkIdx;
use wirepack_error::BuildResult;
use wirepack_utils::{
  collections::FxIndexSet,
  rayon::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator},
};

use crate::graph::ChunkGraph;

use super::GenerateStage;

impl GenerateStage<'_> {
  /// Fills `requires` of every chunk.
  ///
  /// - A static import of a module in another chunk requires that chunk.
  /// - Dynamic imports never require anything; the wire generator turns them into lazy paths.
  /// - The main chunk requires every common chunk, so they can be preloaded next to it.
  pub(super) fn compute_cross_chunk_links(&self, chunk_graph: &mut ChunkGraph) -> BuildResult<()> {
    let common_chunks = chunk_graph
      .chunk_table
      .iter_enumerated()
      .filter(|(_, chunk)| chunk.is_common())
      .map(|(chunk_idx, _)| chunk_idx)
      .collect_vec();

    let index_requires = chunk_graph
      .chunk_table
      .par_iter()
      .enumerate()
      .map(|(chunk_idx, chunk)| -> BuildResult<Vec<ChunkIdx>> {
        let chunk_idx = ChunkIdx::from_usize(chunk_idx);
        let mut requires = FxIndexSet::default();

        for &module_idx in &chunk.modules {
          let module = self.graph.module(module_idx);
          for edge in &module.dependencies {
            let target = self.graph.resolve_dependency(module, edge)?;
            if edge.is_async() {
              continue;
            }
            match chunk_graph.chunk_of(target) {
              Some(target_chunk_idx) if target_chunk_idx != chunk_idx => {
                requires.insert(target_chunk_idx);
              }
              _ => {}
            }
          }
        }

        if chunk.is_main() {
          requires.extend(common_chunks.iter().copied());
        }

        Ok(requires.into_iter().sorted().collect())
      })
      .collect::<BuildResult<Vec<_>>>()?;

    for (chunk, requires) in chunk_graph.chunk_table.iter_mut().zip(index_requires) {
      chunk.requires = requires;
    }

    Ok(())
  }
}
