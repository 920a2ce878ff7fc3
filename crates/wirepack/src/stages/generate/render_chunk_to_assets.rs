use wirepack_common::{Artifact, ChunkIdx};
use wirepack_error::BuildResult;
use wirepack_utils::rayon::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::{
  graph::ChunkGraph,
  types::{
    generator::{GenerateContext, Generator},
    IndexInstantiatedChunks,
  },
  utils::chunk::finalize_chunks::finalize_chunks,
};

use super::{generators::wire::WireGenerator, GenerateStage};

impl GenerateStage<'_> {
  /// Artifacts come out in chunk order: main, async chunks in discovery order, common chunks.
  pub(super) fn render_chunk_to_assets(&self, chunk_graph: &ChunkGraph) -> BuildResult<Vec<Artifact>> {
    let instantiated_chunks: IndexInstantiatedChunks = chunk_graph
      .chunk_table
      .par_iter()
      .enumerate()
      .map(|(chunk_idx, chunk)| {
        let ctx = GenerateContext {
          chunk_idx: ChunkIdx::from_usize(chunk_idx),
          chunk,
          chunk_graph,
          graph: self.graph,
          pre_modules: self.pre_modules,
          options: self.options,
        };
        WireGenerator::instantiate_chunk(&ctx)
      })
      .collect::<BuildResult<Vec<_>>>()?
      .into();

    let artifacts = finalize_chunks(instantiated_chunks)?;
    tracing::debug!(artifacts = artifacts.len(), "finalized chunks");
    Ok(artifacts)
  }
}
