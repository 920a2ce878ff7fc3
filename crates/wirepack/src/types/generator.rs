use wirepack_common::{
  Chunk, ChunkIdx, InstantiatedChunk, Module, ModuleGraph, NormalizedSerializerOptions,
};
use wirepack_error::BuildResult;

use crate::graph::ChunkGraph;

pub struct GenerateContext<'a> {
  pub chunk_idx: ChunkIdx,
  pub chunk: &'a Chunk,
  pub chunk_graph: &'a ChunkGraph,
  pub graph: &'a ModuleGraph,
  pub pre_modules: &'a [Module],
  pub options: &'a NormalizedSerializerOptions,
}

impl<'a> GenerateContext<'a> {
  /// Modules of the chunk, in emission order.
  pub fn modules(&self) -> impl Iterator<Item = &'a Module> + 'a {
    let Self { chunk, graph, .. } = *self;
    chunk.modules.iter().map(move |idx| graph.module(*idx))
  }
}

/// Renders one chunk of the chunk graph into its output text.
pub trait Generator {
  fn instantiate_chunk(ctx: &GenerateContext<'_>) -> BuildResult<InstantiatedChunk>;
}
