mod compute_cross_chunk_links;
mod generate_chunk_name_and_preliminary_filenames;
pub mod generators;
mod render_chunk_to_assets;

use wirepack_common::{Artifact, Module, ModuleGraph, NormalizedSerializerOptions};
use wirepack_error::BuildResult;

use crate::{graph::ChunkGraph, utils::export_path::ExportPathCache};

/// Names, links and renders the chunks produced by the split stage.
pub struct GenerateStage<'a> {
  graph: &'a ModuleGraph,
  pre_modules: &'a [Module],
  options: &'a NormalizedSerializerOptions,
  export_paths: &'a ExportPathCache,
}

impl<'a> GenerateStage<'a> {
  pub fn new(
    graph: &'a ModuleGraph,
    pre_modules: &'a [Module],
    options: &'a NormalizedSerializerOptions,
    export_paths: &'a ExportPathCache,
  ) -> Self {
    Self { graph, pre_modules, options, export_paths }
  }

  pub fn generate(&self, chunk_graph: &mut ChunkGraph) -> BuildResult<Vec<Artifact>> {
    self.compute_cross_chunk_links(chunk_graph)?;
    self.generate_chunk_name_and_preliminary_filenames(chunk_graph);
    self.render_chunk_to_assets(chunk_graph)
  }
}
