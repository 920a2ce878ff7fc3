use wirepack_common::{InstantiatedChunk, SourceJoiner};
use wirepack_error::BuildResult;
use wirepack_utils::concat_string;

use crate::{
  types::generator::{GenerateContext, Generator},
  utils::render_wire_module::{render_run_statement, render_wire_module, RenderWireModuleArgs},
};

/// Emits chunks as a sequence of `__d(...)` module definitions.
pub struct WireGenerator;

impl Generator for WireGenerator {
  fn instantiate_chunk(ctx: &GenerateContext<'_>) -> BuildResult<InstantiatedChunk> {
    let GenerateContext { chunk_idx, chunk, chunk_graph, graph, pre_modules, options } = *ctx;
    let main_chunk_idx = chunk_graph.main_chunk_idx();
    let mut source_joiner = SourceJoiner::default();

    if chunk.is_main() && !options.modules_only {
      pre_modules.iter().for_each(|module| source_joiner.append_source(module.source.as_str()));
    }

    for module in ctx.modules() {
      // The main chunk is loaded up front, and a chunk never loads itself.
      let lazy_paths = module
        .dependencies
        .iter()
        .filter(|edge| edge.is_async())
        .filter_map(|edge| {
          let target_chunk_idx = chunk_graph.chunk_of(graph.idx_of(&edge.target)?)?;
          (target_chunk_idx != chunk_idx && target_chunk_idx != main_chunk_idx).then(|| {
            let target_chunk = &chunk_graph.chunk_table[target_chunk_idx];
            (&*edge.target, options.public_path_for(target_chunk.preliminary_filename().as_str()))
          })
        })
        .collect::<Vec<_>>();

      source_joiner.append_source(render_wire_module(&RenderWireModuleArgs {
        module,
        options,
        lazy_paths,
      }));
    }

    if let Some(entry) = chunk.entry_module_idx() {
      if options.run_module && !options.modules_only {
        options
          .run_before_main_module
          .iter()
          .filter_map(|id| graph.idx_of(id))
          .filter(|module_idx| chunk_graph.chunk_of(*module_idx) == Some(chunk_idx))
          .for_each(|module_idx| {
            source_joiner.append_source(render_run_statement(graph.module(module_idx)));
          });
        source_joiner.append_source(render_run_statement(graph.module(entry)));
      }
    }

    let name = chunk.name.as_ref().expect("chunks are named before they are rendered");
    source_joiner.append_source(concat_string!("//# sourceMappingURL=", name, ".map"));

    let origin_filename = chunk
      .root_module(graph.modules())
      .map(|module| module.id.stabilize(&options.server_root))
      .unwrap_or_default();

    Ok(InstantiatedChunk {
      origin_chunk: chunk_idx,
      content: source_joiner.join(),
      preliminary_filename: chunk.preliminary_filename().clone(),
      origin_filename,
      is_async: chunk.is_async(),
      requires: chunk.requires.clone(),
    })
  }
}
