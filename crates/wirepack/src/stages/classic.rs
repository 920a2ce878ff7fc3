use wirepack_common::{Module, ModuleGraph, ModuleIdx, NormalizedSerializerOptions, SourceJoiner};
use wirepack_error::BuildResult;
use wirepack_utils::concat_string;

use crate::{
  stages::split::reachability::walk,
  utils::render_wire_module::{render_run_statement, render_wire_module, RenderWireModuleArgs},
};

/// Renders the whole graph into one bundle string, without splitting.
pub struct ClassicStage<'a> {
  graph: &'a ModuleGraph,
  entry: ModuleIdx,
  pre_modules: &'a [Module],
  options: &'a NormalizedSerializerOptions,
}

impl<'a> ClassicStage<'a> {
  pub fn new(
    graph: &'a ModuleGraph,
    entry: ModuleIdx,
    pre_modules: &'a [Module],
    options: &'a NormalizedSerializerOptions,
  ) -> Self {
    Self { graph, entry, pre_modules, options }
  }

  pub fn render(&self) -> BuildResult<String> {
    let Self { graph, entry, pre_modules, options } = *self;

    // Everything the entry reaches through any edge, then the modules it does not reach.
    let mut module_order = walk(graph, entry, |_, _| true)?;
    let reached = module_order.len();
    module_order.extend(graph.modules().indices());
    tracing::debug!(
      modules = module_order.len(),
      unreachable = module_order.len() - reached,
      "rendering classic bundle"
    );

    let mut source_joiner = SourceJoiner::default();
    if !options.modules_only {
      pre_modules.iter().for_each(|module| source_joiner.append_source(module.source.as_str()));
    }

    for module_idx in module_order {
      source_joiner.append_source(render_wire_module(&RenderWireModuleArgs {
        module: graph.module(module_idx),
        options,
        lazy_paths: vec![],
      }));
    }

    if options.run_module && !options.modules_only {
      options
        .run_before_main_module
        .iter()
        .filter_map(|id| graph.get(id))
        .for_each(|module| source_joiner.append_source(render_run_statement(module)));
      source_joiner.append_source(render_run_statement(graph.module(entry)));
    }

    if let Some(source_map_url) = &options.source_map_url {
      source_joiner.append_source(concat_string!("//# sourceMappingURL=", source_map_url));
    }
    if let Some(source_url) = &options.source_url {
      source_joiner.append_source(concat_string!("//# sourceURL=", source_url));
    }

    Ok(source_joiner.join())
  }
}
