use std::sync::Arc;

use wirepack_common::{ModuleIdx, SerializeOutput, SplitBundle};
use wirepack_error::{BuildResult, SerializeError};
use wirepack_plugin::{
  compose_serializers, SerializeArgs, SerializeFuture, Serializer, SerializerConfig,
  SharedSerializer, SharedSerializerPlugin,
};

use crate::{
  stages::{classic::ClassicStage, generate::GenerateStage, split::SplitStage},
  utils::export_path::ExportPathCache,
};

/// The terminal serializer: classic bundles in classic mode, split artifacts in static mode.
#[derive(Debug, Default)]
pub struct BaseSerializer {
  export_paths: Arc<ExportPathCache>,
}

impl BaseSerializer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Shares the export path cache with other serializers.
  pub fn with_export_path_cache(export_paths: Arc<ExportPathCache>) -> Self {
    Self { export_paths }
  }

  pub fn serialize_graph(&self, args: SerializeArgs<'_>) -> BuildResult<SerializeOutput> {
    let SerializeArgs { graph, pre_modules, options, .. } = args;
    let entry = Self::resolve_entry(args)?;

    if !options.is_split() {
      let bundle = ClassicStage::new(graph, entry, pre_modules, options).render()?;
      return Ok(SerializeOutput::Bundle(bundle));
    }

    let mut chunk_graph = SplitStage::new(graph, entry).split()?;
    let artifacts =
      GenerateStage::new(graph, pre_modules, options, &self.export_paths).generate(&mut chunk_graph)?;
    Ok(SerializeOutput::Split(SplitBundle { artifacts, assets: vec![] }))
  }

  fn resolve_entry(args: SerializeArgs<'_>) -> Result<ModuleIdx, SerializeError> {
    let entry = if args.entry_file.is_empty() { &**args.graph.entry_point() } else { args.entry_file };
    if entry.is_empty() {
      return Err(SerializeError::MissingEntryPoint);
    }
    args.graph.idx_of(entry).ok_or_else(|| SerializeError::EntryNotInGraph { entry: entry.to_string() })
  }
}

impl Serializer for BaseSerializer {
  fn serialize<'a>(&'a self, args: SerializeArgs<'a>) -> SerializeFuture<'a> {
    Box::pin(async move { self.serialize_graph(args) })
  }
}

/// Wraps the serializer of `config` with `plugins`, the last plugin outermost. Without a custom
/// serializer the chain ends in a `BaseSerializer`.
pub fn with_serializer_plugins(
  config: SerializerConfig,
  plugins: Vec<SharedSerializerPlugin>,
) -> SerializerConfig {
  if plugins.is_empty() {
    return config;
  }
  let inner = config
    .custom_serializer
    .unwrap_or_else(|| Arc::new(BaseSerializer::new()) as SharedSerializer);
  SerializerConfig { custom_serializer: Some(compose_serializers(inner, plugins)) }
}

pub fn create_serializer_from_plugins(plugins: Vec<SharedSerializerPlugin>) -> SharedSerializer {
  compose_serializers(Arc::new(BaseSerializer::new()), plugins)
}
