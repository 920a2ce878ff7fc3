#![allow(dead_code)]

use wirepack::{
  normalize_options, Artifact, BaseSerializer, DependencyEdge, Module, ModuleGraph,
  NormalizedSerializerOptions, OutputMode, SerializeArgs, SerializeOutput, SerializerOptions,
  Serializer,
};

pub const SERVER_ROOT: &str = "/app";

pub enum Dep {
  Import(&'static str),
  Lazy(&'static str),
}

pub use Dep::{Import, Lazy};

pub fn app_id(name: &str) -> String {
  format!("{SERVER_ROOT}/{name}")
}

/// A module under the server root whose body requires every dependency in order.
pub fn module(name: &str, deps: &[Dep]) -> Module {
  let mut module = Module::new(app_id(name), "");
  let mut body = vec![];
  for (index, dep) in deps.iter().enumerate() {
    match dep {
      Import(target) => {
        body.push(format!("  _$$_REQUIRE(dependencyMap[{index}], \"./{target}\");"));
        module = module.with_dependency(DependencyEdge::sync(app_id(target)));
      }
      Lazy(target) => {
        body.push(format!(
          "  _$$_REQUIRE(dependencyMap[{index}], \"async-require\")(dependencyMap[{index}], dependencyMap.paths, \"./{target}\");"
        ));
        module = module.with_dependency(DependencyEdge::dynamic(app_id(target)));
      }
    }
  }
  body.push(format!("  exports.name = {name:?};"));
  module.source = body.join("\n");
  module
}

/// The first module is the entry point.
pub fn graph(modules: Vec<Module>) -> ModuleGraph {
  let entry = modules[0].id.clone();
  ModuleGraph::new(entry, modules)
}

pub fn options(output: OutputMode) -> NormalizedSerializerOptions {
  normalize_options(SerializerOptions {
    server_root: Some(SERVER_ROOT.into()),
    output: Some(output),
    ..Default::default()
  })
}

pub fn static_options() -> NormalizedSerializerOptions {
  options(OutputMode::Static)
}

pub async fn serialize(
  graph: &ModuleGraph,
  options: &NormalizedSerializerOptions,
) -> wirepack::BuildResult<SerializeOutput> {
  BaseSerializer::new().serialize(SerializeArgs::new(graph, options)).await
}

pub async fn split(graph: &ModuleGraph) -> Vec<Artifact> {
  let options = static_options();
  serialize(graph, &options).await.unwrap().into_split().unwrap().artifacts
}

pub fn artifact<'a>(artifacts: &'a [Artifact], origin: &str) -> &'a Artifact {
  artifacts
    .iter()
    .find(|artifact| artifact.origin_filename == origin)
    .unwrap_or_else(|| panic!("no artifact for {origin}"))
}

/// Number of `__d(` definitions of `id` across all artifacts.
pub fn definitions_of(artifacts: &[Artifact], id: &str) -> usize {
  let needle = format!("}},\"{id}\",");
  artifacts.iter().map(|artifact| artifact.source.matches(&needle).count()).sum()
}
