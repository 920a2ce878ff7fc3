use itertools::Itertools;
use wirepack_common::{Module, NormalizedSerializerOptions, OutputType};
use wirepack_utils::{collections::FxIndexMap, concat_string, ecmascript::to_string_literal};

const WRAPPER_HEAD: &str = "__d(function (global, _$$_REQUIRE, _$$_IMPORT_DEFAULT, _$$_IMPORT_ALL, module, exports, dependencyMap) {\n";

pub struct RenderWireModuleArgs<'a> {
  pub module: &'a Module,
  pub options: &'a NormalizedSerializerOptions,
  /// `(module id, public path)` of dynamically imported modules that live in another loadable
  /// chunk. Empty when the module has no such import.
  pub lazy_paths: Vec<(&'a str, String)>,
}

/// Wraps one module into its `__d(...)` definition.
pub fn render_wire_module(args: &RenderWireModuleArgs) -> String {
  let RenderWireModuleArgs { module, options, lazy_paths } = args;

  let body = match module.output_type {
    OutputType::Json => concat_string!("module.exports = ", module.source.trim(), ";"),
    OutputType::Js | OutputType::Asset => module.source.trim_end().to_string(),
  };

  let id = to_string_literal(&module.id);
  let dependency_map = render_dependency_map(module, lazy_paths);
  let verbose_name = if options.dev {
    let name = to_string_literal(&module.display_name(&options.server_root));
    concat_string!(",", name)
  } else {
    String::new()
  };

  concat_string!(WRAPPER_HEAD, body, "\n},", id, ",", dependency_map, verbose_name, ");")
}

/// `__r("<id>");`
pub fn render_run_statement(module: &Module) -> String {
  let id = to_string_literal(&module.id);
  concat_string!("__r(", id, ");")
}

fn render_dependency_map(module: &Module, lazy_paths: &[(&str, String)]) -> String {
  if lazy_paths.is_empty() {
    let ids = module.dependencies.iter().map(|edge| to_string_literal(&edge.target)).join(",");
    return concat_string!("[", ids, "]");
  }

  let mut entries = module
    .dependencies
    .iter()
    .enumerate()
    .map(|(index, edge)| {
      let mut buffer = itoa::Buffer::new();
      let key = buffer.format(index);
      let target = to_string_literal(&edge.target);
      concat_string!("\"", key, "\":", target)
    })
    .collect::<Vec<_>>();

  // A module can import the same chunk more than once; each id gets one entry.
  let paths = lazy_paths.iter().map(|(id, path)| (*id, path.as_str())).collect::<FxIndexMap<_, _>>();
  let paths = paths
    .into_iter()
    .map(|(id, path)| {
      let (id, path) = (to_string_literal(id), to_string_literal(path));
      concat_string!(id, ":", path)
    })
    .join(",");
  entries.push(concat_string!("\"paths\":{", paths, "}"));

  let entries = entries.join(",");
  concat_string!("{", entries, "}")
}

#[cfg(test)]
mod tests {
  use wirepack_common::{DependencyEdge, SerializerOptions};

  use crate::normalize_options;

  use super::*;

  fn options(dev: bool) -> NormalizedSerializerOptions {
    normalize_options(SerializerOptions {
      server_root: Some("/app".into()),
      dev: Some(dev),
      ..Default::default()
    })
  }

  #[test]
  fn renders_array_dependency_maps() {
    let module = Module::new("/app/index.js", "  _$$_REQUIRE(dependencyMap[0], \"./two\");\n")
      .with_dependency(DependencyEdge::sync("/app/two.js"));
    let options = options(false);

    assert_eq!(
      render_wire_module(&RenderWireModuleArgs { module: &module, options: &options, lazy_paths: vec![] }),
      "__d(function (global, _$$_REQUIRE, _$$_IMPORT_DEFAULT, _$$_IMPORT_ALL, module, exports, dependencyMap) {\n  _$$_REQUIRE(dependencyMap[0], \"./two\");\n},\"/app/index.js\",[\"/app/two.js\"]);"
    );
  }

  #[test]
  fn renders_lazy_path_tables() {
    let module = Module::new("/app/index.js", "body")
      .with_dependency(DependencyEdge::dynamic("/app/foo.js"))
      .with_dependency(DependencyEdge::sync("/app/async-require.js"))
      .with_dependency(DependencyEdge::dynamic("/app/foo.js"));
    let options = options(false);
    let lazy_paths = vec![
      ("/app/foo.js", "/_expo/static/js/web/foo-0.js".to_string()),
      ("/app/foo.js", "/_expo/static/js/web/foo-0.js".to_string()),
    ];

    let rendered =
      render_wire_module(&RenderWireModuleArgs { module: &module, options: &options, lazy_paths });
    assert!(rendered.ends_with(
      r#"},"/app/index.js",{"0":"/app/foo.js","1":"/app/async-require.js","2":"/app/foo.js","paths":{"/app/foo.js":"/_expo/static/js/web/foo-0.js"}});"#
    ));
  }

  #[test]
  fn dev_appends_verbose_names_and_json_becomes_exports() {
    let module = Module::new("/app/data/config.json", "{\"a\": 1}\n").with_output_type(OutputType::Json);
    let options = options(true);

    let rendered =
      render_wire_module(&RenderWireModuleArgs { module: &module, options: &options, lazy_paths: vec![] });
    assert!(rendered.contains("\nmodule.exports = {\"a\": 1};\n}"));
    assert!(rendered.ends_with(r#","/app/data/config.json",[],"data/config.json");"#));
  }

  #[test]
  fn run_statement() {
    assert_eq!(render_run_statement(&Module::new("/app/index.js", "")), r#"__r("/app/index.js");"#);
  }
}
