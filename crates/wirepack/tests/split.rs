mod common;

use std::sync::Arc;

use common::{
  app_id, artifact, definitions_of, graph, module, serialize, split, static_options, Import, Lazy,
};
use regex::Regex;
use wirepack::{
  hashed_filename, normalize_options, ArtifactMetadata, BaseSerializer, ExportPathCache, Module,
  ModuleGraph, OutputMode, Platform, SerializeArgs, SerializeError, Serializer, SerializerOptions,
  SharedOptions,
};

fn chunk_path(filename: &str) -> &str {
  let (path, _hash) = filename.rsplit_once('-').unwrap();
  path
}

#[tokio::test]
async fn single_entry_without_dynamic_imports() {
  let graph = graph(vec![module("index.js", &[Import("foo.js")]), module("foo.js", &[])]);
  let artifacts = split(&graph).await;

  assert_eq!(artifacts.len(), 1);
  let index = &artifacts[0];
  assert_eq!(index.origin_filename, "index.js");
  assert_eq!(index.metadata, ArtifactMetadata { is_async: false, requires: vec![] });
  assert!(Regex::new(r"^_expo/static/js/web/index-[0-9a-f]{32}\.js$").unwrap().is_match(&index.filename));
  assert_eq!(index.filename, hashed_filename("_expo/static/js/web/index", &index.source));
  assert!(index.source.ends_with("__r(\"/app/index.js\");\n//# sourceMappingURL=index.map"));
  assert_eq!(definitions_of(&artifacts, "/app/foo.js"), 1);
}

#[tokio::test]
async fn splits_an_async_import() {
  let graph = graph(vec![module("index.js", &[Lazy("foo.js")]), module("foo.js", &[])]);
  let artifacts = split(&graph).await;

  assert_eq!(artifacts.iter().map(|artifact| artifact.origin_filename.as_str()).collect::<Vec<_>>(), [
    "index.js", "foo.js"
  ]);
  let (index, foo) = (&artifacts[0], &artifacts[1]);

  assert_eq!(index.metadata, ArtifactMetadata { is_async: false, requires: vec![] });
  assert_eq!(foo.metadata, ArtifactMetadata { is_async: true, requires: vec![] });

  assert!(index.source.contains(&format!(
    r#"}},"/app/index.js",{{"0":"/app/foo.js","paths":{{"/app/foo.js":"/{}"}}}});"#,
    foo.filename
  )));
  assert!(index.source.contains("__r(\"/app/index.js\");"));
  assert!(!index.source.contains("__r(\"/app/foo.js\");"));
  assert!(!foo.source.contains("__r("));
  assert!(foo.source.ends_with("},\"/app/foo.js\",[]);\n//# sourceMappingURL=foo.map"));

  for artifact in &artifacts {
    assert_eq!(artifact.filename, hashed_filename(chunk_path(&artifact.filename), &artifact.source));
  }
}

#[tokio::test]
async fn async_import_in_a_nested_module() {
  let graph = graph(vec![
    module("index.js", &[Import("two.js")]),
    module("two.js", &[Lazy("foo.js")]),
    module("foo.js", &[]),
  ]);
  let artifacts = split(&graph).await;

  assert_eq!(artifacts.len(), 2);
  let index = artifact(&artifacts, "index.js");
  assert!(index.source.contains("},\"/app/index.js\",[\"/app/two.js\"]);"));
  assert!(index.source.contains(&format!("\"paths\":{{\"/app/foo.js\":\"/{}\"}}", artifacts[1].filename)));
  assert!(artifacts[1].metadata.is_async);
}

#[tokio::test]
async fn dedupes_shared_modules_of_async_chunks() {
  let graph = graph(vec![
    module("index.js", &[Lazy("math.js"), Lazy("shapes.js")]),
    module("math.js", &[Import("colors.js")]),
    module("shapes.js", &[Import("colors.js")]),
    module("colors.js", &[]),
  ]);
  let artifacts = split(&graph).await;

  assert_eq!(artifacts.iter().map(|artifact| artifact.origin_filename.as_str()).collect::<Vec<_>>(), [
    "index.js",
    "math.js",
    "shapes.js",
    "colors.js"
  ]);

  let colors = artifact(&artifacts, "colors.js");
  assert!(!colors.metadata.is_async);
  assert!(!colors.source.contains("__r("));
  assert_eq!(definitions_of(&artifacts, "/app/colors.js"), 1);
  assert!(colors.source.contains("},\"/app/colors.js\",[]);"));

  for origin in ["index.js", "math.js", "shapes.js"] {
    assert_eq!(artifact(&artifacts, origin).metadata.requires, vec![colors.filename.clone()]);
  }
  assert!(artifact(&artifacts, "math.js").metadata.is_async);
  assert!(artifact(&artifacts, "shapes.js").metadata.is_async);
}

#[tokio::test]
async fn modules_shared_by_different_sets_get_different_common_chunks() {
  let graph = graph(vec![
    module("index.js", &[Lazy("a.js"), Lazy("b.js"), Lazy("c.js")]),
    module("a.js", &[Import("ab.js"), Import("all.js")]),
    module("b.js", &[Import("ab.js"), Import("all.js")]),
    module("c.js", &[Import("all.js")]),
    module("ab.js", &[]),
    module("all.js", &[]),
  ]);
  let artifacts = split(&graph).await;

  assert_eq!(artifacts.len(), 6);
  let ab = artifact(&artifacts, "ab.js");
  let all = artifact(&artifacts, "all.js");
  assert_ne!(ab.filename, all.filename);
  assert_eq!(artifact(&artifacts, "a.js").metadata.requires, vec![ab.filename.clone(), all.filename.clone()]);
  assert_eq!(artifact(&artifacts, "c.js").metadata.requires, vec![all.filename.clone()]);
  assert_eq!(artifact(&artifacts, "index.js").metadata.requires, vec![
    ab.filename.clone(),
    all.filename.clone()
  ]);
}

#[tokio::test]
async fn async_root_required_by_main_is_absorbed() {
  let graph = graph(vec![module("index.js", &[Import("foo.js"), Lazy("foo.js")]), module("foo.js", &[])]);
  let artifacts = split(&graph).await;

  assert_eq!(artifacts.len(), 1);
  assert!(artifacts[0].source.contains("},\"/app/index.js\",[\"/app/foo.js\",\"/app/foo.js\"]);"));
  assert_eq!(definitions_of(&artifacts, "/app/foo.js"), 1);
}

#[tokio::test]
async fn nested_dynamic_imports_become_their_own_chunks() {
  let graph = graph(vec![
    module("index.js", &[Lazy("a.js")]),
    module("a.js", &[Lazy("b.js")]),
    module("b.js", &[]),
  ]);
  let artifacts = split(&graph).await;

  assert_eq!(artifacts.len(), 3);
  let (a, b) = (artifact(&artifacts, "a.js"), artifact(&artifacts, "b.js"));
  assert!(a.metadata.is_async && b.metadata.is_async);
  assert!(a.source.contains(&format!("\"paths\":{{\"/app/b.js\":\"/{}\"}}", b.filename)));
}

#[tokio::test]
async fn static_imports_between_chunks_become_requires() {
  let graph = graph(vec![
    module("index.js", &[Import("shared.js"), Lazy("page.js"), Lazy("widget.js")]),
    module("page.js", &[Import("shared.js"), Import("widget.js")]),
    module("widget.js", &[]),
    module("shared.js", &[]),
  ]);
  let artifacts = split(&graph).await;

  // `widget.js` is claimed by `page.js` first and never becomes a chunk on its own.
  assert_eq!(artifacts.len(), 2);
  let (index, page) = (artifact(&artifacts, "index.js"), artifact(&artifacts, "page.js"));
  assert_eq!(page.metadata.requires, vec![index.filename.clone()]);
  assert_eq!(definitions_of(&artifacts, "/app/shared.js"), 1);
  assert_eq!(definitions_of(&artifacts, "/app/widget.js"), 1);
  assert!(index.source.contains(&format!("\"/app/widget.js\":\"/{}\"", page.filename)));
}

#[tokio::test]
async fn earlier_async_roots_are_not_inlined() {
  let graph = graph(vec![
    module("index.js", &[Lazy("a.js"), Lazy("b.js")]),
    module("a.js", &[]),
    module("b.js", &[Import("a.js")]),
  ]);
  let artifacts = split(&graph).await;

  assert_eq!(artifacts.len(), 3);
  let (a, b) = (artifact(&artifacts, "a.js"), artifact(&artifacts, "b.js"));
  assert_eq!(b.metadata.requires, vec![a.filename.clone()]);
  assert_eq!(definitions_of(&artifacts, "/app/a.js"), 1);
}

#[tokio::test]
async fn mutually_importing_chunks_get_stable_distinct_hashes() {
  let build = |b_source: &'static str| {
    let mut b = module("b.js", &[Lazy("a.js")]);
    b.source.push_str(b_source);
    graph(vec![module("index.js", &[Lazy("a.js")]), module("a.js", &[Lazy("b.js")]), b])
  };

  let artifacts = split(&build("")).await;
  assert_eq!(artifacts.len(), 3);
  let (a, b) = (artifact(&artifacts, "a.js"), artifact(&artifacts, "b.js"));
  assert_ne!(a.filename, b.filename);
  assert!(a.source.contains(&b.filename));
  assert!(b.source.contains(&a.filename));
  assert!(artifacts.iter().all(|artifact| !artifact.source.contains("!~{")));

  assert_eq!(split(&build("")).await, artifacts);

  // A change in one member of the cycle renames every member.
  let changed = split(&build("\n  exports.more = true;")).await;
  assert_ne!(artifact(&changed, "a.js").filename, a.filename);
  assert_ne!(artifact(&changed, "b.js").filename, b.filename);
  assert_ne!(artifact(&changed, "index.js").filename, artifact(&artifacts, "index.js").filename);
}

#[tokio::test]
async fn leaf_changes_propagate_to_importers() {
  let build = |foo_source: &str| {
    graph(vec![module("index.js", &[Lazy("foo.js")]), Module::new(app_id("foo.js"), foo_source)])
  };

  let before = split(&build("exports.a = 1;")).await;
  let after = split(&build("exports.a = 2;")).await;
  assert_ne!(before[1].filename, after[1].filename);
  assert_ne!(before[0].filename, after[0].filename);
}

#[tokio::test]
async fn modules_the_entry_does_not_reach_still_ship() {
  let graph = graph(vec![
    module("index.js", &[]),
    module("orphan.js", &[Lazy("lazy.js")]),
    module("lazy.js", &[]),
  ]);
  let artifacts = split(&graph).await;

  assert_eq!(artifacts.len(), 2);
  let (index, lazy) = (artifact(&artifacts, "index.js"), artifact(&artifacts, "lazy.js"));
  assert!(lazy.metadata.is_async);
  assert_eq!(definitions_of(&artifacts, "/app/orphan.js"), 1);
  assert_eq!(definitions_of(&artifacts, "/app/lazy.js"), 1);

  let orphan_at = index.source.find("},\"/app/orphan.js\",").unwrap();
  assert!(index.source.find("},\"/app/index.js\",").unwrap() < orphan_at);
  assert!(index.source.contains(&format!("\"paths\":{{\"/app/lazy.js\":\"/{}\"}}", lazy.filename)));
  assert!(index.source.contains("__r(\"/app/index.js\");"));
  assert!(!index.source.contains("__r(\"/app/orphan.js\");"));
}

#[tokio::test]
async fn placeholder_shaped_text_in_sources_is_kept() {
  let mut index = module("index.js", &[Lazy("foo.js")]);
  index.source.push_str("\n  var token = \"!~{001}~\";\n  var other = \"!~{000}~\";");
  let graph = graph(vec![index, module("foo.js", &[])]);
  let artifacts = split(&graph).await;

  assert_eq!(artifacts.len(), 2);
  let (index, foo) = (&artifacts[0], &artifacts[1]);
  assert!(index.source.contains("var token = \"!~{001}~\";"));
  assert!(index.source.contains("var other = \"!~{000}~\";"));
  assert!(!foo.filename.contains("!~{"));
  assert!(index.source.contains(&format!("\"/app/foo.js\":\"/{}\"", foo.filename)));

  for artifact in &artifacts {
    assert_eq!(artifact.filename, hashed_filename(chunk_path(&artifact.filename), &artifact.source));
  }
}

#[tokio::test]
async fn duplicate_chunk_names_are_numbered() {
  let graph = graph(vec![
    module("index.js", &[Lazy("a/page.js"), Lazy("b/page.js")]),
    module("a/page.js", &[]),
    module("b/page.js", &[]),
  ]);
  let artifacts = split(&graph).await;

  assert!(artifacts[1].filename.starts_with("_expo/static/js/web/page-"));
  assert!(artifacts[2].filename.starts_with("_expo/static/js/web/page2-"));
  assert!(artifacts[2].source.ends_with("//# sourceMappingURL=page2.map"));
  assert_eq!(artifacts[2].origin_filename, "b/page.js");
}

#[tokio::test]
async fn main_chunk_runs_pre_modules_and_run_before_main_modules() {
  let graph = graph(vec![module("index.js", &[Import("init.js")]), module("init.js", &[])]);
  let pre_modules = [Module::new("__prelude__", "var __DEV__ = false;")];
  let options = normalize_options(SerializerOptions {
    server_root: Some("/app".into()),
    output: Some(OutputMode::Static),
    run_before_main_module: Some(vec!["init.js".to_string(), "missing.js".to_string()]),
    ..Default::default()
  });

  let output = BaseSerializer::new()
    .serialize(SerializeArgs::new(&graph, &options).with_pre_modules(&pre_modules))
    .await
    .unwrap();
  let index = &output.as_split().unwrap().artifacts[0];

  assert!(index.source.starts_with("var __DEV__ = false;\n__d(function"));
  assert!(index.source.ends_with(
    "__r(\"/app/init.js\");\n__r(\"/app/index.js\");\n//# sourceMappingURL=index.map"
  ));
}

#[tokio::test]
async fn modules_only_drops_pre_modules_and_run_statements() {
  let graph = graph(vec![module("index.js", &[])]);
  let pre_modules = [Module::new("__prelude__", "var __DEV__ = false;")];
  let options = normalize_options(SerializerOptions {
    server_root: Some("/app".into()),
    output: Some(OutputMode::Static),
    modules_only: Some(true),
    ..Default::default()
  });

  let output = BaseSerializer::new()
    .serialize(SerializeArgs::new(&graph, &options).with_pre_modules(&pre_modules))
    .await
    .unwrap();
  let index = &output.as_split().unwrap().artifacts[0];

  assert!(index.source.starts_with("__d(function"));
  assert!(!index.source.contains("__r("));
}

#[tokio::test]
async fn lazy_paths_use_the_base_url() {
  let graph = graph(vec![module("index.js", &[Lazy("foo.js")]), module("foo.js", &[])]);
  let options = normalize_options(SerializerOptions {
    server_root: Some("/app".into()),
    output: Some(OutputMode::Static),
    platform: Some(Platform::Ios),
    base_url: Some("https://cdn.example.com/app/".to_string()),
    ..Default::default()
  });

  let artifacts = serialize(&graph, &options).await.unwrap().into_split().unwrap().artifacts;
  assert!(artifacts[1].filename.starts_with("_expo/static/js/ios/foo-"));
  assert!(artifacts[0]
    .source
    .contains(&format!("\"/app/foo.js\":\"https://cdn.example.com/app/{}\"", artifacts[1].filename)));
}

#[tokio::test]
async fn reports_graph_errors() {
  let options = static_options();

  let dangling = graph(vec![module("index.js", &[Lazy("missing.js")])]);
  let error = serialize(&dangling, &options).await.unwrap_err();
  assert_eq!(error.downcast_ref::<SerializeError>(), Some(&SerializeError::UnresolvedModule {
    importer: "/app/index.js".to_string(),
    target: "/app/missing.js".to_string(),
  }));

  let graph = graph(vec![module("index.js", &[])]);
  let error = BaseSerializer::new()
    .serialize(SerializeArgs::new(&graph, &options).with_entry_file("/app/other.js"))
    .await
    .unwrap_err();
  assert_eq!(error.downcast_ref::<SerializeError>(), Some(&SerializeError::EntryNotInGraph {
    entry: "/app/other.js".to_string()
  }));

  let no_entry = ModuleGraph::new("", [module("index.js", &[])]);
  let error = serialize(&no_entry, &options).await.unwrap_err();
  assert_eq!(error.downcast_ref::<SerializeError>(), Some(&SerializeError::MissingEntryPoint));
}

#[tokio::test]
async fn artifacts_serialize_to_the_wire_shape() {
  let graph = graph(vec![module("index.js", &[Lazy("foo.js")]), module("foo.js", &[])]);
  let output = serialize(&graph, &static_options()).await.unwrap();

  let json = serde_json::to_value(&output).unwrap();
  assert_eq!(json["assets"], serde_json::json!([]));
  let foo = &json["artifacts"][1];
  assert_eq!(foo["type"], "js");
  assert_eq!(foo["originFilename"], "foo.js");
  assert_eq!(foo["metadata"], serde_json::json!({ "isAsync": true, "requires": [] }));
  let artifacts = &output.as_split().unwrap().artifacts;
  assert_eq!(foo["filename"].as_str(), Some(artifact(artifacts, "foo.js").filename.as_str()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_share_the_export_path_cache() {
  let cache = Arc::new(ExportPathCache::default());
  let serializer = Arc::new(BaseSerializer::with_export_path_cache(Arc::clone(&cache)));
  let options: SharedOptions = Arc::new(static_options());
  let graph = Arc::new(graph(vec![
    module("index.js", &[Lazy("a.js"), Lazy("b.js")]),
    module("a.js", &[Import("shared.js")]),
    module("b.js", &[Import("shared.js")]),
    module("shared.js", &[]),
  ]));

  let tasks = (0..8)
    .map(|_| {
      let (serializer, options, graph) = (Arc::clone(&serializer), Arc::clone(&options), Arc::clone(&graph));
      tokio::spawn(async move { serializer.serialize(SerializeArgs::new(&graph, &options)).await.unwrap() })
    })
    .collect::<Vec<_>>();

  let mut outputs = vec![];
  for task in tasks {
    outputs.push(task.await.unwrap());
  }
  assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
  // One entry per chunk root.
  assert_eq!(cache.len(), 4);
}
