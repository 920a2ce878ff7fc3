use std::path::PathBuf;

use sugar_path::SugarPath;
use wirepack_common::{
  ModuleId, NormalizedSerializerOptions, OutputMode, Platform, SerializerOptions,
};
use wirepack_utils::path_ext::PathExt;

pub fn normalize_options(raw_options: SerializerOptions) -> NormalizedSerializerOptions {
  let server_root = raw_options
    .server_root
    .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));

  // Relative entries are resolved against the server root, like every other module id.
  let run_before_main_module = raw_options
    .run_before_main_module
    .unwrap_or_default()
    .into_iter()
    .map(|id| {
      let path = PathBuf::from(&id);
      if path.is_absolute() {
        ModuleId::from(id)
      } else {
        ModuleId::from(path.absolutize_with(server_root.clone()).to_slash_string())
      }
    })
    .collect();

  NormalizedSerializerOptions {
    platform: raw_options.platform.unwrap_or(Platform::Web),
    dev: raw_options.dev.unwrap_or(false),
    minify: raw_options.minify.unwrap_or(false),
    output: raw_options.output.unwrap_or(OutputMode::Classic),
    base_url: raw_options.base_url.unwrap_or_default(),
    source_url: raw_options.source_url,
    source_map_url: raw_options.source_map_url,
    run_module: raw_options.run_module.unwrap_or(true),
    run_before_main_module,
    modules_only: raw_options.modules_only.unwrap_or(false),
    server_root,
  }
}
