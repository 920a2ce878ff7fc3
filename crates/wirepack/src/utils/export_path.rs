use std::path::PathBuf;

use arcstr::ArcStr;
use wirepack_common::{ModuleId, NormalizedSerializerOptions};
use wirepack_utils::{
  collections::FxDashMap,
  concat_string,
  path_ext::{last_segment, strip_extension},
  sanitize_file_name::sanitize_file_name,
  xxhash::xxhash_hex,
};

/// Output path of a module: its id relative to the server root, in slash form, without extension.
///
/// `/app/etc/external.tsx` with server root `/app` becomes `etc/external`.
pub fn path_for(module_id: &ModuleId, options: &NormalizedSerializerOptions) -> String {
  strip_extension(&module_id.stabilize(&options.server_root)).to_string()
}

/// File-name safe last segment of an export path.
pub fn chunk_base_name(path: &str) -> String {
  sanitize_file_name(last_segment(path)).into_owned()
}

/// `<chunk_path>-<hash>.js`, where the hash is taken over the final bytes of the chunk.
pub fn hashed_filename(chunk_path: &str, final_source: &str) -> String {
  concat_string!(chunk_path, "-", xxhash_hex(final_source.as_bytes()), ".js")
}

/// Memoizes `path_for` across serialize calls. Safe to share between threads.
#[derive(Debug, Default)]
pub struct ExportPathCache {
  paths: FxDashMap<(ModuleId, PathBuf), ArcStr>,
}

impl ExportPathCache {
  pub fn path_for(&self, module_id: &ModuleId, options: &NormalizedSerializerOptions) -> ArcStr {
    let key = (module_id.clone(), options.server_root.clone());
    if let Some(path) = self.paths.get(&key) {
      return path.value().clone();
    }
    // Insert-if-absent: a concurrent writer computed the same value.
    self.paths.entry(key).or_insert_with(|| path_for(module_id, options).into()).value().clone()
  }

  pub fn len(&self) -> usize {
    self.paths.len()
  }

  pub fn is_empty(&self) -> bool {
    self.paths.is_empty()
  }
}
