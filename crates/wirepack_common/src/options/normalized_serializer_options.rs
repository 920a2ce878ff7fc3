use std::path::PathBuf;

use crate::{ModuleId, OutputMode, Platform};

#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSerializerOptions {
  // --- Target
  pub platform: Platform,
  pub dev: bool,
  pub minify: bool,

  // --- Output
  pub output: OutputMode,
  pub server_root: PathBuf,
  pub base_url: String,
  pub source_url: Option<String>,
  pub source_map_url: Option<String>,

  // --- Run
  pub run_module: bool,
  pub run_before_main_module: Vec<ModuleId>,
  pub modules_only: bool,
}

impl NormalizedSerializerOptions {
  #[inline]
  pub fn is_split(&self) -> bool {
    self.output.is_split()
  }

  /// Directory, relative to the output root, that every split artifact is written to.
  pub fn export_root(&self) -> String {
    match self.output {
      OutputMode::Static => format!("_expo/static/js/{}", self.platform),
      OutputMode::Classic => format!("_expo/js/{}", self.platform),
    }
  }

  /// URL under which the runtime fetches `filename` when loading a chunk lazily.
  pub fn public_path_for(&self, filename: &str) -> String {
    format!("{}/{filename}", self.base_url.trim_end_matches('/'))
  }
}
