pub mod normalized_serializer_options;
pub mod output_mode;
pub mod platform;

use std::path::PathBuf;

use serde::Deserialize;

use crate::{OutputMode, Platform};

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SerializerOptions {
  // --- Target
  pub platform: Option<Platform>,
  pub dev: Option<bool>,
  pub minify: Option<bool>,

  // --- Output
  pub output: Option<OutputMode>,
  pub server_root: Option<PathBuf>,
  pub base_url: Option<String>,
  pub source_url: Option<String>,
  pub source_map_url: Option<String>,

  // --- Run
  pub run_module: Option<bool>,
  pub run_before_main_module: Option<Vec<String>>,
  pub modules_only: Option<bool>,
}

impl SerializerOptions {
  /// Fields set in `overrides` win over fields set in `self`.
  #[must_use]
  pub fn merge(self, overrides: Self) -> Self {
    Self {
      platform: overrides.platform.or(self.platform),
      dev: overrides.dev.or(self.dev),
      minify: overrides.minify.or(self.minify),
      output: overrides.output.or(self.output),
      server_root: overrides.server_root.or(self.server_root),
      base_url: overrides.base_url.or(self.base_url),
      source_url: overrides.source_url.or(self.source_url),
      source_map_url: overrides.source_map_url.or(self.source_map_url),
      run_module: overrides.run_module.or(self.run_module),
      run_before_main_module: overrides.run_before_main_module.or(self.run_before_main_module),
      modules_only: overrides.modules_only.or(self.modules_only),
    }
  }
}
