use std::path::PathBuf;

use clap::Args;

use crate::types::{output_mode::OutputMode, platform::Platform};

#[derive(Args)]
pub struct InputArgs {
  /// JSON file with `entryPoint`, `modules` and optional `preModules`.
  #[clap(long, short = 'g')]
  pub graph: PathBuf,

  /// Module id to serialize from. Defaults to the graph's entry point.
  #[clap(long)]
  pub entry: Option<String>,

  #[clap(long)]
  pub server_root: Option<PathBuf>,

  /// JSON file with serializer options. Flags win over its fields.
  #[clap(long)]
  pub options: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<PathBuf>,

  #[clap(long, short = 'o')]
  pub output: Option<OutputMode>,

  #[clap(long)]
  pub base_url: Option<String>,
}

#[derive(Args)]
pub struct EnhanceArgs {
  #[clap(long, short = 'p')]
  pub platform: Option<Platform>,

  #[clap(long)]
  pub dev: bool,

  #[clap(long, short = 'm')]
  pub minify: bool,

  #[clap(long)]
  pub silent: bool,

  /// Overrides `RUST_LOG`.
  #[clap(long)]
  pub log_level: Option<String>,
}
