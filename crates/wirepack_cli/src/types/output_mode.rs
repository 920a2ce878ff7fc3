use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OutputMode {
  Classic,
  Static,
}

impl From<OutputMode> for wirepack::OutputMode {
  fn from(value: OutputMode) -> Self {
    match value {
      OutputMode::Classic => wirepack::OutputMode::Classic,
      OutputMode::Static => wirepack::OutputMode::Static,
    }
  }
}
