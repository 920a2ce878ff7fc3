use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Platform {
  Ios,
  Android,
  Web,
}

impl From<Platform> for wirepack::Platform {
  fn from(value: Platform) -> Self {
    match value {
      Platform::Ios => wirepack::Platform::Ios,
      Platform::Android => wirepack::Platform::Android,
      Platform::Web => wirepack::Platform::Web,
    }
  }
}
