use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  Ios,
  Android,
  #[default]
  Web,
}

impl Platform {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Ios => "ios",
      Self::Android => "android",
      Self::Web => "web",
    }
  }
}

impl TryFrom<&str> for Platform {
  type Error = String;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    match value {
      "ios" => Ok(Self::Ios),
      "android" => Ok(Self::Android),
      "web" => Ok(Self::Web),
      _ => Err(format!("Invalid platform: {value:?}")),
    }
  }
}

impl Display for Platform {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
