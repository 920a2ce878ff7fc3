use serde::{Deserialize, Serialize};

/// What kind of output a module renders to once wrapped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
  #[default]
  Js,
  /// Source is a JSON document that becomes the module's exports.
  Json,
  /// Asset registration stub, rendered like JavaScript.
  Asset,
}
