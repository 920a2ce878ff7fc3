use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SerializeError {
  /// A dependency edge points at a module the graph does not contain.
  #[error("module '{target}' imported by '{importer}' is not part of the module graph")]
  UnresolvedModule { importer: String, target: String },

  #[error("no entry point was provided to the serializer")]
  MissingEntryPoint,

  #[error("entry point '{entry}' is not part of the module graph")]
  EntryNotInGraph { entry: String },

  /// Two different chunks were finalized to the same filename. Downstream caches assume a
  /// filename identifies exactly one content, so this can never be emitted.
  #[error("chunks '{first}' and '{second}' were both assigned the filename '{filename}'")]
  FilenameCollision { filename: String, first: String, second: String },
}
