use crate::{Artifact, ArtifactMetadata, ArtifactType, ChunkIdx, PreliminaryFilename};

/// A rendered chunk whose filename, and the filenames inside its source, may still carry hash
/// placeholders.
#[derive(Debug)]
pub struct InstantiatedChunk {
  pub origin_chunk: ChunkIdx,
  pub content: String,
  pub preliminary_filename: PreliminaryFilename,
  /// Path of the module the chunk is named after, relative to the server root.
  pub origin_filename: String,
  pub is_async: bool,
  pub requires: Vec<ChunkIdx>,
}

impl InstantiatedChunk {
  /// `requires` is left empty; it can only be filled in once every chunk has its final filename.
  pub fn finalize(self, filename: String, content: String) -> Artifact {
    Artifact {
      filename,
      kind: ArtifactType::Js,
      source: content,
      origin_filename: self.origin_filename,
      metadata: ArtifactMetadata { is_async: self.is_async, requires: vec![] },
    }
  }
}
