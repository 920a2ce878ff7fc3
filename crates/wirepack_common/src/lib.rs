mod chunk;
mod module;
mod options;
mod types;

pub use crate::{
  chunk::Chunk,
  module::{output_type::OutputType, Module},
  options::{
    normalized_serializer_options::NormalizedSerializerOptions, output_mode::OutputMode,
    platform::Platform, SerializerOptions,
  },
  types::{
    artifact::{Artifact, ArtifactMetadata, ArtifactType},
    chunk_kind::ChunkKind,
    dependency_edge::DependencyEdge,
    import_kind::ImportKind,
    instantiated_chunk::InstantiatedChunk,
    module_graph::ModuleGraph,
    module_id::ModuleId,
    preliminary_filename::PreliminaryFilename,
    raw_idx::{ChunkIdx, ModuleIdx},
    serialize_output::{SerializeOutput, SplitBundle},
    source::Source,
    source_joiner::SourceJoiner,
  },
};
