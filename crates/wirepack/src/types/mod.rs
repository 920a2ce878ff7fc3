pub mod generator;

use std::sync::Arc;

use oxc_index::IndexVec;
use wirepack_common::{ChunkIdx, InstantiatedChunk, NormalizedSerializerOptions};

pub type IndexInstantiatedChunks = IndexVec<ChunkIdx, InstantiatedChunk>;

pub type SharedOptions = Arc<NormalizedSerializerOptions>;
