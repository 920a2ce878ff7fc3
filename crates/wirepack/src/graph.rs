use oxc_index::{index_vec, IndexVec};
use wirepack_common::{Chunk, ChunkIdx, ModuleIdx};

/// Output of the split stage: every chunk, and the chunk each emitted module lives in.
#[derive(Debug)]
pub struct ChunkGraph {
  pub chunk_table: IndexVec<ChunkIdx, Chunk>,
  pub module_to_chunk: IndexVec<ModuleIdx, Option<ChunkIdx>>,
}

impl ChunkGraph {
  pub fn new(module_count: usize) -> Self {
    Self { chunk_table: IndexVec::default(), module_to_chunk: index_vec![None; module_count] }
  }

  pub fn add_chunk(&mut self, chunk: Chunk) -> ChunkIdx {
    self.chunk_table.push(chunk)
  }

  pub fn add_module_to_chunk(&mut self, module_idx: ModuleIdx, chunk_idx: ChunkIdx) {
    debug_assert!(self.module_to_chunk[module_idx].is_none(), "a module belongs to one chunk");
    self.chunk_table[chunk_idx].modules.push(module_idx);
    self.module_to_chunk[module_idx] = Some(chunk_idx);
  }

  #[inline]
  pub fn chunk_of(&self, module_idx: ModuleIdx) -> Option<ChunkIdx> {
    self.module_to_chunk[module_idx]
  }

  /// The main chunk is always created first.
  #[inline]
  pub fn main_chunk_idx(&self) -> ChunkIdx {
    ChunkIdx::from_usize(0)
  }
}
