use oxc_index::{index_vec, IndexVec};
use rustc_hash::FxHashMap;
use wirepack_common::{Chunk, ChunkIdx, ChunkKind, ModuleIdx};
use wirepack_utils::bitset::BitSet;

use crate::graph::ChunkGraph;

use super::{code_splitting::AsyncClosure, SplitStage};

impl SplitStage<'_> {
  /// Turns async closures into chunks. A module contained in two or more closures moves into a
  /// common chunk, one per distinct set of owning closures.
  pub(super) fn dedupe_common_modules(
    &self,
    chunk_graph: &mut ChunkGraph,
    async_closures: Vec<AsyncClosure>,
  ) {
    let bit_count = u32::try_from(async_closures.len()).expect("too many async chunks");
    let mut index_owners: IndexVec<ModuleIdx, BitSet> =
      index_vec![BitSet::new(bit_count); self.graph.len()];

    for (bit, closure) in (0u32..).zip(&async_closures) {
      closure.modules.iter().for_each(|module_idx| index_owners[*module_idx].set_bit(bit));
    }

    let async_chunk_indices = (0u32..)
      .zip(&async_closures)
      .map(|(bit, closure)| {
        let mut bits = BitSet::new(bit_count);
        bits.set_bit(bit);
        chunk_graph.add_chunk(Chunk::new(ChunkKind::Async { root: closure.root }, bits, vec![]))
      })
      .collect::<Vec<_>>();

    let mut common_chunk_by_owners: FxHashMap<BitSet, ChunkIdx> = FxHashMap::default();

    for (closure, chunk_idx) in async_closures.iter().zip(async_chunk_indices) {
      for &module_idx in &closure.modules {
        if chunk_graph.chunk_of(module_idx).is_some() {
          continue;
        }
        let owners = &index_owners[module_idx];
        if owners.count_ones() < 2 {
          chunk_graph.add_module_to_chunk(module_idx, chunk_idx);
          continue;
        }
        let common_chunk_idx = match common_chunk_by_owners.get(owners) {
          Some(idx) => *idx,
          None => {
            let idx = chunk_graph.add_chunk(Chunk::new(ChunkKind::Common, owners.clone(), vec![]));
            tracing::trace!(owners = %owners, "created common chunk");
            common_chunk_by_owners.insert(owners.clone(), idx);
            idx
          }
        };
        chunk_graph.add_module_to_chunk(module_idx, common_chunk_idx);
      }
    }
  }
}
